use basec_common::{Result, result::verify_non_empty};

use crate::{GrowableString, search::Matches};

impl GrowableString {
    /// Returns a new string in which every non-overlapping occurrence of `find` is
    /// replaced by `replacement`.
    ///
    /// The scan runs once, left to right: at each match the unmatched span before it
    /// and then the replacement are appended to the output, and scanning resumes
    /// after the matched span. The source string is not modified. The output starts
    /// with the source's capacity and grows as needed.
    pub fn replace(&self, find: &[u8], replacement: &[u8]) -> Result<GrowableString> {
        verify_non_empty(find, "find pattern")?;
        let source = self.as_bytes();
        let mut output = GrowableString::with_capacity(self.capacity())?;
        let mut copied = 0;
        for offset in Matches::new(source, find) {
            output.append(&source[copied..offset])?;
            output.append(replacement)?;
            copied = offset + find.len();
        }
        output.append(&source[copied..])?;
        Ok(output)
    }

    /// Replaces every occurrence of `find` by `replacement` in this string.
    ///
    /// The result is built in full before it is installed; the previous buffer is
    /// released only then. On failure the string is left unchanged.
    pub fn replace_in_place(&mut self, find: &[u8], replacement: &[u8]) -> Result<()> {
        let replaced = self.replace(find, replacement)?;
        *self = replaced;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use basec_common::{Handle, error::ErrorKind};

    use super::*;

    #[test]
    fn test_replace_single() {
        let s = GrowableString::new("Hello, World!", 16).unwrap();
        let r = s.replace(b"World", b"Universe").unwrap();
        assert_eq!(r, "Hello, Universe!");
        assert_eq!(r.len(), 16);
        assert_eq!(s, "Hello, World!");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let s = GrowableString::new("A1, B2, C3, D4, E5", 32).unwrap();
        let r = s.replace(b", ", b"|").unwrap();
        assert_eq!(r, "A1|B2|C3|D4|E5");
    }

    #[test]
    fn test_replace_non_overlapping_leftmost() {
        let s = GrowableString::new("aaaa", 4).unwrap();
        assert_eq!(s.replace(b"aa", b"b").unwrap(), "bb");
        let s = GrowableString::new("aaa", 4).unwrap();
        assert_eq!(s.replace(b"aa", b"b").unwrap(), "ba");
    }

    #[test]
    fn test_replace_does_not_rescan_replacement() {
        let s = GrowableString::new("ab", 4).unwrap();
        assert_eq!(s.replace(b"a", b"aa").unwrap(), "aab");
    }

    #[test]
    fn test_replace_with_empty() {
        let s = GrowableString::new("x-y-z", 8).unwrap();
        assert_eq!(s.replace(b"-", b"").unwrap(), "xyz");
    }

    #[test]
    fn test_replace_no_match_copies() {
        let s = GrowableString::new("abc", 8).unwrap();
        let r = s.replace(b"zz", b"y").unwrap();
        assert_eq!(r, "abc");
        assert_eq!(r.capacity(), 8);
    }

    #[test]
    fn test_replace_empty_pattern() {
        let s = GrowableString::new("abc", 8).unwrap();
        let err = s.replace(b"", b"x").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Empty { .. }));
    }

    #[test]
    fn test_replace_in_place() {
        let mut s = GrowableString::new("A1, B2, C3, D4", 14).unwrap();
        s.append(b", E5").unwrap();
        s.replace_in_place(b", ", b"|").unwrap();
        assert_eq!(s, "A1|B2|C3|D4|E5");
    }

    #[test]
    fn test_replace_in_place_failure_leaves_source() {
        let mut s = GrowableString::new("abc", 8).unwrap();
        assert!(s.replace_in_place(b"", b"x").is_err());
        assert_eq!(s, "abc");
    }

    #[test]
    fn test_replace_through_handle() {
        let mut handle = Handle::new(GrowableString::new("Hello, World!", 16).unwrap());
        handle
            .get_mut()
            .unwrap()
            .replace_in_place(b"World", b"Universe")
            .unwrap();
        assert_eq!(*handle.get().unwrap(), "Hello, Universe!");
        handle.destroy().unwrap();
        assert!(handle.get_mut().unwrap_err().is_null_pointer());
    }
}
