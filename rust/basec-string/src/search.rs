//! Byte-run searches over a [`GrowableString`].

use basec_array::{GrowableArray, INDEX_ARRAY_CAPACITY};
use basec_common::{Result, error::Error, result::verify_non_empty};

use crate::GrowableString;

/// Returns the offset of the leftmost occurrence of `needle` in `haystack` at or
/// after `from`.
///
/// `needle` must be non-empty.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    debug_assert!(!needle.is_empty());
    if from > haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    let (first, rest) = needle.split_first()?;
    let last_start = haystack.len() - needle.len();
    let mut pos = from;
    while pos <= last_start {
        // Skip to the next candidate first byte before comparing the remainder.
        let skip = haystack[pos..=last_start].iter().position(|b| b == first)?;
        pos += skip;
        if &haystack[pos + 1..pos + needle.len()] == rest {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// Iterator over the offsets of non-overlapping, leftmost-first occurrences.
pub(crate) struct Matches<'a> {
    haystack: &'a [u8],
    needle: &'a [u8],
    pos: usize,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(haystack: &'a [u8], needle: &'a [u8]) -> Matches<'a> {
        Matches {
            haystack,
            needle,
            pos: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = find_bytes(self.haystack, self.needle, self.pos)?;
        self.pos = found + self.needle.len();
        Some(found)
    }
}

impl GrowableString {
    /// Returns the byte offset of the leftmost occurrence of `needle`.
    ///
    /// Fails with `Empty` for an empty needle and with `NotFound` if there is no
    /// occurrence.
    pub fn find(&self, needle: &[u8]) -> Result<usize> {
        self.find_from(needle, 0)
    }

    /// Returns the byte offset of the leftmost occurrence of `needle` that starts
    /// at or after `start`.
    pub fn find_from(&self, needle: &[u8], start: usize) -> Result<usize> {
        verify_non_empty(needle, "needle")?;
        find_bytes(self.as_bytes(), needle, start).ok_or_else(Error::not_found)
    }

    /// Returns `true` if `needle` occurs in the string. An empty needle is never
    /// reported as contained.
    pub fn contains(&self, needle: &[u8]) -> bool {
        !needle.is_empty() && find_bytes(self.as_bytes(), needle, 0).is_some()
    }

    /// Returns the offsets of every non-overlapping occurrence of `needle`, scanning
    /// left to right, as an array of `u64`.
    ///
    /// A needle that does not occur yields an empty array, not an error. An empty
    /// needle fails with `Empty`.
    pub fn find_all(&self, needle: &[u8]) -> Result<GrowableArray> {
        verify_non_empty(needle, "needle")?;
        let mut offsets = GrowableArray::new(std::mem::size_of::<u64>(), INDEX_ARRAY_CAPACITY)?;
        for offset in Matches::new(self.as_bytes(), needle) {
            offsets.push_typed(offset as u64)?;
        }
        Ok(offsets)
    }

    /// Returns the number of non-overlapping occurrences of `needle`.
    pub fn count(&self, needle: &[u8]) -> Result<usize> {
        verify_non_empty(needle, "needle")?;
        Ok(Matches::new(self.as_bytes(), needle).count())
    }
}
