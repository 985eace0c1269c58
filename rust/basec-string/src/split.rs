use basec_common::{
    Handle, Result,
    error::Error,
    result::{verify_index, verify_non_empty},
};

use crate::{GrowableString, search::Matches};

/// An owned list of strings, as produced by [`GrowableString::split`].
///
/// The list owns every element. Dropping or destroying it releases each string
/// before the list's own storage.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StringList {
    items: Vec<GrowableString>,
}

impl StringList {
    pub fn new() -> StringList {
        StringList { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the string at `index`, or `OutOfBounds`.
    pub fn get(&self, index: usize) -> Result<&GrowableString> {
        verify_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    pub fn push(&mut self, s: GrowableString) {
        self.items.push(s);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrowableString> {
        self.items.iter()
    }

    /// Concatenates the strings, inserting `delimiter` between adjacent ones.
    pub fn join(&self, delimiter: &[u8]) -> Result<GrowableString> {
        let total = self
            .items
            .iter()
            .map(GrowableString::len)
            .sum::<usize>()
            .checked_add(delimiter.len() * self.items.len().saturating_sub(1))
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        let mut joined = GrowableString::with_capacity(total.max(1))?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                joined.append(delimiter)?;
            }
            joined.append(item.as_bytes())?;
        }
        Ok(joined)
    }

    pub fn into_vec(self) -> Vec<GrowableString> {
        self.items
    }
}

impl std::ops::Index<usize> for StringList {
    type Output = GrowableString;

    fn index(&self, index: usize) -> &GrowableString {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a GrowableString;
    type IntoIter = std::slice::Iter<'a, GrowableString>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for StringList {
    type Item = GrowableString;
    type IntoIter = std::vec::IntoIter<GrowableString>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl std::fmt::Debug for StringList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.items.iter().map(|s| s.to_string_lossy()))
            .finish()
    }
}

impl GrowableString {
    /// Splits the string at every non-overlapping occurrence of `delimiter`.
    ///
    /// Each byte range between consecutive occurrences becomes an independent
    /// string. A delimiter at the very start or end produces an empty segment at
    /// that position, as do adjacent delimiters, so joining the segments with
    /// `delimiter` always reproduces the source content. A delimiter that does not
    /// occur yields a single copy of the whole string. An empty delimiter fails with
    /// `Empty`.
    pub fn split(&self, delimiter: &[u8]) -> Result<StringList> {
        verify_non_empty(delimiter, "delimiter")?;
        let source = self.as_bytes();
        let mut list = StringList::new();
        let mut start = 0;
        for offset in Matches::new(source, delimiter) {
            list.push(GrowableString::copy_from_slice(&source[start..offset])?);
            start = offset + delimiter.len();
        }
        list.push(GrowableString::copy_from_slice(&source[start..])?);
        Ok(list)
    }
}

/// Destroys every string in the list, then the list itself.
///
/// Returns `NullPointer` if the handle was already destroyed.
pub fn destroy_all(list: &mut Handle<StringList>) -> Result<()> {
    let list = list.take()?;
    let count = list.len();
    for s in list {
        drop(s);
    }
    log::debug!("destroyed string list of {count} elements");
    Ok(())
}
