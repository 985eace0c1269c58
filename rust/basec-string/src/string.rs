use std::borrow::Cow;

use basec_common::{
    Result,
    error::Error,
    growth::{GROWTH_FACTOR, grown_capacity, reserve_total},
};

/// Byte written after the content so the buffer can be handed out as a
/// terminated sequence.
const TERMINATOR: u8 = 0;

/// A mutable byte string with a tracked length and capacity.
///
/// The content is an opaque byte run: no encoding is assumed or validated. The
/// buffer always holds the `len()` content bytes followed by one terminator byte,
/// which is never counted in the length.
///
/// Capacity grows by the shared doubling policy whenever an operation would exceed
/// it, and never shrinks. Growth reserves memory before any state is changed, so a
/// failed allocation leaves the string untouched.
pub struct GrowableString {
    /// Content followed by the terminator; `buf.len() == len + 1`.
    buf: Vec<u8>,
    /// Content bytes that fit without reallocating.
    capacity: usize,
}

impl GrowableString {
    /// Creates a string holding a copy of `initial` with room for `capacity` bytes.
    ///
    /// If `initial` is longer than `capacity`, the capacity is raised to
    /// `initial.len() * GROWTH_FACTOR`. A zero `capacity` is rejected with
    /// `InvalidCapacity`.
    pub fn new(initial: impl AsRef<[u8]>, capacity: usize) -> Result<GrowableString> {
        let initial = initial.as_ref();
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        let capacity = if initial.len() > capacity {
            initial
                .len()
                .checked_mul(GROWTH_FACTOR)
                .ok_or_else(|| Error::allocation_failure(usize::MAX))?
        } else {
            capacity
        };
        let mut s = GrowableString::allocate(capacity)?;
        s.buf.pop();
        s.buf.extend_from_slice(initial);
        s.buf.push(TERMINATOR);
        Ok(s)
    }

    /// Creates an empty string with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Result<GrowableString> {
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        GrowableString::allocate(capacity)
    }

    /// Creates a string holding exactly `bytes`, sized to fit (at least one byte).
    pub fn copy_from_slice(bytes: &[u8]) -> Result<GrowableString> {
        GrowableString::new(bytes, bytes.len().max(1))
    }

    /// Returns the content length in bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of content bytes the string can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the content bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the content bytes followed by the terminator.
    #[inline]
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.buf
    }

    /// Returns a pointer to a terminated copy-free view of the content, for
    /// consumers expecting a C-style string.
    ///
    /// The pointer is invalidated by any mutation of the string.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Returns the content as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Reserves room for at least `additional` more content bytes.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        self.ensure_capacity(required)
    }

    /// Replaces the whole content with `bytes`.
    pub fn set(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_capacity(bytes.len())?;
        self.buf.clear();
        self.buf.extend_from_slice(bytes);
        self.buf.push(TERMINATOR);
        Ok(())
    }

    /// Appends `bytes` after the current content.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.buf.pop();
        self.buf.extend_from_slice(bytes);
        self.buf.push(TERMINATOR);
        Ok(())
    }

    /// Inserts `bytes` before the current content.
    pub fn prepend(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        let len = self.len();
        let shift = bytes.len();
        // The terminator moves along with the content.
        self.buf.resize(len + 1 + shift, TERMINATOR);
        self.buf.copy_within(0..len + 1, shift);
        self.buf[..shift].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns a new string holding this content followed by `other`'s.
    pub fn concat(&self, other: &GrowableString) -> Result<GrowableString> {
        let len = self
            .len()
            .checked_add(other.len())
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        let mut s = GrowableString::with_capacity(len.max(self.capacity))?;
        s.append(self.as_bytes())?;
        s.append(other.as_bytes())?;
        Ok(s)
    }

    /// Shortens the content to `len` bytes. Has no effect if `len` is not shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.buf.truncate(len);
            self.buf.push(TERMINATOR);
        }
    }

    /// Removes all content, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    fn allocate(capacity: usize) -> Result<GrowableString> {
        let total = capacity
            .checked_add(1)
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        let mut buf = Vec::new();
        reserve_total(&mut buf, total)?;
        buf.push(TERMINATOR);
        Ok(GrowableString { buf, capacity })
    }

    /// Grows the capacity so that at least `required` content bytes fit.
    fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity {
            return Ok(());
        }
        self.grow(required)
    }

    #[cold]
    fn grow(&mut self, required: usize) -> Result<()> {
        let new_capacity = grown_capacity(self.capacity, required)?;
        let total = new_capacity
            .checked_add(1)
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        reserve_total(&mut self.buf, total)?;
        log::trace!(
            "string grow: len {}, capacity {} -> {}",
            self.len(),
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

impl Clone for GrowableString {
    fn clone(&self) -> GrowableString {
        let mut buf = Vec::with_capacity(self.capacity + 1);
        buf.extend_from_slice(&self.buf);
        GrowableString {
            buf,
            capacity: self.capacity,
        }
    }
}

impl PartialEq for GrowableString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for GrowableString {}

impl PartialEq<[u8]> for GrowableString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&str> for GrowableString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl AsRef<[u8]> for GrowableString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for GrowableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl std::fmt::Debug for GrowableString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableString")
            .field("value", &self.to_string_lossy())
            .field("len", &self.len())
            .field("cap", &self.capacity)
            .finish_non_exhaustive()
    }
}
