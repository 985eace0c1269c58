//! `Handle`: an owning slot with an explicit, checked release.
//!
//! Containers release their memory when dropped. `Handle` adds the explicit destroy
//! call of the reference API on top of that: after [`Handle::destroy`] the slot is
//! empty, every accessor returns `NullPointer`, and a second destroy is reported
//! rather than performed twice.

use crate::{Result, error::Error};

/// An owned value that can be released explicitly and then never touched again.
pub struct Handle<T> {
    value: Option<T>,
}

impl<T> Handle<T> {
    /// Creates a live handle owning `value`.
    pub fn new(value: T) -> Handle<T> {
        Handle { value: Some(value) }
    }

    /// Creates a handle that owns nothing, as if it had already been destroyed.
    pub fn null() -> Handle<T> {
        Handle { value: None }
    }

    /// Returns `true` while the handle owns a value.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.value.is_some()
    }

    /// Returns a reference to the owned value, or `NullPointer` after destroy.
    #[inline]
    pub fn get(&self) -> Result<&T> {
        self.value.as_ref().ok_or_else(Self::null_error)
    }

    /// Returns a mutable reference to the owned value, or `NullPointer` after destroy.
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.value.as_mut().ok_or_else(Self::null_error)
    }

    /// Installs `value`, releasing whatever the handle owned before.
    pub fn install(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Moves the owned value out, leaving the handle null.
    pub fn take(&mut self) -> Result<T> {
        self.value.take().ok_or_else(Self::null_error)
    }

    /// Releases the owned value.
    ///
    /// Returns `NullPointer` if the handle was already destroyed (or never owned a
    /// value); the second call is a reported no-op, never a double release.
    pub fn destroy(&mut self) -> Result<()> {
        let value = self.take()?;
        log::debug!("destroying {}", std::any::type_name::<T>());
        drop(value);
        Ok(())
    }

    #[cold]
    fn null_error() -> Error {
        Error::null_pointer(std::any::type_name::<T>())
    }
}

impl<T> From<T> for Handle<T> {
    fn from(value: T) -> Self {
        Handle::new(value)
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Handle::null()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Handle").field(value).finish(),
            None => f.write_str("Handle(null)"),
        }
    }
}
