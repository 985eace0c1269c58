//! Command implementations for basec-cmd

use anyhow::{Context, Result};
use basec_string::GrowableString;

pub mod demo;
pub mod find;
pub mod replace;
pub mod split;

/// Copies a command-line argument into a [`GrowableString`].
pub fn load_text(text: &str) -> Result<GrowableString> {
    GrowableString::copy_from_slice(text.as_bytes())
        .with_context(|| format!("Failed to create string from {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text() {
        let s = load_text("a,b").unwrap();
        assert_eq!(s, "a,b");
        assert_eq!(s.capacity(), 3);

        let empty = load_text("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 1);
    }
}
