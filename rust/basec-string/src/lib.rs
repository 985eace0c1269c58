//! Growable byte strings with search, replace and split.
//!
//! [`GrowableString`] owns a byte run with a tracked length and capacity, kept
//! terminated by a zero byte past the content. Searches report byte offsets;
//! [`GrowableString::find_all`] returns them as a `u64` [`basec_array::GrowableArray`].
//! [`GrowableString::split`] produces a [`StringList`] of independent strings.

mod replace;
mod search;
mod split;
mod string;

#[cfg(test)]
mod tests;

pub use split::{StringList, destroy_all};
pub use string::GrowableString;
