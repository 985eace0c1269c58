//! Core definitions relied upon by all basec-* crates: the error type, argument
//! verification helpers, the shared capacity growth policy and the destroy-guarded
//! [`Handle`](handle::Handle).

pub mod error;
pub mod growth;
pub mod handle;
pub mod result;

pub use handle::Handle;
pub use result::Result;
