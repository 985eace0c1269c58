//! Growable, type-erased element containers for the basec runtime.
//!
//! - [`GrowableArray`]: a contiguous sequence of fixed-stride elements with
//!   bounds-checked access and doubling growth.
//! - [`GrowableQueue`]: a FIFO queue indexing a head and size into a backing
//!   `GrowableArray`.
//!
//! Elements are opaque byte runs of the container's stride. The `*_typed` helpers
//! copy plain-old-data values in and out through `bytemuck`.

mod array;
mod queue;

pub use array::{GrowableArray, INDEX_ARRAY_CAPACITY};
pub use queue::GrowableQueue;
