//! The capacity growth policy shared by every basec container.
//!
//! Containers keep an explicit logical capacity. When an operation needs more room,
//! the capacity is multiplied by [`GROWTH_FACTOR`] until the requirement fits, and
//! the new storage is reserved fallibly before any container state is touched.

use crate::{Result, error::Error};

/// Multiplier applied to a container's capacity when it overflows.
pub const GROWTH_FACTOR: usize = 2;

/// Computes the capacity a container must grow to in order to hold `required` slots.
///
/// Returns `current` unchanged if it is already sufficient. Otherwise `current` is
/// doubled (repeatedly) until it reaches `required`. A zero `current` starts from 1.
pub fn grown_capacity(current: usize, required: usize) -> Result<usize> {
    let mut capacity = current;
    if capacity >= required {
        return Ok(capacity);
    }
    if capacity == 0 {
        capacity = 1;
    }
    while capacity < required {
        capacity = capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
    }
    Ok(capacity)
}

/// Reserves storage so that `buf` can hold `total` bytes without reallocating.
///
/// On failure `buf` is left unchanged and `AllocationFailure` is returned.
pub fn reserve_total(buf: &mut Vec<u8>, total: usize) -> Result<()> {
    if total <= buf.capacity() {
        return Ok(());
    }
    buf.try_reserve_exact(total - buf.len())
        .map_err(|_| Error::allocation_failure(total))
}

/// Computes `slots × stride` as a byte count.
#[inline]
pub fn byte_size(slots: usize, stride: usize) -> Result<usize> {
    slots
        .checked_mul(stride)
        .ok_or_else(|| Error::allocation_failure(usize::MAX))
}
