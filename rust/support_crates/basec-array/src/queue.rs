use basec_common::{
    Result,
    error::Error,
    growth::GROWTH_FACTOR,
    result::{verify_destination, verify_element},
};

use crate::GrowableArray;

/// A first-in first-out queue of fixed-size elements.
///
/// The queue indexes a head and a size into a backing [`GrowableArray`] whose every
/// slot is allocated (its length equals the queue capacity). Enqueueing into a full
/// queue doubles the capacity and re-lays the live elements out from slot 0.
pub struct GrowableQueue {
    slots: GrowableArray,
    head: usize,
    size: usize,
}

impl GrowableQueue {
    /// Creates an empty queue with room for `capacity` elements of `stride` bytes.
    pub fn new(stride: usize, capacity: usize) -> Result<GrowableQueue> {
        if stride == 0 {
            return Err(Error::invalid_stride(stride));
        }
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        Ok(GrowableQueue {
            slots: GrowableArray::zeroed(stride, capacity)?,
            head: 0,
            size: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.slots.stride()
    }

    /// Adds a copy of `element` at the back of the queue.
    pub fn enqueue(&mut self, element: &[u8]) -> Result<()> {
        verify_element(element, self.stride())?;
        if self.size == self.capacity() {
            let new_capacity = self
                .capacity()
                .checked_mul(GROWTH_FACTOR)
                .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
            self.relayout(new_capacity)?;
        }
        let tail = self.slot(self.size);
        self.slots.set(tail, element)?;
        self.size += 1;
        Ok(())
    }

    /// Removes the oldest element and copies it into `out`.
    pub fn dequeue(&mut self, out: &mut [u8]) -> Result<()> {
        verify_destination(out, self.stride())?;
        out.copy_from_slice(self.front()?);
        self.size -= 1;
        self.head = if self.size == 0 {
            0
        } else {
            (self.head + 1) % self.capacity()
        };
        Ok(())
    }

    /// Returns the bytes of the oldest element without removing it.
    pub fn front(&self) -> Result<&[u8]> {
        if self.is_empty() {
            return Err(Error::empty("queue is empty"));
        }
        self.slots.get_bytes(self.head)
    }

    /// Changes the capacity to `new_capacity`.
    ///
    /// Growing keeps every element. Shrinking below the current size keeps the
    /// `new_capacity` oldest elements and discards the newest ones.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(Error::invalid_capacity(new_capacity));
        }
        if new_capacity == self.capacity() {
            return Ok(());
        }
        log::debug!(
            "queue resize: stride {}, capacity {} -> {}, size {}",
            self.stride(),
            self.capacity(),
            new_capacity,
            self.size
        );
        self.relayout(new_capacity)
    }

    /// Returns an iterator over the elements from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.size).map(move |i| &self.slots.as_bytes()[self.byte_range(i)])
    }

    /// Moves the live elements into a fresh backing array of `new_capacity` slots.
    ///
    /// The new array is fully built before it replaces the old one, so a failed
    /// allocation leaves the queue unchanged.
    fn relayout(&mut self, new_capacity: usize) -> Result<()> {
        let mut slots = GrowableArray::zeroed(self.stride(), new_capacity)?;
        let kept = self.size.min(new_capacity);
        for i in 0..kept {
            slots.set(i, &self.slots.as_bytes()[self.byte_range(i)])?;
        }
        log::trace!(
            "queue relayout: capacity {} -> {}",
            self.capacity(),
            new_capacity
        );
        self.slots = slots;
        self.head = 0;
        self.size = kept;
        Ok(())
    }

    /// Maps a logical position (0 = oldest) to a backing slot index.
    #[inline]
    fn slot(&self, position: usize) -> usize {
        (self.head + position) % self.capacity()
    }

    #[inline]
    fn byte_range(&self, position: usize) -> std::ops::Range<usize> {
        let start = self.slot(position) * self.stride();
        start..start + self.stride()
    }
}

impl GrowableQueue {
    pub fn enqueue_typed<T>(&mut self, value: T) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.enqueue(bytemuck::bytes_of(&value))
    }

    pub fn dequeue_typed<T>(&mut self) -> Result<T>
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        let mut value: T = bytemuck::Zeroable::zeroed();
        self.dequeue(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }
}

impl std::fmt::Debug for GrowableQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableQueue")
            .field("stride", &self.stride())
            .field("len", &self.size)
            .field("cap", &self.capacity())
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use basec_common::{Handle, error::ErrorKind};

    use super::*;

    #[test]
    fn test_queue_create() {
        let queue = GrowableQueue::new(4, 10).unwrap();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 10);
        assert!(queue.is_empty());

        let err = GrowableQueue::new(0, 10).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidStride { .. }));
        let err = GrowableQueue::new(4, 0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidCapacity { .. }));
    }

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = GrowableQueue::new(4, 5).unwrap();
        for v in [1i32, 2, 3] {
            queue.enqueue_typed(v).unwrap();
        }
        assert_eq!(queue.dequeue_typed::<i32>().unwrap(), 1);
        queue.enqueue_typed(4i32).unwrap();
        assert_eq!(queue.dequeue_typed::<i32>().unwrap(), 2);
        assert_eq!(queue.dequeue_typed::<i32>().unwrap(), 3);
        assert_eq!(queue.dequeue_typed::<i32>().unwrap(), 4);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_grows_when_full() {
        let mut queue = GrowableQueue::new(4, 5).unwrap();
        for v in 0..5i32 {
            queue.enqueue_typed(v).unwrap();
        }
        assert_eq!(queue.capacity(), 5);
        queue.enqueue_typed(5i32).unwrap();
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.capacity(), 10);
        for v in 0..6i32 {
            assert_eq!(queue.dequeue_typed::<i32>().unwrap(), v);
        }
    }

    #[test]
    fn test_queue_wraparound_then_grow() {
        let mut queue = GrowableQueue::new(1, 4).unwrap();
        for v in [1u8, 2, 3, 4] {
            queue.enqueue(&[v]).unwrap();
        }
        assert_eq!(queue.dequeue_typed::<u8>().unwrap(), 1);
        assert_eq!(queue.dequeue_typed::<u8>().unwrap(), 2);
        queue.enqueue(&[5]).unwrap();
        queue.enqueue(&[6]).unwrap();
        // Full with a wrapped tail; the next enqueue relays out.
        queue.enqueue(&[7]).unwrap();
        assert_eq!(queue.capacity(), 8);
        let items: Vec<u8> = queue.iter().map(|e| e[0]).collect();
        assert_eq!(items, [3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_queue_dequeue_empty() {
        let mut queue = GrowableQueue::new(4, 2).unwrap();
        let mut out = [0u8; 4];
        let err = queue.dequeue(&mut out).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Empty { .. }));
        assert!(queue.front().is_err());

        let mut small = [0u8; 2];
        queue.enqueue_typed(9i32).unwrap();
        let err = queue.dequeue(&mut small).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MemoryOperation { .. }));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_enqueue_wrong_size() {
        let mut queue = GrowableQueue::new(4, 2).unwrap();
        let err = queue.enqueue(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::StrideMismatch { .. }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_resize() {
        let mut queue = GrowableQueue::new(4, 10).unwrap();
        for v in 0..8i32 {
            queue.enqueue_typed(v).unwrap();
        }
        assert!(queue.resize(0).is_err());

        queue.resize(15).unwrap();
        assert_eq!(queue.capacity(), 15);
        assert_eq!(queue.len(), 8);

        queue.resize(5).unwrap();
        assert_eq!(queue.capacity(), 5);
        assert_eq!(queue.len(), 5);
        for v in 0..5i32 {
            assert_eq!(queue.dequeue_typed::<i32>().unwrap(), v);
        }

        queue.resize(5).unwrap();
        assert_eq!(queue.capacity(), 5);
    }

    #[test]
    fn test_queue_front() {
        let mut queue = GrowableQueue::new(2, 2).unwrap();
        queue.enqueue_typed(7u16).unwrap();
        queue.enqueue_typed(8u16).unwrap();
        assert_eq!(queue.front().unwrap(), &7u16.to_ne_bytes());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_queue_destroy_twice() {
        let mut handle = Handle::new(GrowableQueue::new(8, 4).unwrap());
        handle.get_mut().unwrap().enqueue_typed(1u64).unwrap();
        assert!(handle.destroy().is_ok());
        assert!(handle.destroy().unwrap_err().is_null_pointer());
    }

    #[test]
    fn test_queue_matches_vecdeque_randomized() {
        fastrand::seed(7);
        let mut queue = GrowableQueue::new(4, 3).unwrap();
        let mut model = std::collections::VecDeque::new();
        for _ in 0..2000 {
            if fastrand::bool() {
                let v = fastrand::u32(..);
                queue.enqueue_typed(v).unwrap();
                model.push_back(v);
            } else {
                match model.pop_front() {
                    Some(expected) => assert_eq!(queue.dequeue_typed::<u32>().unwrap(), expected),
                    None => assert!(queue.dequeue_typed::<u32>().is_err()),
                }
            }
            assert_eq!(queue.len(), model.len());
            assert!(queue.capacity() >= queue.len());
        }
    }
}
