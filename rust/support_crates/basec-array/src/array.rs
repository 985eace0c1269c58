use basec_common::{
    Result,
    error::Error,
    growth::{byte_size, grown_capacity, reserve_total},
    result::{verify_destination, verify_element, verify_index, verify_insert_index},
};

/// A growable sequence of fixed-size, type-erased elements.
///
/// Every element occupies exactly `stride` bytes. The stride is chosen at creation and
/// never changes. Equality between elements is raw byte equality over the stride, so
/// element types holding pointers compare by address, not by pointee.
///
/// # Capacity
/// - The array tracks its capacity in element slots, independently of the allocator.
/// - When an append or insert would exceed it, the capacity is doubled (see
///   [`basec_common::growth`]); it never shrinks.
/// - Growth reserves the new storage before touching any state, so an allocation
///   failure leaves the array exactly as it was.
pub struct GrowableArray {
    /// Live element bytes, `len * stride` long.
    data: Vec<u8>,
    /// Size of one element in bytes.
    stride: usize,
    /// Number of element slots the storage can hold without growing.
    capacity: usize,
}

impl GrowableArray {
    /// Creates an empty array with room for `capacity` elements of `stride` bytes.
    ///
    /// Fails with `InvalidStride` if `stride` is zero and with `InvalidCapacity` if
    /// `capacity` is zero.
    pub fn new(stride: usize, capacity: usize) -> Result<GrowableArray> {
        if stride == 0 {
            return Err(Error::invalid_stride(stride));
        }
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        let mut data = Vec::new();
        reserve_total(&mut data, byte_size(capacity, stride)?)?;
        Ok(GrowableArray {
            data,
            stride,
            capacity,
        })
    }

    /// Creates an array of `len` zero-filled elements.
    pub fn zeroed(stride: usize, len: usize) -> Result<GrowableArray> {
        let mut array = GrowableArray::new(stride, len)?;
        let size = byte_size(len, stride)?;
        array.data.resize(size, 0);
        Ok(array)
    }

    /// Creates an array holding a copy of `values`, with a stride of `size_of::<T>()`.
    pub fn from_typed_slice<T>(values: &[T]) -> Result<GrowableArray>
    where
        T: bytemuck::NoUninit,
    {
        let mut array = GrowableArray::new(std::mem::size_of::<T>(), values.len().max(1))?;
        array.data.extend_from_slice(bytemuck::cast_slice(values));
        Ok(array)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the array can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the size of one element in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the live elements as one contiguous byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the total allocated size in bytes.
    pub fn heap_size(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements, growing by the shared
    /// growth policy.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or_else(|| Error::allocation_failure(usize::MAX))?;
        self.ensure_capacity(required)
    }

    /// Appends a copy of `element`, which must be exactly `stride` bytes long.
    ///
    /// The borrow checker guarantees `element` does not alias this array's storage,
    /// which growth may relocate.
    pub fn append(&mut self, element: &[u8]) -> Result<()> {
        verify_element(element, self.stride)?;
        if self.len() == self.capacity {
            self.ensure_capacity(self.capacity + 1)?;
        }
        self.data.extend_from_slice(element);
        Ok(())
    }

    /// Inserts a copy of `element` at `index`, shifting later elements to the right.
    ///
    /// `index` may equal the length, in which case this is an append.
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<()> {
        verify_element(element, self.stride)?;
        let len = self.len();
        verify_insert_index(index, len)?;
        if len == self.capacity {
            self.ensure_capacity(self.capacity + 1)?;
        }
        let at = index * self.stride;
        self.data.splice(at..at, element.iter().copied());
        Ok(())
    }

    /// Removes the element at `index`, shifting later elements to the left.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        verify_index(index, self.len())?;
        let range = self.slot_range(index);
        self.data.drain(range);
        Ok(())
    }

    /// Removes the last element and copies it into `out`.
    ///
    /// Fails with `Empty` if there is nothing to pop; `out` is then left untouched.
    /// The capacity is never reduced.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<()> {
        verify_destination(out, self.stride)?;
        if self.is_empty() {
            return Err(Error::empty("pop from an empty array"));
        }
        let start = self.data.len() - self.stride;
        out.copy_from_slice(&self.data[start..]);
        self.data.truncate(start);
        Ok(())
    }

    /// Copies the element at `index` into `out`.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<()> {
        verify_destination(out, self.stride)?;
        out.copy_from_slice(self.get_bytes(index)?);
        Ok(())
    }

    /// Returns the bytes of the element at `index`.
    pub fn get_bytes(&self, index: usize) -> Result<&[u8]> {
        verify_index(index, self.len())?;
        Ok(&self.data[self.slot_range(index)])
    }

    /// Overwrites the element at `index` with a copy of `element`.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<()> {
        verify_element(element, self.stride)?;
        verify_index(index, self.len())?;
        let range = self.slot_range(index);
        self.data[range].copy_from_slice(element);
        Ok(())
    }

    /// Returns `true` if some element is byte-for-byte equal to `element`.
    ///
    /// An `element` whose size differs from the stride never matches.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.position(element).is_some()
    }

    /// Returns the index of the first element byte-for-byte equal to `element`.
    pub fn find(&self, element: &[u8]) -> Result<usize> {
        self.position(element).ok_or_else(Error::not_found)
    }

    /// Returns a new array of `u64` indices of every element equal to `element`,
    /// in ascending order.
    ///
    /// No match is not an error: the result is then an empty array.
    pub fn find_all(&self, element: &[u8]) -> Result<GrowableArray> {
        let mut indices = GrowableArray::new(std::mem::size_of::<u64>(), INDEX_ARRAY_CAPACITY)?;
        if element.len() != self.stride {
            return Ok(indices);
        }
        for (index, slot) in self.iter().enumerate() {
            if slot == element {
                indices.push_typed(index as u64)?;
            }
        }
        Ok(indices)
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements as byte slices.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.stride)
    }

    #[inline]
    fn slot_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = index * self.stride;
        start..start + self.stride
    }

    fn position(&self, element: &[u8]) -> Option<usize> {
        if element.len() != self.stride {
            return None;
        }
        self.iter().position(|slot| slot == element)
    }

    /// Grows the capacity so that at least `required` elements fit.
    fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity {
            return Ok(());
        }
        self.grow(required)
    }

    #[cold]
    fn grow(&mut self, required: usize) -> Result<()> {
        let new_capacity = grown_capacity(self.capacity, required)?;
        reserve_total(&mut self.data, byte_size(new_capacity, self.stride)?)?;
        log::trace!(
            "array grow: stride {}, capacity {} -> {}",
            self.stride,
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

/// Initial slot count of the index arrays produced by `find_all`.
pub const INDEX_ARRAY_CAPACITY: usize = 8;

impl GrowableArray {
    /// Appends `value` by copying its bytes. `size_of::<T>()` must equal the stride.
    #[inline]
    pub fn push_typed<T>(&mut self, value: T) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.append(bytemuck::bytes_of(&value))
    }

    /// Removes the last element and returns it as a `T`.
    pub fn pop_typed<T>(&mut self) -> Result<T>
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        let mut value: T = bytemuck::Zeroable::zeroed();
        self.pop(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Reads the element at `index` as a `T`.
    pub fn get_typed<T>(&self, index: usize) -> Result<T>
    where
        T: bytemuck::AnyBitPattern,
    {
        self.verify_typed::<T>()?;
        Ok(bytemuck::pod_read_unaligned(self.get_bytes(index)?))
    }

    /// Overwrites the element at `index` with `value`.
    pub fn set_typed<T>(&mut self, index: usize, value: T) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.set(index, bytemuck::bytes_of(&value))
    }

    /// Returns an iterator reading every element as a `T`.
    pub fn typed_iter<T>(&self) -> Result<impl Iterator<Item = T> + '_>
    where
        T: bytemuck::AnyBitPattern,
    {
        self.verify_typed::<T>()?;
        Ok(self.iter().map(bytemuck::pod_read_unaligned::<T>))
    }

    /// Collects every element into a `Vec<T>`.
    pub fn to_typed_vec<T>(&self) -> Result<Vec<T>>
    where
        T: bytemuck::AnyBitPattern,
    {
        Ok(self.typed_iter::<T>()?.collect())
    }

    fn verify_typed<T>(&self) -> Result<()> {
        let size = std::mem::size_of::<T>();
        if size == self.stride {
            Ok(())
        } else {
            Err(Error::stride_mismatch(self.stride, size))
        }
    }
}

impl Clone for GrowableArray {
    fn clone(&self) -> GrowableArray {
        let mut data = Vec::with_capacity(self.capacity * self.stride);
        data.extend_from_slice(&self.data);
        GrowableArray {
            data,
            stride: self.stride,
            capacity: self.capacity,
        }
    }
}

impl PartialEq for GrowableArray {
    fn eq(&self, other: &Self) -> bool {
        self.stride == other.stride && self.data == other.data
    }
}

impl Eq for GrowableArray {}

impl std::fmt::Debug for GrowableArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableArray")
            .field("values", &self.data)
            .field("stride", &self.stride)
            .field("len", &self.len())
            .field("cap", &self.capacity)
            .finish_non_exhaustive()
    }
}
