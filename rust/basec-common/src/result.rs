pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `index` addresses a live element of a container holding `len` elements.
#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_bounds(index, len)
    }
}

/// Checks that `index` is a valid insertion point, i.e. `index <= len`.
#[inline]
pub fn verify_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        out_of_bounds(index, len)
    }
}

/// Checks that a search pattern or container operand is non-empty.
#[inline]
pub fn verify_non_empty(bytes: &[u8], name: &str) -> Result<()> {
    if !bytes.is_empty() {
        Ok(())
    } else {
        empty(name)
    }
}

/// Checks that a caller-supplied element has exactly `stride` bytes.
#[inline]
pub fn verify_element(element: &[u8], stride: usize) -> Result<()> {
    if element.len() == stride {
        Ok(())
    } else {
        Err(crate::error::Error::stride_mismatch(stride, element.len()))
    }
}

/// Checks that a caller-supplied destination can receive exactly one element.
#[inline]
pub fn verify_destination(out: &[u8], stride: usize) -> Result<()> {
    if out.len() == stride {
        Ok(())
    } else {
        Err(crate::error::Error::memory_operation(format!(
            "destination is {} bytes, element stride is {stride}",
            out.len()
        )))
    }
}

#[cold]
pub fn out_of_bounds(index: usize, len: usize) -> Result<()> {
    Err(crate::error::Error::out_of_bounds(index, len))
}

#[cold]
pub fn empty(name: &str) -> Result<()> {
    Err(crate::error::Error::empty(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_verify_index_bounds() {
        for len in 0..4 {
            for index in 0..len {
                assert!(verify_index(index, len).is_ok());
            }
            let err = verify_index(len, len).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::OutOfBounds { .. }));
        }
    }

    #[test]
    fn test_verify_insert_index() {
        assert!(verify_insert_index(0, 0).is_ok());
        assert!(verify_insert_index(3, 3).is_ok());
        assert!(verify_insert_index(4, 3).is_err());
    }

    #[test]
    fn test_verify_element_and_destination() {
        assert!(verify_element(&[1, 2, 3, 4], 4).is_ok());
        let err = verify_element(&[1, 2], 4).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::StrideMismatch {
                expected: 4,
                actual: 2
            }
        ));

        let out = [0u8; 3];
        let err = verify_destination(&out, 4).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MemoryOperation { .. }));
    }

    #[test]
    fn test_verify_non_empty() {
        assert!(verify_non_empty(b"x", "needle").is_ok());
        let err = verify_non_empty(b"", "needle").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Empty { context } if context == "needle"));
    }
}
