use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn null_pointer(context: impl Into<String>) -> Error {
        ErrorKind::NullPointer {
            context: context.into(),
        }
        .into()
    }

    pub fn invalid_stride(stride: usize) -> Error {
        ErrorKind::InvalidStride { stride }.into()
    }

    pub fn invalid_capacity(capacity: usize) -> Error {
        ErrorKind::InvalidCapacity { capacity }.into()
    }

    pub fn stride_mismatch(expected: usize, actual: usize) -> Error {
        ErrorKind::StrideMismatch { expected, actual }.into()
    }

    pub fn allocation_failure(requested: usize) -> Error {
        ErrorKind::AllocationFailure { requested }.into()
    }

    pub fn memory_operation(context: impl Into<String>) -> Error {
        ErrorKind::MemoryOperation {
            context: context.into(),
        }
        .into()
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Error {
        ErrorKind::OutOfBounds { index, len }.into()
    }

    pub fn empty(context: impl Into<String>) -> Error {
        ErrorKind::Empty {
            context: context.into(),
        }
        .into()
    }

    pub fn not_found() -> Error {
        ErrorKind::NotFound.into()
    }

    /// Returns `true` if this error reports an access to a destroyed or absent handle.
    pub fn is_null_pointer(&self) -> bool {
        matches!(self.kind(), ErrorKind::NullPointer { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("null pointer: {context}")]
    NullPointer { context: String },

    #[error("invalid element stride {stride}")]
    InvalidStride { stride: usize },

    #[error("invalid capacity {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error("element size {actual} does not match stride {expected}")]
    StrideMismatch { expected: usize, actual: usize },

    #[error("failed to allocate {requested} bytes")]
    AllocationFailure { requested: usize },

    #[error("memory operation failed: {context}")]
    MemoryOperation { context: String },

    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("empty: {context}")]
    Empty { context: String },

    #[error("not found")]
    NotFound,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::out_of_bounds(3, 3);
        assert!(matches!(
            err.kind(),
            ErrorKind::OutOfBounds { index: 3, len: 3 }
        ));
        assert_eq!(err.to_string(), "index 3 is out of bounds for length 3");
        assert!(matches!(err.into_kind(), ErrorKind::OutOfBounds { .. }));
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::null_pointer("array").is_null_pointer());
        assert!(Error::not_found().is_not_found());
        assert!(!Error::empty("pop").is_not_found());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }
}
