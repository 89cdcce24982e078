pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies that `index` is a valid position within a sequence of length `len`.
#[inline]
pub fn verify_in_bounds(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

/// Verifies that a sequence is non-empty before an operation that has no
/// defined result on an empty input.
#[inline]
pub fn verify_non_empty(len: usize, operation: &str) -> Result<()> {
    if len != 0 {
        Ok(())
    } else {
        empty_sequence(operation)
    }
}

#[cold]
pub fn out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, len }.into())
}

#[cold]
pub fn empty_sequence(operation: &str) -> Result<()> {
    Err(crate::error::ErrorKind::EmptySequence {
        operation: operation.to_string(),
    }
    .into())
}
