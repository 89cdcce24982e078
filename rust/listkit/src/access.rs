//! Checked element accessors.
//!
//! These functions replace silent out-of-bounds reads with an explicit
//! error: accessing the first, last or positional element of a sequence
//! fails with [`ErrorKind::EmptySequence`] or [`ErrorKind::OutOfRange`]
//! when the sequence is empty or the index is invalid.
//!
//! [`ErrorKind::EmptySequence`]: listkit_common::error::ErrorKind::EmptySequence
//! [`ErrorKind::OutOfRange`]: listkit_common::error::ErrorKind::OutOfRange

use listkit_common::Result;
use listkit_common::result::{verify_in_bounds, verify_non_empty};

/// Returns a reference to the first element of the sequence.
///
/// Fails with an `EmptySequence` error if the sequence is empty.
pub fn head<T>(seq: &[T]) -> Result<&T> {
    verify_non_empty(seq.len(), "head")?;
    Ok(&seq[0])
}

/// Returns a reference to the final element of the sequence.
///
/// Fails with an `EmptySequence` error if the sequence is empty.
pub fn last<T>(seq: &[T]) -> Result<&T> {
    verify_non_empty(seq.len(), "last")?;
    Ok(&seq[seq.len() - 1])
}

/// Returns a reference to the element at the zero-based position `index`.
///
/// Fails with an `OutOfRange` error if `index >= seq.len()`.
pub fn element_at<T>(index: usize, seq: &[T]) -> Result<&T> {
    verify_in_bounds(index, seq.len())?;
    Ok(&seq[index])
}

#[cfg(test)]
mod tests {
    use listkit_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_head() {
        assert_eq!(head(&[1, 2, 3]).unwrap(), &1);
        assert_eq!(head(&["only"]).unwrap(), &"only");
    }

    #[test]
    fn test_last() {
        assert_eq!(last(&[1, 2, 3]).unwrap(), &3);
        assert_eq!(last(&["only"]).unwrap(), &"only");
    }

    #[test]
    fn test_element_at() {
        let seq = [10, 20, 30, 40];
        for (i, value) in seq.iter().enumerate() {
            assert_eq!(element_at(i, &seq).unwrap(), value);
        }
    }

    #[test]
    fn test_head_and_last_of_empty_sequence_fail() {
        let empty: [i32; 0] = [];
        assert!(matches!(
            head(&empty).unwrap_err().kind(),
            ErrorKind::EmptySequence { .. }
        ));
        assert!(matches!(
            last(&empty).unwrap_err().kind(),
            ErrorKind::EmptySequence { .. }
        ));
    }

    #[test]
    fn test_element_at_out_of_range_fails() {
        let err = element_at(4, &[10, 20, 30, 40]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::OutOfRange { index: 4, len: 4 }
        ));

        let empty: [i32; 0] = [];
        assert!(element_at(0, &empty).is_err());
    }
}
