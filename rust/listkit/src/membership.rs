//! Membership test over sequences.

/// Returns `true` if `element` compares equal to at least one element of
/// the sequence.
///
/// An empty sequence contains nothing, so the result is `false`.
pub fn contains<T: PartialEq>(element: &T, seq: &[T]) -> bool {
    seq.iter().any(|item| item == element)
}
