//! Generation of integer sequences.

/// Produces the inclusive integer sequence `[min, min + 1, ..., max]`.
///
/// Returns an empty sequence when `min > max`. The result has length
/// `max - min + 1` otherwise and is strictly increasing by 1.
pub fn inclusive_range(min: i64, max: i64) -> Vec<i64> {
    (min..=max).collect()
}
