//! Structural sequence transformations.
//!
//! This module provides reversal, all-but-first (`tail`), all-but-last
//! (`init`), drop-prefix slicing and concatenation. Every function borrows
//! its input and produces a freshly allocated output; inputs are never
//! mutated and no aliasing exists between input and output.

use listkit_common::Result;
use listkit_common::result::verify_non_empty;

/// Produces a new sequence with the elements in opposite order.
///
/// The input is not mutated and its length is preserved.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// Returns all elements except the last, preserving order.
///
/// Fails with an `EmptySequence` error if the sequence is empty.
pub fn init<T: Clone>(seq: &[T]) -> Result<Vec<T>> {
    verify_non_empty(seq.len(), "init")?;
    Ok(seq[..seq.len() - 1].to_vec())
}

/// Returns all elements except the first, preserving order.
///
/// Fails with an `EmptySequence` error if the sequence is empty.
pub fn tail<T: Clone>(seq: &[T]) -> Result<Vec<T>> {
    verify_non_empty(seq.len(), "tail")?;
    Ok(seq[1..].to_vec())
}

/// Returns the subsequence starting at position `n` through the end.
///
/// Returns an empty sequence when `n >= seq.len()`.
pub fn drop_first<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq.get(n..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Returns a new sequence with all of `a`'s elements followed by all of
/// `b`'s, preserving relative order within each.
///
/// Neither input is mutated.
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut res = Vec::with_capacity(a.len() + b.len());
    res.extend_from_slice(a);
    res.extend_from_slice(b);
    res
}

/// Returns the character-wise concatenation of `a` followed by `b`.
pub fn concat_str(a: &str, b: &str) -> String {
    let mut res = String::with_capacity(a.len() + b.len());
    res.push_str(a);
    res.push_str(b);
    res
}
