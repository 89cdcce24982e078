//! A lazy map-with-filter adapter for iterators of sequence elements.
//!
//! This module provides the [`MapWhere`] iterator adapter, which applies a
//! mapping function only to the elements that satisfy a predicate, skipping
//! the rest entirely. The predicate runs once per element and the mapping
//! function once per passing element, in input order.
//!
//! The [`SeqIteratorExt`] trait is implemented for all iterators, providing
//! a convenient method to construct the adapter. The [`map_where`] free
//! function materializes the result into a `Vec` in one call.

/// Extension trait for more idiomatic usage of the filtered-map adapter.
pub trait SeqIteratorExt: Iterator + Sized {
    /// Adapts an iterator to yield `f(x)` for each element `x` satisfying
    /// `predicate`, in input order.
    ///
    /// Elements failing the predicate are skipped without being mapped.
    fn map_where<P, F, R>(self, predicate: P, f: F) -> MapWhere<Self, P, F>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> R,
    {
        MapWhere::new(self, predicate, f)
    }
}

impl<I: Iterator> SeqIteratorExt for I {}

/// An iterator adapter that maps the elements passing a predicate.
///
/// Each element of the inner iterator is tested with `predicate`; passing
/// elements are transformed with `f` and yielded, failing elements are
/// consumed and discarded. Relative order is preserved.
#[derive(Debug, Clone)]
pub struct MapWhere<I, P, F> {
    /// The underlying iterator of elements.
    inner: I,
    /// The filter applied to each element before mapping.
    predicate: P,
    /// The transformation applied to each passing element.
    f: F,
}

impl<I, P, F> MapWhere<I, P, F> {
    /// Creates a new `MapWhere` iterator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying iterator of elements.
    /// * `predicate` - The filter deciding which elements are mapped.
    /// * `f` - The transformation applied to passing elements.
    pub fn new(inner: I, predicate: P, f: F) -> Self {
        MapWhere {
            inner,
            predicate,
            f,
        }
    }
}

impl<I, P, F, R> Iterator for MapWhere<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    /// Returns the mapped form of the next element satisfying the predicate.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.inner.next()?;
            if (self.predicate)(&item) {
                return Some((self.f)(item));
            }
        }
    }

    /// Returns the size hint of the adapter.
    ///
    /// The lower bound is zero since every remaining element may fail the
    /// predicate; the upper bound is that of the underlying iterator.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Produces a sequence containing `f(x)` for each element `x` of `input`
/// satisfying `predicate`, in input order.
///
/// `predicate` is invoked exactly once per element and `f` exactly once per
/// passing element. The input is not mutated.
pub fn map_where<T, R>(
    mut f: impl FnMut(&T) -> R,
    input: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Vec<R> {
    input
        .iter()
        .map_where(|item| predicate(*item), |item| f(item))
        .collect()
}
