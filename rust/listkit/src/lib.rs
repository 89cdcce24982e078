//! Generic utility functions over sequences of values.
//!
//! This crate provides convenience wrappers over ordinary slice and vector
//! operations, mirroring the functional-list primitives of languages like
//! Haskell or Lisp. It offers:
//!
//! - **Filtered mapping**: A lazy iterator adapter that maps only the elements
//!   passing a predicate, plus a materializing wrapper
//! - **Structural slicing**: Reverse, all-but-first, all-but-last, drop-prefix
//!   and concatenation, always producing a fresh output sequence
//! - **Checked access**: First/last/positional element accessors that signal
//!   an explicit error instead of panicking on an empty or too-short input
//!
//! Every function borrows its input and never mutates it; returned sequences
//! are newly allocated and owned solely by the caller.
//!
//! # Key Items
//!
//! - [`SeqIteratorExt`] - Extension trait providing the filtered-map adapter
//! - [`map_where`] - Materialized map-with-filter over a slice
//! - [`head`], [`last`], [`element_at`] - Checked element accessors

pub mod access;
pub mod generate;
pub mod membership;
pub mod select;
pub mod slice_ops;

pub use access::{element_at, head, last};
pub use generate::inclusive_range;
pub use membership::contains;
pub use select::{MapWhere, SeqIteratorExt, map_where};
pub use slice_ops::{concat, concat_str, drop_first, init, reverse, tail};
