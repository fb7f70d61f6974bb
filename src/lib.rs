#![allow(dead_code)]

//! A persistent, positionally indexed sequence backed by a self-balancing
//! binary tree with structural sharing.
//!
//! Every update ([`Sequence::append`], [`Sequence::insert`],
//! [`Sequence::set`], [`Sequence::delete`], [`Sequence::append_list`], ...)
//! returns a new [`Sequence`] in `O(log n)`, leaving the receiver and every
//! other live reference to it untouched; unchanged subtrees are shared
//! between versions rather than copied. Bulk construction from a known
//! stream of values should go through [`Builder`] instead of repeated
//! `append`, which gives amortized linear time without the rebalancing
//! repeated single-element inserts would otherwise pay for.

/// The incremental bulk builder (`Builder<T>`): an amortized linear-time
/// accumulator for constructing a balanced [`Sequence`] from a value
/// stream.
pub mod builder;

/// Error kinds surfaced by out-of-range or empty-sequence operations.
pub mod error;

/// The resumable forward iterator returned by [`Sequence::fwd_iterate`].
pub mod iter;

/// The tree node algebra: `Empty`, `Leaf`, and `Branch`, balancing, and the
/// splice engine. Not part of the public API.
pub(crate) mod node;

/// The public façade (`Sequence<T>`).
pub mod sequence;

pub use builder::Builder;
pub use error::ErrorKind;
pub use iter::Iter;
pub use sequence::Sequence;
