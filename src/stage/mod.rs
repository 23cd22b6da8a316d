//! Stage descriptors and the pipeline chaining combinator.
//!
//! A stage descriptor is an inert value capturing one pipeline operation and
//! its parameters: [`Map`], [`Filter`], [`Take`], [`Drop`], [`Reverse`],
//! [`Keys`], [`Values`]. Descriptors do nothing on their own; the [`Pipe`]
//! extension trait applies one to a sequence through [`Stage::apply`],
//! producing the matching view. The view is itself a sequence, so `.pipe`
//! chains to arbitrary depth, left to right.
//!
//! Capability preconditions are the trait bounds on each [`Stage`]
//! implementation:
//!
//! - `Map`/`Filter`/`Reverse`/`Keys`/`Values` require
//!   [`BidirectionalSequence`] input;
//! - `Keys`/`Values` additionally require the input's elements to implement
//!   [`KeyValue`];
//! - `Take`/`Drop` require only [`Sequence`] (forward stepping suffices to
//!   compute their window bounds).
//!
//! A pipeline violating a precondition fails to compile; there is no runtime
//! validation path.
//!
//! [`BidirectionalSequence`]: crate::sequence::BidirectionalSequence
//! [`KeyValue`]: crate::sequence::KeyValue
//! [`Sequence`]: crate::sequence::Sequence

mod descriptor;
mod pipe;

pub use descriptor::{Drop, Filter, Keys, Map, Reverse, Take, Values};
pub use pipe::{Pipe, Stage};

use static_assertions::assert_impl_all;
use std::collections::BTreeMap;

// The built-in sources carry the full traversal capability.
assert_impl_all!(&'static [i32]: crate::sequence::BidirectionalSequence);
assert_impl_all!(&'static Vec<i32>: crate::sequence::BidirectionalSequence);
assert_impl_all!(&'static BTreeMap<i32, String>: crate::sequence::BidirectionalSequence);
