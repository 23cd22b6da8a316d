//! # seqview
//!
//! A library of composable, lazily evaluated sequence views.
//!
//! ## Overview
//!
//! seqview lets you chain element mapping, filtering, prefix taking and
//! dropping, order reversal, and key/value projection into pipelines over any
//! bidirectionally traversable sequence. Nothing is copied and no
//! intermediate storage is allocated: each view stores only its input
//! sequence and the stage parameters, and every output element is computed on
//! demand as the consumer advances a cursor.
//!
//! The library has two layers:
//!
//! - **Sequences** ([`sequence`]): the traversal contract. [`Sequence`]
//!   describes forward traversal through an opaque cursor;
//!   [`BidirectionalSequence`] adds the backward step. Slices, `Vec`s, and
//!   `BTreeMap`s implement both out of the box.
//! - **Views and stages** ([`view`], [`stage`]): the five lazy view types and
//!   the inert stage descriptors that build them. The [`Pipe`] extension
//!   trait chains stages left to right; every produced view is itself a
//!   sequence and can be piped again.
//!
//! Capability requirements are trait bounds, so a pipeline that violates a
//! precondition (for example projecting keys out of a sequence whose elements
//! are not key/value pairs) fails to compile. There is no runtime validation
//! path and no error type.
//!
//! ## Example
//!
//! ```rust
//! use seqview::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let pipeline = numbers
//!     .as_slice()
//!     .pipe(Map(|x: &i32| x * 2))
//!     .pipe(Filter(|x: &i32| x % 2 == 0))
//!     .pipe(Take(3))
//!     .pipe(Drop(1))
//!     .pipe(Reverse);
//! assert_eq!(pipeline.iter().collect::<Vec<_>>(), vec![6, 4]);
//!
//! let words = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
//! let keys: Vec<&i32> = (&words).pipe(Keys).iter().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! let ones: Vec<&&str> = (&words)
//!     .pipe(Values)
//!     .pipe(Filter(|value: &&&str| **value == "one"))
//!     .iter()
//!     .collect();
//! assert_eq!(ones, vec![&"one"]);
//! ```
//!
//! ## Caller obligations
//!
//! Views borrow their source container, so the borrow checker enforces that
//! the source outlives every view and cursor derived from it. Dereferencing a
//! cursor at a boundary position is a contract violation and panics; see the
//! `# Panics` sections on [`Sequence::read`] implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traversal traits, the view types, and the stage
/// descriptors.
///
/// # Usage
///
/// ```rust
/// use seqview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
    pub use crate::stage::*;
    pub use crate::view::*;
}

pub mod sequence;
pub mod stage;
pub mod view;

pub use sequence::{BidirectionalSequence, Elements, KeyValue, Sequence};
pub use stage::{Drop, Filter, Keys, Map, Pipe, Reverse, Stage, Take, Values};
pub use view::{FilteredView, KeysView, MappedView, ReversedView, ValuesView, WindowedView};
