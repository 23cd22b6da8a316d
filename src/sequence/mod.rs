//! The traversal contract and the built-in source sequences.
//!
//! This module defines what it means to be a sequence in seqview:
//!
//! - [`Sequence`]: a finite ordered collection traversed through an opaque
//!   [cursor](Sequence::Cursor) that can step forward, be dereferenced, and
//!   be compared for equality. All cursor operations are mediated by the
//!   sequence itself; a cursor is a non-owning position handle.
//! - [`BidirectionalSequence`]: a [`Sequence`] whose cursor can also step
//!   backward. Every stage except take/drop requires this capability.
//! - [`KeyValue`]: component access for key/value pair elements, required by
//!   the keys/values projection stages.
//! - [`Elements`]: the bridge from the cursor contract to [`Iterator`] and
//!   [`DoubleEndedIterator`], so views compose with `for` loops and the
//!   standard iterator adapters.
//!
//! Source implementations are provided for `&[T]`, `&Vec<T>`, and
//! `&BTreeMap<K, V>`.

mod entry;
mod iter;
mod map;
mod slice;
mod traversal;

pub use entry::KeyValue;
pub use iter::Elements;
pub use map::MapCursor;
pub use slice::SliceCursor;
pub use traversal::{BidirectionalSequence, Sequence};
