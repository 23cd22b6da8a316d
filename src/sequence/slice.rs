//! Slice and `Vec` source sequences.
//!
//! `&[T]` and `&Vec<T>` are the ordered-collection sources of seqview. Their
//! cursor is a signed offset from the front of the slice, so the position one
//! before the first element is representable (`-1`) without any pointer
//! arithmetic past the allocation — the reversed view relies on that boundary
//! position as its past-the-end sentinel.

use super::traversal::{BidirectionalSequence, Sequence};

/// A signed-offset cursor into a slice-backed sequence.
///
/// Offset `0` is the first element and `len` is the past-the-end sentinel.
/// Offset `-1` is the one-before-start boundary position; it exists only for
/// boundary comparison and cannot be dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceCursor(pub(crate) isize);

impl<'s, T> Sequence for &'s [T] {
    type Item = &'s T;
    type Cursor = SliceCursor;

    #[inline]
    fn start(&self) -> Self::Cursor {
        SliceCursor(0)
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        SliceCursor(isize::try_from(self.len()).unwrap_or(isize::MAX))
    }

    #[inline]
    fn step_forward(&self, cursor: &mut Self::Cursor) {
        cursor.0 += 1;
    }

    /// Dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is before the start or at/past the end of the
    /// slice.
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        let slice: &'s [T] = *self;
        let Ok(index) = usize::try_from(cursor.0) else {
            panic!("cannot read a slice cursor positioned before the sequence start");
        };
        match slice.get(index) {
            Some(element) => element,
            None => panic!("cannot read a slice cursor positioned at or past the sequence end"),
        }
    }
}

impl<'s, T> BidirectionalSequence for &'s [T] {
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        cursor.0 -= 1;
    }
}

impl<'s, T> Sequence for &'s Vec<T> {
    type Item = &'s T;
    type Cursor = SliceCursor;

    #[inline]
    fn start(&self) -> Self::Cursor {
        self.as_slice().start()
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        self.as_slice().end()
    }

    #[inline]
    fn step_forward(&self, cursor: &mut Self::Cursor) {
        cursor.0 += 1;
    }

    /// Dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at a boundary position; see the slice
    /// implementation.
    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        let slice: &'s [T] = (*self).as_slice();
        slice.read(cursor)
    }
}

impl<'s, T> BidirectionalSequence for &'s Vec<T> {
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        cursor.0 -= 1;
    }
}
