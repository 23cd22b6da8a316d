//! The filtered view: predicate-based element selection.

use crate::sequence::{BidirectionalSequence, Sequence};

/// A lazy view keeping exactly the input elements that satisfy a predicate,
/// in their original relative order.
///
/// The view's cursor is the input's cursor; positions failing the predicate
/// are skipped during stepping, never yielded. [`start`](Sequence::start)
/// skips forward from the input start to the first match (or the end), so an
/// all-rejected input collapses to `start() == end()`.
///
/// Forward stepping always moves the underlying cursor at least once before
/// skipping, which guarantees progress even though the departed position
/// satisfies the predicate.
///
/// Backward stepping retreats once, then continues retreating while the
/// predicate fails, stopping at the input's start position even when that
/// position does not match. Stepping back from the view's first element
/// lands on the one-before-start boundary position without dereferencing
/// it, so the reversed view can use that boundary as its sentinel. This
/// asymmetry with the forward direction is deliberate: stepping back below
/// the view's first matching element is outside the traversal contract, and
/// the stop positions are boundaries, never yielded elements.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5, 6];
/// let evens = numbers.as_slice().pipe(Filter(|x: &&i32| **x % 2 == 0));
/// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![&2, &4, &6]);
/// ```
#[derive(Debug, Clone)]
pub struct FilteredView<S, P> {
    sequence: S,
    predicate: P,
}

impl<S, P> FilteredView<S, P> {
    /// Wraps `sequence`, keeping only the elements satisfying `predicate`.
    pub(crate) fn new(sequence: S, predicate: P) -> Self {
        Self {
            sequence,
            predicate,
        }
    }
}

impl<S, P> FilteredView<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    /// Advances the cursor while the predicate fails, stopping at the input
    /// end.
    fn skip_forward(&self, cursor: &mut S::Cursor) {
        let end = self.sequence.end();
        while *cursor != end && !(self.predicate)(&self.sequence.read(cursor)) {
            self.sequence.step_forward(cursor);
        }
    }
}

impl<S, P> Sequence for FilteredView<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn start(&self) -> Self::Cursor {
        let mut cursor = self.sequence.start();
        self.skip_forward(&mut cursor);
        cursor
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        self.sequence.end()
    }

    fn step_forward(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_forward(cursor);
        self.skip_forward(cursor);
    }

    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        self.sequence.read(cursor)
    }
}

impl<S, P> BidirectionalSequence for FilteredView<S, P>
where
    S: BidirectionalSequence,
    P: Fn(&S::Item) -> bool,
{
    fn step_back(&self, cursor: &mut Self::Cursor) {
        let start = self.sequence.start();
        let mut before_start = start.clone();
        self.sequence.step_back(&mut before_start);
        self.sequence.step_back(cursor);
        // Stop at either boundary without dereferencing it: the before-start
        // position is never readable, and the input start bounds the skip
        // even when it fails the predicate.
        while *cursor != before_start
            && *cursor != start
            && !(self.predicate)(&self.sequence.read(cursor))
        {
            self.sequence.step_back(cursor);
        }
    }
}
