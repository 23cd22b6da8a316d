//! The bridge from the cursor contract to standard iterators.

use super::traversal::{BidirectionalSequence, Sequence};
use std::fmt;

/// A borrowing iterator over the elements of a [`Sequence`].
///
/// Created by [`Sequence::iter`]. Holds a front and a back cursor that move
/// toward each other; iteration ends when they meet. Elements are computed
/// on demand by the sequence — advancing the iterator never allocates and
/// never caches.
///
/// `Elements` is a [`DoubleEndedIterator`] whenever the underlying sequence
/// is bidirectional, so `view.iter().rev()` enumerates any view back to
/// front.
///
/// # Examples
///
/// ```rust
/// use seqview::Sequence;
///
/// let numbers = [1, 2, 3];
/// let forward: Vec<&i32> = numbers.as_slice().iter().collect();
/// let backward: Vec<&i32> = numbers.as_slice().iter().rev().collect();
/// assert_eq!(forward, vec![&1, &2, &3]);
/// assert_eq!(backward, vec![&3, &2, &1]);
/// ```
pub struct Elements<'a, S: Sequence> {
    sequence: &'a S,
    front: S::Cursor,
    back: S::Cursor,
}

impl<'a, S: Sequence> Elements<'a, S> {
    /// Creates an iterator spanning the whole sequence.
    pub(crate) fn new(sequence: &'a S) -> Self {
        Self {
            front: sequence.start(),
            back: sequence.end(),
            sequence,
        }
    }
}

impl<S: Sequence> Iterator for Elements<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.sequence.read(&self.front);
        self.sequence.step_forward(&mut self.front);
        Some(item)
    }
}

impl<S: BidirectionalSequence> DoubleEndedIterator for Elements<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.sequence.step_back(&mut self.back);
        Some(self.sequence.read(&self.back))
    }
}

impl<S: Sequence> fmt::Debug for Elements<'_, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Elements").finish_non_exhaustive()
    }
}
