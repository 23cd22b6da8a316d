//! The mapped view: element transformation.

use crate::sequence::{BidirectionalSequence, Sequence};

/// A lazy view applying a function to every element of its input.
///
/// Same length as the input; the element at each position is the function
/// applied to the input's element at that position. Dereferencing computes
/// the function fresh on every access — the function should be pure and
/// cheap, or the caller accepts repeated evaluation.
///
/// Traversal delegates to the input cursor unchanged, and cursor equality is
/// input-cursor equality.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let doubled = numbers.as_slice().pipe(Map(|x: &i32| x * 2));
/// assert_eq!(doubled.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct MappedView<S, F> {
    sequence: S,
    function: F,
}

impl<S, F> MappedView<S, F> {
    /// Wraps `sequence`, applying `function` to each element on access.
    pub(crate) fn new(sequence: S, function: F) -> Self {
        Self { sequence, function }
    }
}

impl<S, F, B> Sequence for MappedView<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Cursor = S::Cursor;

    #[inline]
    fn start(&self) -> Self::Cursor {
        self.sequence.start()
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        self.sequence.end()
    }

    #[inline]
    fn step_forward(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_forward(cursor);
    }

    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        (self.function)(self.sequence.read(cursor))
    }
}

impl<S, F, B> BidirectionalSequence for MappedView<S, F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> B,
{
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_back(cursor);
    }
}
