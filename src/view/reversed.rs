//! The reversed view: back-to-front traversal.

use crate::sequence::{BidirectionalSequence, Sequence};

/// A lazy view traversing its input in exactly reverse order.
///
/// Implemented by swapping the roles of the forward and backward steps on
/// the input's own cursor. The view's start is the input end stepped back
/// once (the input's last element), and its past-the-end sentinel is the
/// input start stepped back once — the one-before-start boundary position
/// every cursor representation in this crate admits.
///
/// Reversing an empty input collapses both boundaries onto the same
/// one-before-start position, so they compare equal and nothing is ever
/// dereferenced.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let reversed = numbers.as_slice().pipe(Reverse);
/// assert_eq!(reversed.iter().collect::<Vec<_>>(), vec![&3, &2, &1]);
/// ```
#[derive(Debug, Clone)]
pub struct ReversedView<S> {
    sequence: S,
}

impl<S> ReversedView<S> {
    /// Wraps `sequence` for back-to-front traversal.
    pub(crate) fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S: BidirectionalSequence> Sequence for ReversedView<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn start(&self) -> Self::Cursor {
        let mut cursor = self.sequence.end();
        self.sequence.step_back(&mut cursor);
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let mut cursor = self.sequence.start();
        self.sequence.step_back(&mut cursor);
        cursor
    }

    #[inline]
    fn step_forward(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_back(cursor);
    }

    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        self.sequence.read(cursor)
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for ReversedView<S> {
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_forward(cursor);
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn test_reversed_view_yields_elements_back_to_front() {
        let numbers = [1, 2, 3, 4];
        let view = numbers.as_slice().pipe(Reverse);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![&4, &3, &2, &1]);
    }

    #[rstest]
    fn test_reversing_twice_restores_the_original_order() {
        let numbers = [1, 2, 3];
        let view = numbers.as_slice().pipe(Reverse).pipe(Reverse);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_reversed_empty_input_boundaries_are_equal() {
        let empty: &[i32] = &[];
        let view = empty.pipe(Reverse);
        assert_eq!(view.start(), view.end());
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
    }

    #[rstest]
    fn test_reversed_single_element() {
        let numbers = [42];
        let view = numbers.as_slice().pipe(Reverse);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![&42]);
    }

    #[rstest]
    fn test_reversed_view_backward_traversal_is_the_original_order() {
        let numbers = [1, 2, 3];
        let view = numbers.as_slice().pipe(Reverse);
        assert_eq!(view.iter().rev().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_reversed_map_entries() {
        let map = BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        let view = (&map).pipe(Reverse);
        assert_eq!(
            view.iter().collect::<Vec<_>>(),
            vec![(&3, &'c'), (&2, &'b'), (&1, &'a')]
        );
    }
}
