//! The windowed view: prefix take and prefix drop.

use crate::sequence::{BidirectionalSequence, Sequence};

/// A lazy sub-range view, shared by the take and drop stages.
///
/// Both stages are windows with adjusted bounds: `take(n)` moves the end
/// bound forward from the input start, `drop(n)` moves the start bound the
/// same way. Counts exceeding the input length clamp silently — never an
/// error.
///
/// Computing the bounds needs only forward stepping, so take/drop are the
/// one stage pair that accepts forward-only inputs; the produced window is
/// still bidirectional whenever its input is, because it reuses the input's
/// cursor.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let prefix = numbers.as_slice().pipe(Take(2));
/// let rest = numbers.as_slice().pipe(Drop(2));
/// assert_eq!(prefix.iter().collect::<Vec<_>>(), vec![&1, &2]);
/// assert_eq!(rest.iter().collect::<Vec<_>>(), vec![&3, &4, &5]);
/// ```
#[derive(Debug, Clone)]
pub struct WindowedView<S: Sequence> {
    sequence: S,
    start: S::Cursor,
    end: S::Cursor,
}

impl<S: Sequence> WindowedView<S> {
    /// Windows `sequence` to its first `count` elements (fewer if the input
    /// is shorter).
    pub(crate) fn take(sequence: S, count: usize) -> Self {
        let start = sequence.start();
        let end = advanced(&sequence, count);
        Self {
            sequence,
            start,
            end,
        }
    }

    /// Windows `sequence` past its first `count` elements (to empty if the
    /// input is shorter).
    pub(crate) fn drop(sequence: S, count: usize) -> Self {
        let start = advanced(&sequence, count);
        let end = sequence.end();
        Self {
            sequence,
            start,
            end,
        }
    }
}

/// Returns the input start advanced `count` steps, clamped at the input end.
fn advanced<S: Sequence>(sequence: &S, count: usize) -> S::Cursor {
    let end = sequence.end();
    let mut cursor = sequence.start();
    for _ in 0..count {
        if cursor == end {
            break;
        }
        sequence.step_forward(&mut cursor);
    }
    cursor
}

impl<S: Sequence> Sequence for WindowedView<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn start(&self) -> Self::Cursor {
        self.start.clone()
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        self.end.clone()
    }

    #[inline]
    fn step_forward(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_forward(cursor);
    }

    #[inline]
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        self.sequence.read(cursor)
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for WindowedView<S> {
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_back(cursor);
    }
}
