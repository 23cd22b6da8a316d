//! Stage application and the `.pipe` chaining combinator.

use super::descriptor::{Drop, Filter, Keys, Map, Reverse, Take, Values};
use crate::sequence::{BidirectionalSequence, KeyValue, Sequence};
use crate::view::{FilteredView, KeysView, MappedView, ReversedView, ValuesView, WindowedView};

/// Application of one stage descriptor to a sequence.
///
/// Implementations dispatch by descriptor type to construct the matching
/// view; their trait bounds are the compile-time capability checks of the
/// pipeline layer. Callers normally go through [`Pipe::pipe`] instead of
/// calling [`apply`](Stage::apply) directly.
pub trait Stage<S> {
    /// The view produced by applying this stage.
    type Output;

    /// Consumes the descriptor and the sequence, producing the view.
    fn apply(self, sequence: S) -> Self::Output;
}

impl<S, F, B> Stage<S> for Map<F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> B,
{
    type Output = MappedView<S, F>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        MappedView::new(sequence, self.0)
    }
}

impl<S, P> Stage<S> for Filter<P>
where
    S: BidirectionalSequence,
    P: Fn(&S::Item) -> bool,
{
    type Output = FilteredView<S, P>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        FilteredView::new(sequence, self.0)
    }
}

impl<S: Sequence> Stage<S> for Take {
    type Output = WindowedView<S>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        WindowedView::take(sequence, self.0)
    }
}

impl<S: Sequence> Stage<S> for Drop {
    type Output = WindowedView<S>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        WindowedView::drop(sequence, self.0)
    }
}

impl<S: BidirectionalSequence> Stage<S> for Reverse {
    type Output = ReversedView<S>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        ReversedView::new(sequence)
    }
}

impl<S> Stage<S> for Keys
where
    S: BidirectionalSequence,
    S::Item: KeyValue,
{
    type Output = KeysView<S>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        KeysView::new(sequence)
    }
}

impl<S> Stage<S> for Values
where
    S: BidirectionalSequence,
    S::Item: KeyValue,
{
    type Output = ValuesView<S>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        ValuesView::new(sequence)
    }
}

/// Left-to-right pipeline chaining over any sequence.
///
/// `sequence.pipe(stage)` applies one stage descriptor and returns the
/// produced view, which is itself a sequence — so calls chain the way the
/// data flows, one view wrapping the next, with nothing evaluated until the
/// result is traversed.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let view = numbers
///     .as_slice()
///     .pipe(Map(|x: &i32| x * 2))
///     .pipe(Filter(|x: &i32| x % 2 == 0))
///     .pipe(Take(3))
///     .pipe(Drop(1))
///     .pipe(Reverse);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![6, 4]);
/// ```
pub trait Pipe: Sized {
    /// Applies `stage` to this sequence, producing the matching view.
    #[inline]
    fn pipe<T: Stage<Self>>(self, stage: T) -> T::Output {
        stage.apply(self)
    }
}

impl<S: Sequence> Pipe for S {}
