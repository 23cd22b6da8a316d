//! The keys and values views: projections over key/value pair elements.

use crate::sequence::{BidirectionalSequence, KeyValue, Sequence};

/// A lazy view projecting the key component out of every pair element.
///
/// Purely a projection: traversal delegates to the input cursor unchanged,
/// and dereferencing yields the key of the entry at the cursor, in the
/// input's natural order. The input's element type must implement
/// [`KeyValue`]; that requirement is checked at compile time, not at
/// runtime.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, "one"), (2, "two")]);
/// let keys = (&map).pipe(Keys);
/// assert_eq!(keys.iter().collect::<Vec<_>>(), vec![&1, &2]);
/// ```
#[derive(Debug, Clone)]
pub struct KeysView<S> {
    sequence: S,
}

impl<S> KeysView<S> {
    /// Wraps `sequence`, projecting each element to its key component.
    pub(crate) fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S> Sequence for KeysView<S>
where
    S: Sequence,
    S::Item: KeyValue,
{
    type Item = <S::Item as KeyValue>::Key;
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
        self.sequence.read(cursor).key()
    }
}

impl<S> BidirectionalSequence for KeysView<S>
where
    S: BidirectionalSequence,
    S::Item: KeyValue,
{
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_back(cursor);
    }
}

/// A lazy view projecting the value component out of every pair element.
///
/// The mirror image of [`KeysView`]: same traversal, same ordering, same
/// compile-time element requirement; dereferencing yields the value
/// component instead of the key.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, "one"), (2, "two")]);
/// let values = (&map).pipe(Values);
/// assert_eq!(values.iter().collect::<Vec<_>>(), vec![&"one", &"two"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValuesView<S> {
    sequence: S,
}

impl<S> ValuesView<S> {
    /// Wraps `sequence`, projecting each element to its value component.
    pub(crate) fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S> Sequence for ValuesView<S>
where
    S: Sequence,
    S::Item: KeyValue,
{
    type Item = <S::Item as KeyValue>::Value;
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
        self.sequence.read(cursor).value()
    }
}

impl<S> BidirectionalSequence for ValuesView<S>
where
    S: BidirectionalSequence,
    S::Item: KeyValue,
{
    #[inline]
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.sequence.step_back(cursor);
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<i32, &'static str> {
        BTreeMap::from([(2, "two"), (1, "one"), (3, "three")])
    }

    #[rstest]
    fn test_keys_view_yields_keys_in_natural_order() {
        let map = sample();
        let view = (&map).pipe(Keys);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_values_view_yields_values_in_key_order() {
        let map = sample();
        let view = (&map).pipe(Values);
        assert_eq!(
            view.iter().collect::<Vec<_>>(),
            vec![&"one", &"two", &"three"]
        );
    }

    #[rstest]
    fn test_keys_and_values_views_have_matching_lengths() {
        let map = sample();
        assert_eq!(
            (&map).pipe(Keys).iter().count(),
            (&map).pipe(Values).iter().count()
        );
        assert_eq!((&map).pipe(Keys).iter().count(), map.len());
    }

    #[rstest]
    fn test_projections_over_empty_map() {
        let map: BTreeMap<i32, i32> = BTreeMap::new();
        assert!((&map).pipe(Keys).is_empty());
        assert!((&map).pipe(Values).is_empty());
    }

    #[rstest]
    fn test_projections_over_pair_slices() {
        let pairs = [(1, 'a'), (2, 'b')];
        let keys = pairs.as_slice().pipe(Keys);
        let values = pairs.as_slice().pipe(Values);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![&'a', &'b']);
    }

    #[rstest]
    fn test_keys_view_backward_traversal() {
        let map = sample();
        let view = (&map).pipe(Keys);
        assert_eq!(view.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
    }
}
