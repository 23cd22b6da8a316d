//! Ordered-map source sequences.
//!
//! `&BTreeMap<K, V>` is the associative source of seqview. Its cursor keeps
//! a borrow of the key it is positioned at; stepping is a neighbour query
//! through [`BTreeMap::range`], so traversal allocates nothing and costs
//! O(log n) per step. Elements come out as `(&K, &V)` entries in key order,
//! ready for the keys/values projection stages.

use super::traversal::{BidirectionalSequence, Sequence};
use std::collections::BTreeMap;
use std::ops::Bound;

/// A cursor into an ordered map.
///
/// `At` holds the key of the current entry and compares by key equality.
/// The two boundary variants exist only for comparison: `End` is the
/// past-the-end sentinel and `BeforeStart` is the position one before the
/// first entry, used by the reversed view as its own sentinel. Neither can
/// be dereferenced.
#[derive(Debug, PartialEq, Eq)]
pub enum MapCursor<'s, K> {
    /// The position one before the first entry.
    BeforeStart,
    /// The position of the entry with the borrowed key.
    At(&'s K),
    /// The past-the-end sentinel.
    End,
}

// Manual Clone/Copy: the derive would demand `K: Clone`/`K: Copy`, but the
// cursor only ever copies a borrow of the key.
impl<K> Clone for MapCursor<'_, K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for MapCursor<'_, K> {}

impl<'s, K: Ord, V> Sequence for &'s BTreeMap<K, V> {
    type Item = (&'s K, &'s V);
    type Cursor = MapCursor<'s, K>;

    fn start(&self) -> Self::Cursor {
        let map: &'s BTreeMap<K, V> = *self;
        match map.keys().next() {
            Some(key) => MapCursor::At(key),
            None => MapCursor::End,
        }
    }

    #[inline]
    fn end(&self) -> Self::Cursor {
        MapCursor::End
    }

    fn step_forward(&self, cursor: &mut Self::Cursor) {
        let map: &'s BTreeMap<K, V> = *self;
        *cursor = match *cursor {
            MapCursor::BeforeStart => match map.keys().next() {
                Some(key) => MapCursor::At(key),
                None => MapCursor::End,
            },
            MapCursor::At(key) => {
                match map.range((Bound::Excluded(key), Bound::Unbounded)).next() {
                    Some((next_key, _)) => MapCursor::At(next_key),
                    None => MapCursor::End,
                }
            }
            // Stepping the sentinel forward is a contract violation; saturate.
            MapCursor::End => MapCursor::End,
        };
    }

    /// Dereferences the cursor into a `(&K, &V)` entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at a boundary position, or if the key it was
    /// positioned at has been removed from the map since the cursor was
    /// obtained (a stale cursor is a contract violation).
    fn read(&self, cursor: &Self::Cursor) -> Self::Item {
        let map: &'s BTreeMap<K, V> = *self;
        match *cursor {
            MapCursor::At(key) => match map.get_key_value(key) {
                Some(entry) => entry,
                None => panic!("cannot read a map cursor whose key has been removed"),
            },
            MapCursor::BeforeStart | MapCursor::End => {
                panic!("cannot read a map cursor at a boundary position")
            }
        }
    }
}

impl<'s, K: Ord, V> BidirectionalSequence for &'s BTreeMap<K, V> {
    fn step_back(&self, cursor: &mut Self::Cursor) {
        let map: &'s BTreeMap<K, V> = *self;
        *cursor = match *cursor {
            MapCursor::End => match map.keys().next_back() {
                Some(key) => MapCursor::At(key),
                None => MapCursor::BeforeStart,
            },
            MapCursor::At(key) => {
                match map.range((Bound::Unbounded, Bound::Excluded(key))).next_back() {
                    Some((previous_key, _)) => MapCursor::At(previous_key),
                    None => MapCursor::BeforeStart,
                }
            }
            // Stepping the front boundary backward is a contract violation; saturate.
            MapCursor::BeforeStart => MapCursor::BeforeStart,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> BTreeMap<i32, &'static str> {
        BTreeMap::from([(1, "one"), (2, "two"), (3, "three")])
    }

    #[rstest]
    fn test_map_forward_traversal_in_key_order() {
        let map = sample();
        let sequence = &map;

        let mut cursor = sequence.start();
        let mut collected = Vec::new();
        while cursor != sequence.end() {
            collected.push(sequence.read(&cursor));
            sequence.step_forward(&mut cursor);
        }
        assert_eq!(
            collected,
            vec![(&1, &"one"), (&2, &"two"), (&3, &"three")]
        );
    }

    #[rstest]
    fn test_map_backward_traversal() {
        let map = sample();
        let sequence = &map;

        let mut cursor = sequence.end();
        let mut collected = Vec::new();
        while cursor != sequence.start() {
            sequence.step_back(&mut cursor);
            collected.push(*sequence.read(&cursor).0);
        }
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_empty_map_boundaries_are_equal() {
        let map: BTreeMap<i32, i32> = BTreeMap::new();
        let sequence = &map;
        assert_eq!(sequence.start(), sequence.end());
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_stepping_back_from_first_entry_reaches_before_start() {
        let map = sample();
        let sequence = &map;

        let mut cursor = sequence.start();
        sequence.step_back(&mut cursor);
        assert_eq!(cursor, MapCursor::BeforeStart);
    }

    #[rstest]
    fn test_stepping_back_over_empty_map_reaches_before_start() {
        let map: BTreeMap<i32, i32> = BTreeMap::new();
        let sequence = &map;

        let mut cursor = sequence.end();
        sequence.step_back(&mut cursor);
        assert_eq!(cursor, MapCursor::BeforeStart);
    }

    #[rstest]
    #[should_panic(expected = "boundary position")]
    fn test_reading_end_sentinel_panics() {
        let map = sample();
        let sequence = &map;
        let cursor = sequence.end();
        let _ = sequence.read(&cursor);
    }
}
