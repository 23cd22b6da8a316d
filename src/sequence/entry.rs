//! The `KeyValue` trait for pair elements.
//!
//! The keys/values projection stages require their input elements to expose
//! a key component and a value component. That requirement is expressed as a
//! bound on the element type, so applying a projection stage to a sequence of
//! non-pair elements is rejected at compile time.

/// Component access for key/value pair elements.
///
/// Implemented for map entries `(&K, &V)` and for borrowed tuples `&(K, V)`,
/// so both associative containers and slices of pairs can feed the keys and
/// values stages.
///
/// The accessors take `self` by value because pair elements handed out by
/// sequences are themselves cheap borrows; projecting a component is a move
/// of a reference, never a copy of the underlying data.
///
/// # Examples
///
/// ```rust
/// use seqview::KeyValue;
///
/// let entry = (&1, &"one");
/// assert_eq!(entry.key(), &1);
/// assert_eq!(entry.value(), &"one");
///
/// let pair = &(2, "two");
/// assert_eq!(pair.key(), &2);
/// assert_eq!(pair.value(), &"two");
/// ```
pub trait KeyValue {
    /// The key component type.
    type Key;

    /// The value component type.
    type Value;

    /// Projects the key component out of the pair.
    fn key(self) -> Self::Key;

    /// Projects the value component out of the pair.
    fn value(self) -> Self::Value;
}

impl<'s, K, V> KeyValue for (&'s K, &'s V) {
    type Key = &'s K;
    type Value = &'s V;

    #[inline]
    fn key(self) -> Self::Key {
        self.0
    }

    #[inline]
    fn value(self) -> Self::Value {
        self.1
    }
}

impl<'s, K, V> KeyValue for &'s (K, V) {
    type Key = &'s K;
    type Value = &'s V;

    #[inline]
    fn key(self) -> Self::Key {
        &self.0
    }

    #[inline]
    fn value(self) -> Self::Value {
        &self.1
    }
}
