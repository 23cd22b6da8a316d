//! The `Sequence` and `BidirectionalSequence` traversal traits.
//!
//! A sequence exposes a start position and a past-the-end sentinel, and moves
//! an opaque cursor between them. The cursor itself is inert: stepping and
//! dereferencing are methods on the sequence, which keeps cursors cheap,
//! non-owning, and free of back-references to their source.
//!
//! # Laws
//!
//! Implementations must satisfy the finite-traversal laws:
//!
//! - **Reachability**: repeatedly applying [`Sequence::step_forward`] to
//!   `start()` reaches a cursor equal to `end()` in finitely many steps.
//! - **Inverse stepping** (bidirectional sequences only): `step_back` undoes
//!   `step_forward` at every interior position, and `end()` stepped back
//!   lands on the last element.
//! - **Read stability**: `read` at a given cursor position returns the same
//!   element as long as the source is not mutated.
//!
//! Cursors additionally admit one position *before* `start()`, reached by
//! stepping back from the first element. It exists only for boundary
//! comparison (the reversed view uses it as its past-the-end sentinel) and
//! must never be dereferenced.

use super::iter::Elements;

/// A finite ordered collection traversed front to back through a cursor.
///
/// The cursor is an opaque, non-owning handle; every operation on it goes
/// through the sequence. Equality between two cursors of the same sequence
/// decides whether they denote the same position — comparing cursors obtained
/// from different sequences is a contract violation with an unspecified
/// (but panic-free) result.
///
/// This trait alone provides forward traversal, which is all the take/drop
/// stages need to compute their window bounds. Everything else in the
/// pipeline layer requires [`BidirectionalSequence`].
///
/// # Examples
///
/// ```rust
/// use seqview::Sequence;
///
/// let numbers = [10, 20, 30];
/// let slice = numbers.as_slice();
///
/// let mut cursor = slice.start();
/// let mut collected = Vec::new();
/// while cursor != slice.end() {
///     collected.push(*slice.read(&cursor));
///     slice.step_forward(&mut cursor);
/// }
/// assert_eq!(collected, vec![10, 20, 30]);
/// ```
pub trait Sequence {
    /// The element produced by dereferencing a cursor.
    ///
    /// Source sequences yield references into the underlying storage; views
    /// yield whatever their stage computes (a mapped view yields the mapping
    /// function's output, a keys view yields the key component, and so on).
    type Item;

    /// The opaque position handle for this sequence.
    ///
    /// Cloning a cursor is cheap and yields an independent position.
    type Cursor: Clone + PartialEq;

    /// Returns the cursor at the first element, or [`end`](Self::end) for an
    /// empty sequence.
    fn start(&self) -> Self::Cursor;

    /// Returns the past-the-end sentinel cursor.
    ///
    /// The sentinel never refers to an element; it only bounds traversal.
    fn end(&self) -> Self::Cursor;

    /// Moves the cursor one position forward.
    ///
    /// Stepping the past-the-end sentinel forward is a contract violation;
    /// implementations may saturate or extend out of range but must not
    /// panic until the cursor is dereferenced.
    fn step_forward(&self, cursor: &mut Self::Cursor);

    /// Dereferences the cursor, computing the element at its position.
    ///
    /// Views recompute their output on every call; nothing is cached.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at a boundary position (past-the-end or
    /// before-the-start). Dereferencing a boundary cursor is a contract
    /// violation, not a recoverable condition.
    fn read(&self, cursor: &Self::Cursor) -> Self::Item;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    /// Borrows the sequence as an [`Iterator`] over its elements.
    ///
    /// The iterator is also a [`DoubleEndedIterator`] when the sequence is
    /// bidirectional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::Sequence;
    ///
    /// let numbers = [1, 2, 3];
    /// let doubled: Vec<i32> = numbers.as_slice().iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn iter(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements::new(self)
    }
}

/// A [`Sequence`] whose cursor can also step backward.
///
/// Backward stepping is the capability gate for the map, filter, reverse,
/// keys, and values stages, and for consuming a view from its back through
/// [`DoubleEndedIterator`].
///
/// Stepping back from [`end`](Sequence::end) lands on the last element;
/// stepping back from the first element lands on the one-before-start
/// boundary position, which compares equal to itself but must never be
/// dereferenced.
///
/// # Examples
///
/// ```rust
/// use seqview::{BidirectionalSequence, Sequence};
///
/// let numbers = [1, 2, 3];
/// let slice = numbers.as_slice();
///
/// let mut cursor = slice.end();
/// slice.step_back(&mut cursor);
/// assert_eq!(slice.read(&cursor), &3);
/// ```
pub trait BidirectionalSequence: Sequence {
    /// Moves the cursor one position backward.
    ///
    /// Stepping the one-before-start boundary backward is a contract
    /// violation; implementations may saturate or extend out of range but
    /// must not panic until the cursor is dereferenced.
    fn step_back(&self, cursor: &mut Self::Cursor);
}
