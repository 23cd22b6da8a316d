//! The stage descriptor value types.
//!
//! Each descriptor is a plain data holder constructed by the caller and
//! consumed by [`Pipe::pipe`](super::Pipe::pipe); none is retained after the
//! view is built.

/// The mapping stage: applies a function to every element.
///
/// Requires bidirectional input. The produced
/// [`MappedView`](crate::view::MappedView) has the same length as its input
/// and computes `f(element)` fresh on every access.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let view = numbers.as_slice().pipe(Map(|x: &i32| x * 10));
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<F>(pub F);

/// The filtering stage: keeps the elements satisfying a predicate.
///
/// Requires bidirectional input. The predicate receives a borrow of the
/// element so that testing never consumes it.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3, 4];
/// let view = numbers.as_slice().pipe(Filter(|x: &&i32| **x > 2));
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![&3, &4]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Filter<P>(pub P);

/// The prefix-take stage: keeps at most the first `n` elements.
///
/// Requires only forward traversal. A count exceeding the input length
/// clamps silently to the available length.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// assert_eq!(numbers.as_slice().pipe(Take(10)).iter().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take(pub usize);

/// The prefix-drop stage: skips the first `n` elements.
///
/// Requires only forward traversal. A count exceeding the input length
/// clamps silently, producing an empty view.
///
/// Note: importing this descriptor shadows the `std::ops::Drop` prelude
/// trait in that scope. The operation keeps its conventional name anyway;
/// qualify the trait as `std::ops::Drop` where both are needed.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// assert_eq!(numbers.as_slice().pipe(Drop(10)).iter().count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop(pub usize);

/// The reversal stage: traverses the input back to front.
///
/// Requires bidirectional input.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let view = numbers.as_slice().pipe(Reverse);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![&3, &2, &1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

/// The key-projection stage: yields the key component of every pair element.
///
/// Requires bidirectional input whose elements implement
/// [`KeyValue`](crate::sequence::KeyValue).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, "one")]);
/// assert_eq!((&map).pipe(Keys).iter().collect::<Vec<_>>(), vec![&1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keys;

/// The value-projection stage: yields the value component of every pair
/// element.
///
/// Requires bidirectional input whose elements implement
/// [`KeyValue`](crate::sequence::KeyValue).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(1, "one")]);
/// assert_eq!((&map).pipe(Values).iter().collect::<Vec<_>>(), vec![&"one"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Values;
