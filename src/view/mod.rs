//! The lazy view types.
//!
//! Each view wraps an input sequence and implements [`Sequence`] itself, so
//! views nest to arbitrary depth. A view stores only its input and the stage
//! payload (a function, a predicate, or window bounds) — never elements.
//! Dereferencing a cursor recomputes the output element on every access.
//!
//! Views are normally constructed through the stage descriptors in
//! [`crate::stage`] rather than directly.
//!
//! [`Sequence`]: crate::sequence::Sequence

mod filtered;
mod mapped;
mod projected;
mod reversed;
mod windowed;

pub use filtered::FilteredView;
pub use mapped::MappedView;
pub use projected::{KeysView, ValuesView};
pub use reversed::ReversedView;
pub use windowed::WindowedView;
