//! Observable ordered collections and the bounded preview mirror.
//!
//! # Responsibility
//! - Describe collection mutations as a closed set of positional changes.
//! - Keep a capped prefix view of a larger collection in sync incrementally.
//!
//! # Invariants
//! - Every stored mutation emits exactly one `CollectionChange`.
//! - A `PreviewWindow` always equals the first `min(capacity, len)` elements
//!   of the collection it mirrors.
//! - Out-of-range positions are rejected before anything is stored.

pub mod change;
pub mod observable_vec;
pub mod preview;

pub use change::{apply_change, CollectionChange, CollectionError};
pub use observable_vec::ObservableVec;
pub use preview::{next_preview, preview_edits, PreviewWindow, PREVIEW_CAPACITY};
