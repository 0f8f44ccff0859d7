//! Observable domain model for the grid browsing surface.
//!
//! # Responsibility
//! - Define the attribute set shared by groups and items.
//! - Keep each group's preview window consistent with its items.
//!
//! # Invariants
//! - A group owns its items; an item only holds a weak back-reference to
//!   its group.
//! - Identifiers are caller-assigned strings; uniqueness is checked when a
//!   dataset is seeded, not by the model itself.

pub mod entity;
pub mod group;
pub mod image;
pub mod item;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use entity::{Entity, EntityCore};
pub use group::{Group, GroupSpec};
pub use image::{resolve_image, ImageRef, ImageSlot, ImageSource, ASSET_BASE_URI};
pub use item::{Item, ItemSpec};

/// Model-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Layout spans must be positive.
    InvalidSpan { unique_id: String, span: u32 },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpan { unique_id, span } => {
                write!(f, "item `{unique_id}` has invalid span {span}; spans must be >= 1")
            }
        }
    }
}

impl Error for ModelError {}
