//! Observable sample data model for the real-estate grid browser.
//! This crate is the single source of truth for the model's invariants.

pub mod collection;
pub mod logging;
pub mod model;
pub mod observable;
pub mod source;

pub use collection::{
    apply_change, next_preview, preview_edits, CollectionChange, CollectionError, ObservableVec,
    PreviewWindow, PREVIEW_CAPACITY,
};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::{
    resolve_image, Entity, EntityCore, Group, GroupSpec, ImageRef, ImageSlot, ImageSource, Item,
    ItemSpec, ModelError, ASSET_BASE_URI,
};
pub use observable::{ChangeNotifier, Property, PropertyChanged, SubscriptionId};
pub use source::{
    DataSourceError, SampleDataSource, SeedDocument, SeedError, SeedGroup, ALL_GROUPS_ID,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
