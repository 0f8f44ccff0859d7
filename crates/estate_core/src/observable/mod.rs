//! Change notification capability embedded in every entity and collection.
//!
//! # Responsibility
//! - Deliver typed change events to registered handlers, synchronously.
//! - Provide the compare-and-notify primitive used by attribute setters.
//!
//! # Invariants
//! - Handlers run on the calling thread, in subscription order, after the
//!   change they describe has been stored.
//! - Writing a value equal to the current one emits nothing.

pub mod notifier;
pub mod property;

pub use notifier::{ChangeNotifier, SubscriptionId};
pub use property::{set_property, Property, PropertyChanged};
