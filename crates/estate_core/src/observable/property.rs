//! Attribute-level change events.

use crate::observable::notifier::ChangeNotifier;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};

/// Notifiable attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    UniqueId,
    Title,
    Subtitle,
    Description,
    Image,
    Content,
    RowSpan,
    ColSpan,
    Group,
}

impl Property {
    /// Stable attribute name carried by change events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UniqueId => "UniqueId",
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Description => "Description",
            Self::Image => "Image",
            Self::Content => "Content",
            Self::RowSpan => "RowSpan",
            Self::ColSpan => "ColSpan",
            Self::Group => "Group",
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emitted once per stored attribute change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChanged {
    pub property: Property,
}

/// Stores `value` into `slot` and notifies, unless it equals the current value.
///
/// Returns whether the slot changed. The slot borrow is released before
/// handlers run, so handlers can read the new value.
pub fn set_property<T: PartialEq>(
    slot: &RefCell<T>,
    value: T,
    property: Property,
    notifier: &ChangeNotifier<PropertyChanged>,
) -> bool {
    {
        let mut current = slot.borrow_mut();
        if *current == value {
            return false;
        }
        *current = value;
    }
    notifier.notify(&PropertyChanged { property });
    true
}
