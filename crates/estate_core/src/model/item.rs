//! Leaf entity shown as one grid tile.

use crate::model::entity::{Entity, EntityCore};
use crate::model::group::Group;
use crate::model::ModelError;
use crate::observable::{set_property, Property, PropertyChanged};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

const DEFAULT_SPAN: u32 = 1;

fn default_span() -> u32 {
    DEFAULT_SPAN
}

/// Construction input for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub unique_id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Relative to `ASSET_BASE_URI`; resolved on first image read.
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Long-form body text.
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_span")]
    pub row_span: u32,
    #[serde(default = "default_span")]
    pub col_span: u32,
}

impl ItemSpec {
    /// Spec with empty text fields, no image and unit spans.
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
            content: String::new(),
            row_span: DEFAULT_SPAN,
            col_span: DEFAULT_SPAN,
        }
    }
}

/// Item entity with layout hints and a weak link to its owning group.
#[derive(Debug)]
pub struct Item {
    core: EntityCore,
    content: RefCell<String>,
    row_span: RefCell<u32>,
    col_span: RefCell<u32>,
    group: RefCell<Weak<Group>>,
}

impl Item {
    /// Builds an item that belongs to `group`.
    ///
    /// The item is not added to `group.items()`; see `Group::add_item`.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpan` when either span is zero.
    pub fn new(spec: ItemSpec, group: &Rc<Group>) -> Result<Rc<Self>, ModelError> {
        validate_span(&spec.unique_id, spec.row_span)?;
        validate_span(&spec.unique_id, spec.col_span)?;
        Ok(Rc::new(Self {
            core: EntityCore::new(
                spec.unique_id,
                spec.title,
                spec.subtitle,
                spec.image_path,
                spec.description,
            ),
            content: RefCell::new(spec.content),
            row_span: RefCell::new(spec.row_span),
            col_span: RefCell::new(spec.col_span),
            group: RefCell::new(Rc::downgrade(group)),
        }))
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn set_content(&self, value: impl Into<String>) -> bool {
        set_property(&self.content, value.into(), Property::Content, self.core.notifier())
    }

    pub fn row_span(&self) -> u32 {
        *self.row_span.borrow()
    }

    /// # Errors
    /// - `ModelError::InvalidSpan` when `value` is zero; nothing is stored.
    pub fn set_row_span(&self, value: u32) -> Result<bool, ModelError> {
        validate_span(&self.unique_id(), value)?;
        Ok(set_property(
            &self.row_span,
            value,
            Property::RowSpan,
            self.core.notifier(),
        ))
    }

    pub fn col_span(&self) -> u32 {
        *self.col_span.borrow()
    }

    /// # Errors
    /// - `ModelError::InvalidSpan` when `value` is zero; nothing is stored.
    pub fn set_col_span(&self, value: u32) -> Result<bool, ModelError> {
        validate_span(&self.unique_id(), value)?;
        Ok(set_property(
            &self.col_span,
            value,
            Property::ColSpan,
            self.core.notifier(),
        ))
    }

    /// Owning group, or `None` once the group has been dropped.
    pub fn group(&self) -> Option<Rc<Group>> {
        self.group.borrow().upgrade()
    }

    /// Points the back-reference at `group`. Compared by identity.
    ///
    /// Does not move the item between `items` collections.
    pub fn set_group(&self, group: &Rc<Group>) -> bool {
        {
            let mut current = self.group.borrow_mut();
            if Weak::ptr_eq(&current, &Rc::downgrade(group)) {
                return false;
            }
            *current = Rc::downgrade(group);
        }
        self.core.notifier().notify(&PropertyChanged {
            property: Property::Group,
        });
        true
    }
}

impl Entity for Item {
    fn core(&self) -> &EntityCore {
        &self.core
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title())
    }
}

fn validate_span(unique_id: &str, span: u32) -> Result<(), ModelError> {
    if span == 0 {
        return Err(ModelError::InvalidSpan {
            unique_id: unique_id.to_string(),
            span,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemSpec};
    use crate::model::entity::Entity;
    use crate::model::group::{Group, GroupSpec};
    use crate::model::ModelError;
    use crate::observable::Property;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn group(id: &str) -> Rc<Group> {
        Group::new(GroupSpec::new(id, id))
    }

    #[test]
    fn new_item_points_at_owning_group() {
        let owner = group("Group-1");
        let item = Item::new(ItemSpec::new("Item-1", "Introduction"), &owner).expect("valid spec");

        let linked = item.group().expect("group alive");
        assert!(Rc::ptr_eq(&linked, &owner));
        assert_eq!(item.row_span(), 1);
        assert_eq!(item.col_span(), 1);
        assert_eq!(item.to_string(), "Introduction");
        assert!(owner.items().is_empty());
    }

    #[test]
    fn zero_span_is_rejected() {
        let owner = group("Group-1");
        let mut spec = ItemSpec::new("Item-1", "Tile");
        spec.col_span = 0;
        let err = Item::new(spec, &owner).expect_err("zero span");
        assert_eq!(
            err,
            ModelError::InvalidSpan {
                unique_id: "Item-1".to_string(),
                span: 0,
            }
        );

        let item = Item::new(ItemSpec::new("Item-2", "Tile"), &owner).expect("valid spec");
        assert!(item.set_row_span(0).is_err());
        assert_eq!(item.row_span(), 1);
    }

    #[test]
    fn item_attributes_notify_with_their_names() {
        let first = group("Group-1");
        let second = group("Group-2");
        let item = Item::new(ItemSpec::new("Item-1", "Tile"), &first).expect("valid spec");
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        item.subscribe(move |event| sink.borrow_mut().push(event.property));

        assert!(item.set_content("Body"));
        assert!(!item.set_content("Body"));
        assert_eq!(item.set_row_span(2), Ok(true));
        assert_eq!(item.set_col_span(1), Ok(false));
        assert!(!item.set_group(&first));
        assert!(item.set_group(&second));

        assert_eq!(
            *events.borrow(),
            vec![Property::Content, Property::RowSpan, Property::Group]
        );
    }

    #[test]
    fn back_reference_does_not_keep_group_alive() {
        let owner = group("Group-1");
        let item = Item::new(ItemSpec::new("Item-1", "Tile"), &owner).expect("valid spec");
        drop(owner);
        assert!(item.group().is_none());
    }
}
