//! Group entity: owned items plus a capped preview of them.

use crate::collection::{CollectionChange, ObservableVec, PreviewWindow, PREVIEW_CAPACITY};
use crate::model::entity::{Entity, EntityCore};
use crate::model::item::{Item, ItemSpec};
use crate::model::ModelError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

/// Construction input for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub unique_id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl GroupSpec {
    pub fn new(unique_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
        }
    }
}

/// Named collection of items.
///
/// `top_items` mirrors the first `PREVIEW_CAPACITY` entries of `items` and is
/// updated from each `items` change as it happens.
#[derive(Debug)]
pub struct Group {
    core: EntityCore,
    items: ObservableVec<Rc<Item>>,
    top_items: PreviewWindow<Rc<Item>>,
}

impl Group {
    pub fn new(spec: GroupSpec) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Group>| {
            let items = ObservableVec::new();
            let observer = this.clone();
            items.subscribe(move |change: &CollectionChange<Rc<Item>>| {
                if let Some(group) = observer.upgrade() {
                    group.follow_items(change);
                }
            });

            Self {
                core: EntityCore::new(
                    spec.unique_id,
                    spec.title,
                    spec.subtitle,
                    spec.image_path,
                    spec.description,
                ),
                items,
                top_items: PreviewWindow::new(PREVIEW_CAPACITY),
            }
        })
    }

    /// The full, mutable item sequence.
    pub fn items(&self) -> &ObservableVec<Rc<Item>> {
        &self.items
    }

    /// Read-only preview of the first `PREVIEW_CAPACITY` items.
    pub fn top_items(&self) -> &PreviewWindow<Rc<Item>> {
        &self.top_items
    }

    /// Builds an item owned by this group and appends it to `items`.
    pub fn add_item(self: &Rc<Self>, spec: ItemSpec) -> Result<Rc<Item>, ModelError> {
        let item = Item::new(spec, self)?;
        self.items.push(Rc::clone(&item));
        Ok(item)
    }

    fn follow_items(&self, change: &CollectionChange<Rc<Item>>) {
        if let Err(err) = self.top_items.follow(change, &self.items) {
            warn!(
                "event=preview_sync module=model status=error group_id={} action={} error={}",
                self.unique_id(),
                change.action(),
                err
            );
        }
    }
}

impl Entity for Group {
    fn core(&self) -> &EntityCore {
        &self.core
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title())
    }
}
