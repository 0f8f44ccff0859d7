//! Attribute set and notification surface shared by groups and items.

use crate::model::image::{ImageRef, ImageSlot, ASSET_BASE_URI};
use crate::observable::{set_property, ChangeNotifier, Property, PropertyChanged, SubscriptionId};
use std::cell::RefCell;

/// Common entity state, embedded by `Group` and `Item`.
///
/// Every setter goes through compare-and-notify; writing the current value
/// emits nothing.
#[derive(Debug)]
pub struct EntityCore {
    unique_id: RefCell<String>,
    title: RefCell<String>,
    subtitle: RefCell<String>,
    description: RefCell<String>,
    image: RefCell<ImageSlot>,
    notifier: ChangeNotifier<PropertyChanged>,
}

impl EntityCore {
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: RefCell::new(unique_id.into()),
            title: RefCell::new(title.into()),
            subtitle: RefCell::new(subtitle.into()),
            description: RefCell::new(description.into()),
            image: RefCell::new(ImageSlot::from_path(image_path)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub(crate) fn notifier(&self) -> &ChangeNotifier<PropertyChanged> {
        &self.notifier
    }

    pub(crate) fn set(&self, slot: Field, value: String) -> bool {
        let (cell, property) = match slot {
            Field::UniqueId => (&self.unique_id, Property::UniqueId),
            Field::Title => (&self.title, Property::Title),
            Field::Subtitle => (&self.subtitle, Property::Subtitle),
            Field::Description => (&self.description, Property::Description),
        };
        set_property(cell, value, property, &self.notifier)
    }

    pub(crate) fn get(&self, slot: Field) -> String {
        match slot {
            Field::UniqueId => self.unique_id.borrow().clone(),
            Field::Title => self.title.borrow().clone(),
            Field::Subtitle => self.subtitle.borrow().clone(),
            Field::Description => self.description.borrow().clone(),
        }
    }

    pub(crate) fn matches_id(&self, unique_id: &str) -> bool {
        *self.unique_id.borrow() == unique_id
    }

    fn image(&self) -> Option<ImageRef> {
        self.image.borrow_mut().resolve(ASSET_BASE_URI)
    }

    fn set_image(&self, image: Option<ImageRef>) -> bool {
        let changed = {
            let mut slot = self.image.borrow_mut();
            if slot.resolved() == image.as_ref() {
                // A pending path loses authority even when nothing visible changes.
                if slot.pending_path().is_some() {
                    *slot = ImageSlot::Empty;
                }
                false
            } else {
                *slot = image.map_or(ImageSlot::Empty, ImageSlot::Resolved);
                true
            }
        };
        if changed {
            self.notifier.notify(&PropertyChanged {
                property: Property::Image,
            });
        }
        changed
    }

    fn set_image_path(&self, path: String) {
        *self.image.borrow_mut() = ImageSlot::Unresolved(path);
        self.notifier.notify(&PropertyChanged {
            property: Property::Image,
        });
    }
}

/// Plain string attributes held by `EntityCore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    UniqueId,
    Title,
    Subtitle,
    Description,
}

/// Attribute accessors and change subscription for groups and items.
pub trait Entity {
    fn core(&self) -> &EntityCore;

    fn unique_id(&self) -> String {
        self.core().get(Field::UniqueId)
    }

    fn set_unique_id(&self, value: impl Into<String>) -> bool {
        self.core().set(Field::UniqueId, value.into())
    }

    fn title(&self) -> String {
        self.core().get(Field::Title)
    }

    fn set_title(&self, value: impl Into<String>) -> bool {
        self.core().set(Field::Title, value.into())
    }

    fn subtitle(&self) -> String {
        self.core().get(Field::Subtitle)
    }

    fn set_subtitle(&self, value: impl Into<String>) -> bool {
        self.core().set(Field::Subtitle, value.into())
    }

    fn description(&self) -> String {
        self.core().get(Field::Description)
    }

    fn set_description(&self, value: impl Into<String>) -> bool {
        self.core().set(Field::Description, value.into())
    }

    /// Returns the image, resolving and caching a pending path on first read.
    fn image(&self) -> Option<ImageRef> {
        self.core().image()
    }

    /// Sets the image directly, discarding any pending path.
    ///
    /// Notifies only when the resolved value differs from the current one.
    fn set_image(&self, image: Option<ImageRef>) -> bool {
        self.core().set_image(image)
    }

    /// Records a new path and drops any cached image.
    ///
    /// Always notifies `Image`: the next read resolves to a new handle even
    /// though nothing is resolved yet.
    fn set_image_path(&self, path: impl Into<String>) {
        self.core().set_image_path(path.into());
    }

    /// Snapshot of the image state, without triggering resolution.
    fn image_slot(&self) -> ImageSlot {
        self.core().image.borrow().clone()
    }

    fn subscribe(&self, handler: impl Fn(&PropertyChanged) + 'static) -> SubscriptionId {
        self.core().notifier().subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.core().notifier().unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, EntityCore};
    use crate::model::image::{resolve_image, ImageSlot};
    use crate::observable::Property;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        core: EntityCore,
    }

    impl Entity for Probe {
        fn core(&self) -> &EntityCore {
            &self.core
        }
    }

    fn probe(image_path: Option<&str>) -> (Probe, Rc<RefCell<Vec<Property>>>) {
        let probe = Probe {
            core: EntityCore::new("id-1", "Title", "Subtitle", image_path.map(String::from), ""),
        };
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        probe.subscribe(move |event| sink.borrow_mut().push(event.property));
        (probe, events)
    }

    #[test]
    fn string_setters_notify_once_per_change() {
        let (probe, events) = probe(None);

        assert!(!probe.set_title("Title"));
        assert!(probe.set_title("Renamed"));
        assert!(!probe.set_description(""));
        assert!(probe.set_unique_id("id-2"));

        assert_eq!(
            *events.borrow(),
            vec![Property::Title, Property::UniqueId]
        );
        assert_eq!(probe.title(), "Renamed");
        assert_eq!(probe.unique_id(), "id-2");
    }

    #[test]
    fn set_image_path_always_notifies_and_invalidates_cache() {
        let (probe, events) = probe(Some("Assets/1.jpg"));
        let first = probe.image().expect("initial path resolves");

        probe.set_image_path("Assets/1.jpg");
        assert_eq!(probe.image_slot(), ImageSlot::Unresolved("Assets/1.jpg".to_string()));
        let second = probe.image().expect("new path resolves");

        assert_ne!(first, second);
        assert_eq!(*events.borrow(), vec![Property::Image]);
    }

    #[test]
    fn set_image_clears_path_and_does_not_resolve_again() {
        let (probe, events) = probe(Some("Assets/1.jpg"));
        let explicit = resolve_image("mem://", "direct.png");

        assert!(probe.set_image(Some(explicit.clone())));
        assert_eq!(probe.image(), Some(explicit.clone()));
        assert!(!probe.set_image(Some(explicit)));
        assert_eq!(*events.borrow(), vec![Property::Image]);

        assert!(probe.set_image(None));
        assert!(probe.image().is_none());
    }

    #[test]
    fn clearing_image_over_pending_path_is_silent() {
        let (probe, events) = probe(Some("Assets/1.jpg"));

        assert!(!probe.set_image(None));
        assert_eq!(probe.image_slot(), ImageSlot::Empty);
        assert!(probe.image().is_none());
        assert!(events.borrow().is_empty());
    }
}
