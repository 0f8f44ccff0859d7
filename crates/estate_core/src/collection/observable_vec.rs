//! Ordered collection that reports every mutation to its subscribers.

use crate::collection::change::{apply_change, CollectionChange, CollectionError};
use crate::observable::{ChangeNotifier, SubscriptionId};
use std::cell::RefCell;

/// Mutable ordered collection with positional change notification.
///
/// Mutators take `&self` so the collection can live inside shared entities.
/// No borrow is held while subscribers run; they may read the collection.
#[derive(Debug)]
pub struct ObservableVec<T> {
    values: RefCell<Vec<T>>,
    notifier: ChangeNotifier<CollectionChange<T>>,
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self {
            values: RefCell::new(Vec::new()),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl<T: Clone> ObservableVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.values.borrow().get(index).cloned()
    }

    /// Copies the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    /// Runs `read` against the current contents without copying them.
    ///
    /// `read` must not mutate this collection.
    pub fn with_items<R>(&self, read: impl FnOnce(&[T]) -> R) -> R {
        read(self.values.borrow().as_slice())
    }

    /// Appends `value` and returns its position.
    pub fn push(&self, value: T) -> usize {
        let index = {
            let mut values = self.values.borrow_mut();
            values.push(value.clone());
            values.len() - 1
        };
        self.notifier
            .notify(&CollectionChange::Insert { index, value });
        index
    }

    /// Inserts `value` at `index` (`index == len` appends).
    pub fn insert(&self, index: usize, value: T) -> Result<(), CollectionError> {
        self.commit(CollectionChange::Insert { index, value })
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&self, index: usize) -> Result<T, CollectionError> {
        let value = self.require(index)?;
        self.commit(CollectionChange::Remove {
            index,
            value: value.clone(),
        })?;
        Ok(value)
    }

    /// Moves the element at `from` so that it ends up at `to`.
    pub fn move_item(&self, from: usize, to: usize) -> Result<(), CollectionError> {
        let value = self.require(from)?;
        self.commit(CollectionChange::Move { from, to, value })
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn replace(&self, index: usize, value: T) -> Result<T, CollectionError> {
        let old = self.require(index)?;
        self.commit(CollectionChange::Replace {
            index,
            old: old.clone(),
            new: value,
        })?;
        Ok(old)
    }

    /// Removes every element; emits `Reset`.
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
        self.notifier.notify(&CollectionChange::Reset);
    }

    /// Replaces the contents wholesale; emits a single `Reset`.
    pub fn reset_with(&self, values: Vec<T>) {
        *self.values.borrow_mut() = values;
        self.notifier.notify(&CollectionChange::Reset);
    }

    pub fn subscribe(&self, handler: impl Fn(&CollectionChange<T>) + 'static) -> SubscriptionId {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Applies an already-described change and notifies.
    pub(crate) fn commit(&self, change: CollectionChange<T>) -> Result<(), CollectionError> {
        apply_change(&mut self.values.borrow_mut(), &change)?;
        self.notifier.notify(&change);
        Ok(())
    }

    fn require(&self, index: usize) -> Result<T, CollectionError> {
        let values = self.values.borrow();
        values
            .get(index)
            .cloned()
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                len: values.len(),
            })
    }
}
