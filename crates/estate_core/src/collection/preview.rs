//! Bounded prefix mirror ("preview window") over a larger collection.
//!
//! The mirror is maintained from the source collection's own change events,
//! one event at a time, so each update costs work proportional to the change
//! rather than to the source length. A `Reset` is the only event that
//! rebuilds the mirror, and it touches at most `capacity` elements.

use crate::collection::change::{apply_change, CollectionChange, CollectionError};
use crate::collection::observable_vec::ObservableVec;
use crate::observable::SubscriptionId;

/// Number of leading items a group exposes as its preview.
///
/// Twelve fills grid columns evenly for 1, 2, 3, 4 or 6 visible rows.
pub const PREVIEW_CAPACITY: usize = 12;

/// Computes the edits that bring `preview` in line with `source` after
/// `change` was applied to `source`.
///
/// # Contract
/// - `preview` equals the first `min(capacity, len)` elements of `source`
///   as it was before `change`.
/// - `source` is the collection after `change`.
/// - Applying the returned edits in order to `preview` restores the prefix
///   invariant for the new `source`.
pub fn preview_edits<T: Clone>(
    preview: &[T],
    change: &CollectionChange<T>,
    source: &[T],
    capacity: usize,
) -> Vec<CollectionChange<T>> {
    let in_window = |index: usize| index < capacity;
    let mut edits = Vec::new();

    match change {
        CollectionChange::Insert { index, value } => {
            if in_window(*index) {
                edits.push(CollectionChange::Insert {
                    index: *index,
                    value: value.clone(),
                });
                if preview.len() >= capacity {
                    push_drop_tail(&mut edits, preview, preview.len());
                }
            }
        }
        CollectionChange::Remove { index, value } => {
            if in_window(*index) {
                edits.push(CollectionChange::Remove {
                    index: *index,
                    value: value.clone(),
                });
                if source.len() >= capacity {
                    push_refill(&mut edits, source, capacity, preview.len().saturating_sub(1));
                }
            }
        }
        CollectionChange::Move { from, to, value } => match (in_window(*from), in_window(*to)) {
            (true, true) => edits.push(CollectionChange::Move {
                from: *from,
                to: *to,
                value: value.clone(),
            }),
            (true, false) => {
                edits.push(CollectionChange::Remove {
                    index: *from,
                    value: value.clone(),
                });
                push_refill(&mut edits, source, capacity, preview.len().saturating_sub(1));
            }
            (false, true) => {
                edits.push(CollectionChange::Insert {
                    index: *to,
                    value: value.clone(),
                });
                if preview.len() >= capacity {
                    push_drop_tail(&mut edits, preview, preview.len());
                }
            }
            (false, false) => {}
        },
        CollectionChange::Replace { index, new, .. } => {
            if let Some(old) = preview.get(*index).filter(|_| in_window(*index)) {
                edits.push(CollectionChange::Replace {
                    index: *index,
                    old: old.clone(),
                    new: new.clone(),
                });
            }
        }
        CollectionChange::Reset => {
            edits.push(CollectionChange::Reset);
            edits.extend(
                source
                    .iter()
                    .take(capacity)
                    .enumerate()
                    .map(|(index, value)| CollectionChange::Insert {
                        index,
                        value: value.clone(),
                    }),
            );
        }
    }

    edits
}

/// Pure `(mirror, event) -> mirror` step.
///
/// # Errors
/// - `IndexOutOfBounds` when `preview` is not a valid mirror of `source`.
pub fn next_preview<T: Clone>(
    preview: &[T],
    change: &CollectionChange<T>,
    source: &[T],
    capacity: usize,
) -> Result<Vec<T>, CollectionError> {
    let mut next = preview.to_vec();
    for edit in preview_edits(preview, change, source, capacity) {
        apply_change(&mut next, &edit)?;
    }
    Ok(next)
}

// After an in-window insert the mirror holds one element too many; the
// element that was last before the insert now sits at `tail_index`.
fn push_drop_tail<T: Clone>(
    edits: &mut Vec<CollectionChange<T>>,
    preview: &[T],
    tail_index: usize,
) {
    if let Some(tail) = preview.last() {
        edits.push(CollectionChange::Remove {
            index: tail_index,
            value: tail.clone(),
        });
    }
}

// The element just outside the window slid into its last slot.
fn push_refill<T: Clone>(
    edits: &mut Vec<CollectionChange<T>>,
    source: &[T],
    capacity: usize,
    index: usize,
) {
    if let Some(refill) = source.get(capacity - 1) {
        edits.push(CollectionChange::Insert {
            index,
            value: refill.clone(),
        });
    }
}

/// Read-only observable mirror of a collection's first `capacity` elements.
///
/// Callers can read and subscribe; only the owning model applies edits, and
/// every applied edit is re-emitted to subscribers.
#[derive(Debug)]
pub struct PreviewWindow<T> {
    values: ObservableVec<T>,
    capacity: usize,
}

impl<T: Clone> PreviewWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: ObservableVec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.values.to_vec()
    }

    pub fn subscribe(&self, handler: impl Fn(&CollectionChange<T>) + 'static) -> SubscriptionId {
        self.values.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.values.unsubscribe(id)
    }

    /// Follows one change that was just applied to `source`.
    ///
    /// Edits are computed under a read borrow and applied after it is
    /// released, so subscribers of this window may read `source`.
    pub(crate) fn follow(
        &self,
        change: &CollectionChange<T>,
        source: &ObservableVec<T>,
    ) -> Result<(), CollectionError> {
        let edits = source.with_items(|items| {
            self.values
                .with_items(|preview| preview_edits(preview, change, items, self.capacity))
        });
        for edit in edits {
            self.values.commit(edit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{next_preview, preview_edits, PreviewWindow, PREVIEW_CAPACITY};
    use crate::collection::change::{apply_change, CollectionChange};
    use crate::collection::observable_vec::ObservableVec;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn step(
        source: &mut Vec<u32>,
        preview: &[u32],
        change: CollectionChange<u32>,
    ) -> Vec<u32> {
        apply_change(source, &change).expect("change applies to source");
        next_preview(preview, &change, source.as_slice(), PREVIEW_CAPACITY).expect("mirror step")
    }

    fn prefix(source: &[u32]) -> Vec<u32> {
        source.iter().take(PREVIEW_CAPACITY).copied().collect()
    }

    #[test]
    fn insert_inside_full_window_drops_tail() {
        let mut source: Vec<u32> = (0..12).collect();
        let preview = prefix(&source);

        let next = step(
            &mut source,
            &preview,
            CollectionChange::Insert { index: 0, value: 99 },
        );
        assert_eq!(next.len(), 12);
        assert_eq!(next[0], 99);
        assert!(!next.contains(&11));
        assert_eq!(next, prefix(&source));
    }

    #[test]
    fn insert_beyond_window_leaves_preview_untouched() {
        let mut source: Vec<u32> = (0..12).collect();
        let preview = prefix(&source);
        let edits = preview_edits(
            &preview,
            &CollectionChange::Insert { index: 12, value: 99 },
            &source,
            PREVIEW_CAPACITY,
        );
        assert!(edits.is_empty());

        let next = step(
            &mut source,
            &preview,
            CollectionChange::Insert { index: 12, value: 99 },
        );
        assert_eq!(next, preview);
    }

    #[test]
    fn remove_in_window_refills_from_just_outside() {
        let mut source: Vec<u32> = (0..13).collect();
        let preview = prefix(&source);

        let next = step(&mut source, &preview, CollectionChange::Remove { index: 3, value: 3 });
        assert_eq!(next.len(), 12);
        assert_eq!(next.last(), Some(&12));
        assert_eq!(next, prefix(&source));
    }

    #[test]
    fn remove_from_short_collection_does_not_refill() {
        let mut source: Vec<u32> = (0..5).collect();
        let preview = prefix(&source);

        let next = step(&mut source, &preview, CollectionChange::Remove { index: 0, value: 0 });
        assert_eq!(next, vec![1, 2, 3, 4]);
    }

    #[test]
    fn move_across_window_boundary_in_both_directions() {
        let mut source: Vec<u32> = (0..20).collect();
        let preview = prefix(&source);

        let outward = step(
            &mut source,
            &preview,
            CollectionChange::Move { from: 2, to: 15, value: 2 },
        );
        assert_eq!(outward, prefix(&source));

        let inward = step(
            &mut source,
            &outward,
            CollectionChange::Move { from: 15, to: 0, value: 2 },
        );
        assert_eq!(inward, prefix(&source));
        assert_eq!(inward[0], 2);
    }

    #[test]
    fn replace_only_touches_window_positions() {
        let mut source: Vec<u32> = (0..14).collect();
        let preview = prefix(&source);

        let inside = step(
            &mut source,
            &preview,
            CollectionChange::Replace { index: 4, old: 4, new: 40 },
        );
        assert_eq!(inside[4], 40);

        let outside = step(
            &mut source,
            &inside,
            CollectionChange::Replace { index: 13, old: 13, new: 130 },
        );
        assert_eq!(outside, inside);
    }

    #[test]
    fn reset_rebuilds_from_current_source() {
        let source: Vec<u32> = (100..130).collect();
        let stale = vec![1, 2, 3];

        let edits = preview_edits(&stale, &CollectionChange::Reset, &source, PREVIEW_CAPACITY);
        assert_eq!(edits.first(), Some(&CollectionChange::Reset));
        assert_eq!(edits.len(), 1 + PREVIEW_CAPACITY);

        let next = next_preview(&stale, &CollectionChange::Reset, &source, PREVIEW_CAPACITY)
            .expect("reset step");
        assert_eq!(next, prefix(&source));
    }

    #[test]
    fn window_follows_source_and_reemits_edits() {
        let source = Rc::new(ObservableVec::new());
        let window = Rc::new(PreviewWindow::new(3));

        let follower = Rc::clone(&window);
        let observed = Rc::clone(&source);
        source.subscribe(move |change| {
            follower.follow(change, &observed).expect("window follows source");
        });

        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        window.subscribe(move |change: &CollectionChange<u32>| {
            sink.borrow_mut().push(change.action())
        });

        for value in 0..4 {
            source.push(value);
        }
        assert_eq!(window.to_vec(), vec![0, 1, 2]);

        source.insert(0, 9).expect("insert at head");
        assert_eq!(window.to_vec(), vec![9, 0, 1]);
        assert_eq!(window.capacity(), 3);
        assert_eq!(
            *emitted.borrow(),
            vec!["insert", "insert", "insert", "insert", "remove"]
        );
    }
}
