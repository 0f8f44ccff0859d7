//! Positional collection change variants.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One mutation of an ordered collection.
///
/// Payload values are the elements involved: the inserted value, the removed
/// value, the moved value, or both sides of a replacement.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionChange<T> {
    Insert { index: usize, value: T },
    Remove { index: usize, value: T },
    Move { from: usize, to: usize, value: T },
    Replace { index: usize, old: T, new: T },
    /// Contents changed wholesale; positions held by observers are stale.
    Reset,
}

impl<T> CollectionChange<T> {
    /// Short action name for diagnostics.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Move { .. } => "move",
            Self::Replace { .. } => "replace",
            Self::Reset => "reset",
        }
    }
}

/// Positional collection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for collection of length {len}")
            }
        }
    }
}

impl Error for CollectionError {}

/// Applies `change` to `target`. `Reset` clears the vector.
///
/// # Errors
/// - `IndexOutOfBounds` when a position does not exist in `target`
///   (`Insert` accepts `index == len`). `target` is left untouched.
pub fn apply_change<T: Clone>(
    target: &mut Vec<T>,
    change: &CollectionChange<T>,
) -> Result<(), CollectionError> {
    let len = target.len();
    match change {
        CollectionChange::Insert { index, value } => {
            if *index > len {
                return Err(CollectionError::IndexOutOfBounds { index: *index, len });
            }
            target.insert(*index, value.clone());
        }
        CollectionChange::Remove { index, .. } => {
            check_index(*index, len)?;
            target.remove(*index);
        }
        CollectionChange::Move { from, to, .. } => {
            check_index(*from, len)?;
            check_index(*to, len)?;
            let moved = target.remove(*from);
            target.insert(*to, moved);
        }
        CollectionChange::Replace { index, new, .. } => {
            check_index(*index, len)?;
            target[*index] = new.clone();
        }
        CollectionChange::Reset => target.clear(),
    }
    Ok(())
}

fn check_index(index: usize, len: usize) -> Result<(), CollectionError> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_change, CollectionChange, CollectionError};

    #[test]
    fn move_shifts_elements_between_positions() {
        let mut values = vec!['a', 'b', 'c', 'd'];
        apply_change(
            &mut values,
            &CollectionChange::Move {
                from: 0,
                to: 2,
                value: 'a',
            },
        )
        .expect("move in range");
        assert_eq!(values, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn insert_accepts_append_position() {
        let mut values = vec![1, 2];
        apply_change(&mut values, &CollectionChange::Insert { index: 2, value: 3 })
            .expect("append position");
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_out_of_range_positions_without_mutating() {
        let mut values = vec![1, 2];
        let err = apply_change(&mut values, &CollectionChange::Remove { index: 2, value: 0 })
            .expect_err("remove past end");
        assert_eq!(err, CollectionError::IndexOutOfBounds { index: 2, len: 2 });

        let err = apply_change(&mut values, &CollectionChange::Insert { index: 4, value: 0 })
            .expect_err("insert past end");
        assert_eq!(err, CollectionError::IndexOutOfBounds { index: 4, len: 2 });
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn reset_clears_target() {
        let mut values = vec![1, 2, 3];
        apply_change(&mut values, &CollectionChange::Reset).expect("reset");
        assert!(values.is_empty());
    }
}
