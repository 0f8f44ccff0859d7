//! Caller-owned data source holding the placeholder groups.

use crate::model::{Entity, Group, Item};
use crate::source::seed::{SeedDocument, SeedError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// The only collection identifier `get_groups` accepts.
pub const ALL_GROUPS_ID: &str = "AllGroups";

/// Lookup errors surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    UnsupportedCollection(String),
}

impl Display for DataSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedCollection(_) => write!(
                f,
                "Only '{ALL_GROUPS_ID}' is supported as a collection of groups"
            ),
        }
    }
}

impl Error for DataSourceError {}

/// Ordered groups populated once at construction.
///
/// Constructed explicitly by the composition root and passed to consumers;
/// there is no process-wide instance.
#[derive(Debug)]
pub struct SampleDataSource {
    all_groups: Vec<Rc<Group>>,
}

impl SampleDataSource {
    /// Builds the data source from the embedded placeholder dataset.
    ///
    /// # Errors
    /// - Returns `SeedError` when the embedded fixture fails to decode or
    ///   validate.
    pub fn new() -> Result<Self, SeedError> {
        Self::from_seed(&SeedDocument::embedded()?)
    }

    /// Builds the data source from a JSON seed document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Self::from_seed(&SeedDocument::from_json(json)?)
    }

    /// Builds the data source from a validated seed document.
    ///
    /// # Errors
    /// - Returns `SeedError` when identifiers are blank or repeated, or a
    ///   span is zero.
    pub fn from_seed(seed: &SeedDocument) -> Result<Self, SeedError> {
        seed.validate()?;

        let mut all_groups = Vec::with_capacity(seed.groups.len());
        for seed_group in &seed.groups {
            let group = Group::new(seed_group.group.clone());
            for item in &seed_group.items {
                group.add_item(item.clone())?;
            }
            all_groups.push(group);
        }

        let source = Self::from_groups(all_groups);
        info!(
            "event=data_source_init module=source status=ok groups={} items={}",
            source.group_count(),
            source.item_count()
        );
        Ok(source)
    }

    /// Wraps already-built groups. Identifier uniqueness is not checked.
    pub fn from_groups(all_groups: Vec<Rc<Group>>) -> Self {
        Self { all_groups }
    }

    pub fn all_groups(&self) -> &[Rc<Group>] {
        &self.all_groups
    }

    /// Returns every group, in construction order.
    ///
    /// # Errors
    /// - `UnsupportedCollection` for any identifier other than `ALL_GROUPS_ID`.
    pub fn get_groups(&self, collection_id: &str) -> Result<&[Rc<Group>], DataSourceError> {
        if collection_id != ALL_GROUPS_ID {
            warn!(
                "event=get_groups module=source status=error collection_id={collection_id}"
            );
            return Err(DataSourceError::UnsupportedCollection(
                collection_id.to_string(),
            ));
        }
        Ok(&self.all_groups)
    }

    /// Linear search by group identifier.
    ///
    /// Returns `None` for zero matches and for more than one match.
    pub fn get_group(&self, unique_id: &str) -> Option<Rc<Group>> {
        let found = single_match(
            self.all_groups
                .iter()
                .filter(|group| group.core().matches_id(unique_id)),
        )
        .cloned();
        log_lookup("get_group", unique_id, found.is_some());
        found
    }

    /// Linear search across the items of every group.
    ///
    /// Returns `None` for zero matches and for more than one match.
    pub fn get_item(&self, unique_id: &str) -> Option<Rc<Item>> {
        let found = single_match(self.all_groups.iter().flat_map(|group| {
            group.items().with_items(|items| {
                items
                    .iter()
                    .filter(|item| item.core().matches_id(unique_id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        }));
        log_lookup("get_item", unique_id, found.is_some());
        found
    }

    pub fn group_count(&self) -> usize {
        self.all_groups.len()
    }

    /// Total items across all groups.
    pub fn item_count(&self) -> usize {
        self.all_groups.iter().map(|group| group.items().len()).sum()
    }
}

// Stops at the second match; ambiguity is reported as absence.
fn single_match<T>(mut matches: impl Iterator<Item = T>) -> Option<T> {
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

fn log_lookup(event: &str, unique_id: &str, hit: bool) {
    let status = if hit { "ok" } else { "miss" };
    debug!("event={event} module=source status={status} id={unique_id}");
}
