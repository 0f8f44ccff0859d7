//! Subcommand implementations.

use estate_core::{DataSourceError, Entity, Group, Item, SampleDataSource};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Failures reported to the terminal.
#[derive(Debug)]
pub enum CommandError {
    Lookup(DataSourceError),
    GroupNotFound(String),
    ItemNotFound(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(err) => write!(f, "{err}"),
            Self::GroupNotFound(id) => write!(f, "group not found (or ambiguous): {id}"),
            Self::ItemNotFound(id) => write!(f, "item not found (or ambiguous): {id}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lookup(err) => Some(err),
            Self::GroupNotFound(_) | Self::ItemNotFound(_) => None,
        }
    }
}

impl From<DataSourceError> for CommandError {
    fn from(value: DataSourceError) -> Self {
        Self::Lookup(value)
    }
}

pub fn run_groups(source: &SampleDataSource, collection: &str) -> Result<(), CommandError> {
    for group in source.get_groups(collection)? {
        println!("{}", group_line(group));
    }
    Ok(())
}

pub fn run_group(source: &SampleDataSource, unique_id: &str) -> Result<(), CommandError> {
    let group = source
        .get_group(unique_id)
        .ok_or_else(|| CommandError::GroupNotFound(unique_id.to_string()))?;
    println!("{}", group_line(&group));
    for item in group.items().to_vec() {
        println!("  {}", item_line(&item));
    }
    Ok(())
}

pub fn run_item(source: &SampleDataSource, unique_id: &str) -> Result<(), CommandError> {
    let item = source
        .get_item(unique_id)
        .ok_or_else(|| CommandError::ItemNotFound(unique_id.to_string()))?;
    println!("{}", item_line(&item));
    let group_id = item.group().map(|group| group.unique_id());
    println!("group={}", group_id.as_deref().unwrap_or("-"));
    if let Some(image) = item.image() {
        println!("image={}", image.uri());
    }
    println!("content_chars={}", item.content().chars().count());
    Ok(())
}

pub fn run_preview(source: &SampleDataSource, unique_id: &str) -> Result<(), CommandError> {
    let group = source
        .get_group(unique_id)
        .ok_or_else(|| CommandError::GroupNotFound(unique_id.to_string()))?;
    let preview = group.top_items();
    println!(
        "{} preview={}/{} capacity={}",
        group.unique_id(),
        preview.len(),
        group.items().len(),
        preview.capacity()
    );
    for item in preview.to_vec() {
        println!("  {}", item_line(&item));
    }
    Ok(())
}

fn group_line(group: &Rc<Group>) -> String {
    format!(
        "{}\t{}\titems={}",
        group.unique_id(),
        group,
        group.items().len()
    )
}

fn item_line(item: &Rc<Item>) -> String {
    format!(
        "{}\t{}\tcols={} rows={}",
        item.unique_id(),
        item,
        item.col_span(),
        item.row_span()
    )
}
