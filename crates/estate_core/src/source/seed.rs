//! Embedded seed fixture for the placeholder dataset.

use crate::model::{GroupSpec, ItemSpec, ModelError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SAMPLE_DATA_JSON: &str = include_str!("../../data/sample_data.json");

/// Top-level seed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub groups: Vec<SeedGroup>,
}

/// One group and the items it owns, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedGroup {
    #[serde(flatten)]
    pub group: GroupSpec,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl SeedDocument {
    /// Decodes the dataset compiled into the crate.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(SAMPLE_DATA_JSON)
    }

    /// Decodes a seed document without validating it.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(SeedError::Decode)
    }

    /// Checks identifier and span invariants.
    ///
    /// Groups and items share one identifier namespace.
    ///
    /// # Errors
    /// - `EmptyId` for a blank identifier.
    /// - `DuplicateId` for an identifier used more than once.
    /// - `Model(InvalidSpan)` for a zero span.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = BTreeSet::<&str>::new();
        for seed_group in &self.groups {
            claim_id(&mut seen, &seed_group.group.unique_id)?;
            for item in &seed_group.items {
                claim_id(&mut seen, &item.unique_id)?;
                for span in [item.row_span, item.col_span] {
                    if span == 0 {
                        return Err(SeedError::Model(ModelError::InvalidSpan {
                            unique_id: item.unique_id.clone(),
                            span,
                        }));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}

fn claim_id<'a>(seen: &mut BTreeSet<&'a str>, unique_id: &'a str) -> Result<(), SeedError> {
    if unique_id.trim().is_empty() {
        return Err(SeedError::EmptyId);
    }
    if !seen.insert(unique_id) {
        return Err(SeedError::DuplicateId(unique_id.to_string()));
    }
    Ok(())
}

/// Seed decode and validation errors.
#[derive(Debug)]
pub enum SeedError {
    Decode(serde_json::Error),
    EmptyId,
    DuplicateId(String),
    Model(ModelError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "failed to decode seed data: {err}"),
            Self::EmptyId => write!(f, "seed data contains a blank identifier"),
            Self::DuplicateId(value) => write!(f, "seed identifier used more than once: {value}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Model(err) => Some(err),
            Self::EmptyId | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ModelError> for SeedError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{SeedDocument, SeedError};
    use crate::model::ModelError;

    #[test]
    fn embedded_fixture_decodes_and_validates() {
        let seed = SeedDocument::embedded().expect("embedded fixture decodes");
        seed.validate().expect("embedded fixture is valid");
        assert_eq!(seed.groups.len(), 2);
        assert_eq!(seed.item_count(), 12);
        assert_eq!(seed.groups[0].group.image_path.as_deref(), Some("Assets/10.jpg"));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let seed = SeedDocument::from_json(
            r#"{"groups":[{"unique_id":"G","title":"Group","items":[{"unique_id":"I","title":"Item"}]}]}"#,
        )
        .expect("minimal document decodes");
        let item = &seed.groups[0].items[0];
        assert_eq!(item.row_span, 1);
        assert_eq!(item.col_span, 1);
        assert!(item.image_path.is_none());
        assert!(seed.groups[0].group.subtitle.is_empty());
    }

    #[test]
    fn validate_rejects_ids_shared_between_group_and_item() {
        let seed = SeedDocument::from_json(
            r#"{"groups":[{"unique_id":"Dup","title":"Group","items":[{"unique_id":"Dup","title":"Item"}]}]}"#,
        )
        .expect("document decodes");
        let err = seed.validate().expect_err("duplicate id");
        assert!(matches!(err, SeedError::DuplicateId(ref id) if id == "Dup"));
    }

    #[test]
    fn validate_rejects_blank_ids_and_zero_spans() {
        let blank = SeedDocument::from_json(r#"{"groups":[{"unique_id":"  ","title":"G"}]}"#)
            .expect("document decodes");
        assert!(matches!(blank.validate(), Err(SeedError::EmptyId)));

        let zero = SeedDocument::from_json(
            r#"{"groups":[{"unique_id":"G","title":"G","items":[{"unique_id":"I","title":"I","row_span":0}]}]}"#,
        )
        .expect("document decodes");
        assert!(matches!(
            zero.validate(),
            Err(SeedError::Model(ModelError::InvalidSpan { span: 0, .. }))
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = SeedDocument::from_json("{").expect_err("truncated document");
        assert!(matches!(err, SeedError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode seed data"));
    }
}
