//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical topic/phrase tree loaded from the bundled data file.
//! - Normalize topic ids so integer and string forms route identically.
//!
//! # Invariants
//! - `TopicId` values are unique across one catalog.
//! - Topic and phrase order is the file order and never changes.
//! - Source-language fields hold logical (unshaped) text.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable topic identifier used as the navigation key.
///
/// The data file may declare ids as integers or strings; both are stored in
/// canonical textual form, so `1` and `"1"` name the same topic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "RawTopicId")]
pub struct TopicId(String);

impl TopicId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TopicId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<TopicId> for String {
    fn from(value: TopicId) -> Self {
        value.0
    }
}

/// Wire shape accepted for `topics[].id`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopicId {
    Integer(i64),
    Unsigned(u64),
    Text(String),
}

impl From<RawTopicId> for TopicId {
    fn from(value: RawTopicId) -> Self {
        match value {
            RawTopicId::Integer(number) => TopicId::from(number),
            RawTopicId::Unsigned(number) => TopicId(number.to_string()),
            RawTopicId::Text(text) => TopicId(text),
        }
    }
}

/// One Arabic phrase and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    /// Arabic source text in logical order; shaped before display.
    pub text: String,
    /// Target-language text; displayed as-is.
    pub translation: String,
}

impl Phrase {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
        }
    }
}

/// One table-of-contents entry and its phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Arabic display name in logical order; shaped before display.
    pub name: String,
    pub phrases: Vec<Phrase>,
}

/// Serialized file shape before catalog-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct CatalogDocument {
    pub(crate) topics: Vec<Topic>,
}

/// Validated, immutable topic catalog.
///
/// Deserializing a `Catalog` directly applies the same validation as
/// [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Builds a catalog after checking topic id uniqueness.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogValidationError> {
        let mut seen = BTreeSet::<&TopicId>::new();
        for topic in &topics {
            if !seen.insert(&topic.id) {
                return Err(CatalogValidationError::DuplicateTopicId(topic.id.clone()));
            }
        }
        Ok(Self { topics })
    }

    /// Catalog with no topics.
    pub fn empty() -> Self {
        Self { topics: Vec::new() }
    }

    /// Topics in display order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| &topic.id == id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of phrases across all topics.
    pub fn phrase_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.phrases.len()).sum()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = CatalogDocument::deserialize(deserializer)?;
        Self::new(document.topics).map_err(serde::de::Error::custom)
    }
}

/// Catalog-level invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    DuplicateTopicId(TopicId),
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTopicId(id) => write!(f, "topic id is duplicated: {id}"),
        }
    }
}

impl Error for CatalogValidationError {}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogValidationError, Phrase, Topic, TopicId};

    fn topic(id: &str, name: &str) -> Topic {
        Topic {
            id: TopicId::from(id),
            name: name.to_string(),
            phrases: vec![Phrase::new("مرحبا", "Hello")],
        }
    }

    #[test]
    fn integer_and_string_ids_share_canonical_form() {
        let from_int: TopicId = serde_json::from_value(serde_json::json!(7)).unwrap();
        let from_text: TopicId = serde_json::from_value(serde_json::json!("7")).unwrap();
        assert_eq!(from_int, from_text);
        assert_eq!(from_int.as_str(), "7");
    }

    #[test]
    fn ids_beyond_signed_range_are_accepted() {
        let id: TopicId =
            serde_json::from_value(serde_json::json!(18_446_744_073_709_551_615_u64)).unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");
        let negative: TopicId = serde_json::from_value(serde_json::json!(-4)).unwrap();
        assert_eq!(negative.as_str(), "-4");
    }

    #[test]
    fn deserialize_applies_catalog_validation() {
        let err = serde_json::from_value::<Catalog>(serde_json::json!({
            "topics": [
                { "id": 5, "name": "أ", "phrases": [] },
                { "id": "5", "name": "ب", "phrases": [] }
            ]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("topic id is duplicated: 5"), "{err}");
    }

    #[test]
    fn id_rejects_non_scalar_values() {
        let err = serde_json::from_value::<TopicId>(serde_json::json!({ "id": 1 }));
        assert!(err.is_err());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![topic("1", "سلام"), topic("1", "أرقام")]).unwrap_err();
        assert_eq!(
            err,
            CatalogValidationError::DuplicateTopicId(TopicId::from("1"))
        );
    }

    #[test]
    fn lookup_and_counts_follow_topics() {
        let catalog = Catalog::new(vec![topic("1", "سلام"), topic("2", "أرقام")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.phrase_count(), 2);
        assert_eq!(
            catalog.topic(&TopicId::from("2")).map(|t| t.name.as_str()),
            Some("أرقام")
        );
        assert!(catalog.topic(&TopicId::from("9")).is_none());
        assert!(Catalog::empty().is_empty());
    }

    #[test]
    fn serializes_ids_as_strings() {
        let catalog = Catalog::new(vec![topic("3", "سفر")]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["topics"][0]["id"], "3");
        assert_eq!(json["topics"][0]["phrases"][0]["translation"], "Hello");
    }
}
