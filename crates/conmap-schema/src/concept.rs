//! Concept entities: the nodes of a concept map.

use serde::{Deserialize, Serialize};

use crate::properties::{self, Properties};

/// A uniquely identified entity in a concept map.
///
/// Identity is the `concept_id`; two concepts carrying the same id describe
/// the same entity. The properties map is expected to hold a `"name"` key
/// with the display name, but that is a producer-side convention:
/// [`display_name`](Concept::display_name) falls back to the id when the
/// property is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier within one map.
    pub concept_id: String,

    /// Free-form category label (e.g. "person", "chemical_element").
    #[serde(rename = "type")]
    pub kind: String,

    /// Key/value properties; `"name"` holds the display name.
    #[serde(default, deserialize_with = "properties::deserialize")]
    pub properties: Properties,
}

impl Concept {
    /// Creates a concept with the given id, type label, and `"name"` property.
    pub fn new(
        concept_id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let mut properties = Properties::new();
        properties.insert("name".to_string(), name.into());

        Self {
            concept_id: concept_id.into(),
            kind: kind.into(),
            properties,
        }
    }

    /// Adds a property, returning the concept for chaining.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the display name: the `"name"` property, or the id when absent.
    pub fn display_name(&self) -> &str {
        self.properties
            .get("name")
            .map(String::as_str)
            .unwrap_or(&self.concept_id)
    }
}
