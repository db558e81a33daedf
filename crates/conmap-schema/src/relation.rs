//! Relations: directed, labeled connections between concepts.

use serde::{Deserialize, Serialize};

use crate::properties::{self, Properties};

/// A directed, labeled connection between two concepts.
///
/// Self-loops (`from_concept == to_concept`) are permitted, and multiple
/// relations between the same ordered pair of concepts form a multigraph
/// rather than collapsing. Endpoints reference concepts by id; an endpoint
/// that does not resolve against the declared concepts is a data defect the
/// graph builder records and the render model builder skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Id of the source concept.
    pub from_concept: String,

    /// Id of the target concept.
    pub to_concept: String,

    /// Free-form predicate label (e.g. "works_at").
    pub predicate: String,

    /// Key/value properties of the relation itself.
    #[serde(default, deserialize_with = "properties::deserialize")]
    pub properties: Properties,
}

impl Relation {
    /// Creates a relation for the `(from, predicate, to)` triple.
    pub fn new(
        from_concept: impl Into<String>,
        predicate: impl Into<String>,
        to_concept: impl Into<String>,
    ) -> Self {
        Self {
            from_concept: from_concept.into(),
            to_concept: to_concept.into(),
            predicate: predicate.into(),
            properties: Properties::new(),
        }
    }

    /// Adds a property, returning the relation for chaining.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns true if this relation connects a concept to itself.
    pub fn is_self_loop(&self) -> bool {
        self.from_concept == self.to_concept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "from_concept": "c1",
            "to_concept": "c2",
            "predicate": "discovered",
            "properties": {"year": 1898}
        }"#;

        let relation: Relation = serde_json::from_str(json).unwrap();
        assert_eq!(relation.from_concept, "c1");
        assert_eq!(relation.to_concept, "c2");
        assert_eq!(relation.predicate, "discovered");
        assert_eq!(relation.properties.get("year").map(String::as_str), Some("1898"));
        assert!(!relation.is_self_loop());
    }

    #[test]
    fn self_loop_detection() {
        assert!(Relation::new("c1", "refers_to", "c1").is_self_loop());
    }
}
