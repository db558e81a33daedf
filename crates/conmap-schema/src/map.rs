//! The top-level concept map schema.

use serde::{Deserialize, Serialize};

use crate::{concept::Concept, relation::Relation};

/// A full concept/relation schema for one mapped text.
///
/// Both sequences keep production order. The producer is expected to emit
/// unique concept ids and resolvable relation endpoints, but neither
/// invariant is enforced here: a map violating them is still valid input to
/// every downstream component, each of which degrades locally (defect
/// recording, silent skipping) instead of rejecting the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptMap {
    /// Declared concepts, in production order.
    #[serde(default)]
    pub concepts: Vec<Concept>,

    /// Declared relations, in production order.
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl ConceptMap {
    /// Creates an empty concept map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a concept, returning the map for chaining.
    pub fn with_concept(mut self, concept: Concept) -> Self {
        self.concepts.push(concept);
        self
    }

    /// Adds a relation, returning the map for chaining.
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Returns true if the map declares no concepts.
    ///
    /// Relations without any declared concepts cannot resolve, so such a map
    /// produces an empty graph and an empty render model.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
