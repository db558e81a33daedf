//! Conmap Schema Types
//!
//! This crate provides the wire-level data shapes for the conmap pipeline.
//! A concept map arrives from an external text-to-structure producer as JSON
//! and deserializes into these types. It includes:
//!
//! - **Concepts**: uniquely identified entities with a type label ([`Concept`])
//! - **Relations**: directed, labeled connections between concepts ([`Relation`])
//! - **Maps**: the full concept+relation schema for one mapped text ([`ConceptMap`])
//! - **Properties**: ordered key/value maps with a coercing deserializer
//!   ([`properties`] module)
//!
//! The shapes here carry no pipeline behavior. In particular they do not
//! enforce the producer-side invariants (unique concept ids, resolvable
//! relation endpoints); downstream consumers are required to tolerate
//! violations locally.

pub mod concept;
pub mod map;
pub mod properties;
pub mod relation;

pub use concept::Concept;
pub use map::ConceptMap;
pub use properties::Properties;
pub use relation::Relation;
