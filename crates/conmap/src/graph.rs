//! Graph construction and referential validation for concept maps.
//!
//! [`ConceptGraph`] ingests a [`ConceptMap`] and produces a validated
//! directed multigraph together with the defect set of unresolvable ids.
//! Construction is the only place invariants are established: every edge of
//! the finished graph has both endpoints among the declared concepts, so no
//! later component needs to re-check them.

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use conmap_schema::ConceptMap;

/// Validated directed multigraph of a concept map, plus its defect set.
///
/// Vertices carry concept ids; edges carry predicates. Self-loops and
/// parallel edges are preserved. Relations whose endpoints do not resolve
/// against the declared concepts are discarded during construction and their
/// unknown ids recorded as defects rather than treated as errors.
#[derive(Debug)]
pub struct ConceptGraph {
    graph: DiGraph<String, String>,
    indices: HashMap<String, NodeIndex>,
    missing: BTreeSet<String>,
}

impl ConceptGraph {
    /// Builds the validated graph from a concept map.
    ///
    /// Concepts are added in input order, one vertex per id; for duplicate
    /// ids the first occurrence wins. Relations are then resolved in input
    /// order: both endpoints are checked, every unknown id is recorded in
    /// the defect set, and a relation with any unknown endpoint is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use conmap::graph::ConceptGraph;
    /// use conmap_schema::{Concept, ConceptMap, Relation};
    ///
    /// let map = ConceptMap::new()
    ///     .with_concept(Concept::new("a", "person", "Alice"))
    ///     .with_relation(Relation::new("a", "knows", "b"));
    ///
    /// let graph = ConceptGraph::from_map(&map);
    /// assert_eq!(graph.node_count(), 1);
    /// assert_eq!(graph.edge_count(), 0);
    /// assert_eq!(graph.missing_ids().collect::<Vec<_>>(), vec!["b"]);
    /// ```
    pub fn from_map(map: &ConceptMap) -> Self {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        // First pass: one vertex per concept id, first occurrence wins.
        for concept in &map.concepts {
            indices
                .entry(concept.concept_id.clone())
                .or_insert_with(|| graph.add_node(concept.concept_id.clone()));
        }

        // Second pass: resolve both endpoints of every relation, recording
        // each unknown id before discarding the relation.
        let mut missing = BTreeSet::new();

        for relation in &map.relations {
            let from = indices.get(&relation.from_concept).copied();
            let to = indices.get(&relation.to_concept).copied();

            if from.is_none() {
                missing.insert(relation.from_concept.clone());
            }
            if to.is_none() {
                missing.insert(relation.to_concept.clone());
            }

            match (from, to) {
                (Some(from), Some(to)) => {
                    graph.add_edge(from, to, relation.predicate.clone());
                }
                _ => {
                    debug!(
                        from = relation.from_concept,
                        to = relation.to_concept,
                        predicate = relation.predicate;
                        "Discarding relation with unresolved endpoint"
                    );
                }
            }
        }

        trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            missing = missing.len();
            "Concept graph built"
        );

        Self {
            graph,
            indices,
            missing,
        }
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of surviving edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns true if `id` is a vertex of the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    /// Iterates over vertex ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .map(|index| self.graph[index].as_str())
    }

    /// Iterates over surviving edges as `(from, to, predicate)` triples, in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight().as_str(),
            )
        })
    }

    /// Iterates over the defect set in lexicographic order.
    pub fn missing_ids(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    /// Number of distinct ids referenced by relations but never declared.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Undirected multigraph degree of a vertex: one incidence per edge end,
    /// so a self-loop contributes 2. Returns `None` for unknown ids.
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.indices.get(id).map(|&index| {
            self.graph.edges_directed(index, Direction::Incoming).count()
                + self.graph.edges_directed(index, Direction::Outgoing).count()
        })
    }

    /// The underlying petgraph storage, for in-crate analysis passes.
    pub(crate) fn petgraph(&self) -> &DiGraph<String, String> {
        &self.graph
    }
}


#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use conmap_schema::{Concept, Relation};

    // ===================
    // Strategies
    // ===================

    /// Strategy for generating concept ids from a small pool, so duplicate
    /// declarations and dangling references both occur.
    fn concept_id_strategy() -> impl Strategy<Value = String> {
        "[a-d][0-9]"
    }

    fn concept_strategy() -> impl Strategy<Value = Concept> {
        (concept_id_strategy(), "[a-z]{3,8}")
            .prop_map(|(id, kind)| Concept::new(id.clone(), kind, id.to_uppercase()))
    }

    fn relation_strategy() -> impl Strategy<Value = Relation> {
        (concept_id_strategy(), "[a-z]{3,8}", concept_id_strategy())
            .prop_map(|(from, predicate, to)| Relation::new(from, predicate, to))
    }

    fn map_strategy() -> impl Strategy<Value = ConceptMap> {
        (
            proptest::collection::vec(concept_strategy(), 0..12),
            proptest::collection::vec(relation_strategy(), 0..20),
        )
            .prop_map(|(concepts, relations)| ConceptMap {
                concepts,
                relations,
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every declared concept id ends up as a vertex, exactly once, and
    /// every surviving edge connects declared vertices.
    fn check_declared_ids_become_vertices(map: &ConceptMap) -> Result<(), TestCaseError> {
        let graph = ConceptGraph::from_map(map);

        let unique: BTreeSet<&str> = map
            .concepts
            .iter()
            .map(|concept| concept.concept_id.as_str())
            .collect();
        prop_assert_eq!(graph.node_count(), unique.len());
        for id in &unique {
            prop_assert!(graph.contains(id), "Missing declared concept `{}`", id);
        }
        for (from, to, _) in graph.edges() {
            prop_assert!(unique.contains(from), "Edge from undeclared `{}`", from);
            prop_assert!(unique.contains(to), "Edge to undeclared `{}`", to);
        }
        Ok(())
    }

    /// The defect set is exactly the referenced-but-undeclared ids, and
    /// exactly the relations with two declared endpoints survive as edges.
    fn check_defects_and_edges_partition_relations(
        map: &ConceptMap,
    ) -> Result<(), TestCaseError> {
        let graph = ConceptGraph::from_map(map);

        let declared: BTreeSet<&str> = map
            .concepts
            .iter()
            .map(|concept| concept.concept_id.as_str())
            .collect();
        let mut expected_missing: BTreeSet<&str> = BTreeSet::new();
        let mut expected_edges = 0usize;
        for relation in &map.relations {
            let mut complete = true;
            for id in [&relation.from_concept, &relation.to_concept] {
                if !declared.contains(id.as_str()) {
                    expected_missing.insert(id);
                    complete = false;
                }
            }
            if complete {
                expected_edges += 1;
            }
        }

        let missing: BTreeSet<&str> = graph.missing_ids().collect();
        prop_assert_eq!(missing, expected_missing);
        prop_assert_eq!(graph.edge_count(), expected_edges);
        Ok(())
    }

    /// Building the same map twice yields the same graph.
    fn check_build_is_deterministic(map: &ConceptMap) -> Result<(), TestCaseError> {
        let first = ConceptGraph::from_map(map);
        let second = ConceptGraph::from_map(map);

        prop_assert_eq!(
            first.node_ids().collect::<Vec<_>>(),
            second.node_ids().collect::<Vec<_>>()
        );
        prop_assert_eq!(
            first.edges().collect::<Vec<_>>(),
            second.edges().collect::<Vec<_>>()
        );
        prop_assert_eq!(
            first.missing_ids().collect::<Vec<_>>(),
            second.missing_ids().collect::<Vec<_>>()
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn declared_ids_become_vertices(map in map_strategy()) {
            check_declared_ids_become_vertices(&map)?;
        }

        #[test]
        fn defects_and_edges_partition_relations(map in map_strategy()) {
            check_defects_and_edges_partition_relations(&map)?;
        }

        #[test]
        fn build_is_deterministic(map in map_strategy()) {
            check_build_is_deterministic(&map)?;
        }
    }
}
