//! Structural analysis of validated concept graphs.
//!
//! Produces the quality-metrics summary for a [`ConceptGraph`]: connectivity
//! decomposition, isolated-vertex detection, degree statistics, and three
//! centrality rankings. All computations ignore edge direction.
//!
//! Degree statistics and degree centrality work on the multigraph (parallel
//! edges count, self-loops count twice); shortest-path based measures work on
//! the simple undirected projection, where parallel edges and self-loops do
//! not alter distances or path counts.

mod centrality;

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::debug;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::{error::ConmapError, graph::ConceptGraph};

/// Centrality rankings, each sorted by descending score.
///
/// Ties keep vertex insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityRankings {
    /// Multigraph degree normalized by `n - 1`.
    pub degree: IndexMap<String, f64>,

    /// Closeness with the improved Wasserman-Faust normalization for
    /// disconnected graphs.
    pub closeness: IndexMap<String, f64>,

    /// Brandes betweenness, normalized to `[0, 1]`.
    pub betweenness: IndexMap<String, f64>,
}

/// Summary record of the structural quality metrics for one concept graph.
///
/// Derived entirely from the validated graph and its defect set; serializing
/// it yields the metrics artifact stored next to the rendered map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Distinct ids referenced by relations but never declared.
    pub missing_node_count: usize,

    /// Number of connected components, ignoring edge direction.
    pub disconnected_component_count: usize,

    /// Number of singleton components (concepts with no surviving relations).
    pub lonely_node_count: usize,

    /// Arithmetic mean of the multigraph vertex degrees.
    pub avg_degree: f64,

    /// Maximum multigraph vertex degree.
    pub max_degree: usize,

    /// The three centrality rankings.
    pub centrality: CentralityRankings,
}

/// Computes the full metrics summary for a validated graph.
///
/// # Errors
///
/// Returns [`ConmapError::EmptyGraph`] when the graph has no vertices:
/// degree averages and centrality normalizations are undefined over an empty
/// vertex set, and callers are expected to treat the condition as "no
/// metrics available" rather than a failure.
pub fn summarize(graph: &ConceptGraph) -> Result<GraphSummary, ConmapError> {
    if graph.is_empty() {
        return Err(ConmapError::EmptyGraph);
    }

    let adjacency = Adjacency::from_graph(graph);
    let components = components(&adjacency);
    let lonely_node_count = components.iter().filter(|c| c.len() == 1).count();

    let degrees = degrees(graph);
    let avg_degree = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
    let max_degree = degrees.iter().copied().max().unwrap_or(0);

    let summary = GraphSummary {
        missing_node_count: graph.missing_count(),
        disconnected_component_count: components.len(),
        lonely_node_count,
        avg_degree,
        max_degree,
        centrality: CentralityRankings {
            degree: ranking(graph, centrality::degree(&degrees)),
            closeness: ranking(graph, centrality::closeness(&adjacency)),
            betweenness: ranking(graph, centrality::betweenness(&adjacency)),
        },
    };

    debug!(
        components = summary.disconnected_component_count,
        lonely = summary.lonely_node_count,
        max_degree = summary.max_degree;
        "Structural summary computed"
    );

    Ok(summary)
}

/// Undirected simple projection of the multigraph: per vertex, sorted unique
/// neighbor indices, self-loops dropped.
pub(crate) struct Adjacency {
    lists: Vec<Vec<usize>>,
}

impl Adjacency {
    pub(crate) fn from_graph(graph: &ConceptGraph) -> Self {
        let storage = graph.petgraph();
        let mut lists = vec![Vec::new(); storage.node_count()];

        for edge in storage.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            if a != b {
                lists[a].push(b);
                lists[b].push(a);
            }
        }

        for list in &mut lists {
            list.sort_unstable();
            list.dedup();
        }

        Self { lists }
    }

    /// Number of vertices.
    pub(crate) fn len(&self) -> usize {
        self.lists.len()
    }

    pub(crate) fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.lists[vertex]
    }
}

/// Connected components as vertex-index lists, discovered by BFS sweep in
/// vertex insertion order.
fn components(adjacency: &Adjacency) -> Vec<Vec<usize>> {
    let mut seen = vec![false; adjacency.len()];
    let mut components = Vec::new();

    for start in 0..adjacency.len() {
        if seen[start] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        seen[start] = true;

        while let Some(vertex) = queue.pop_front() {
            component.push(vertex);
            for &next in adjacency.neighbors(vertex) {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        components.push(component);
    }

    components
}

/// Multigraph degrees by vertex index: one incidence per edge end, so a
/// self-loop contributes 2 to its vertex.
fn degrees(graph: &ConceptGraph) -> Vec<usize> {
    let storage = graph.petgraph();
    let mut degrees = vec![0usize; storage.node_count()];

    for edge in storage.edge_references() {
        degrees[edge.source().index()] += 1;
        degrees[edge.target().index()] += 1;
    }

    degrees
}

/// Pairs per-vertex scores with their ids and sorts by descending score.
///
/// The sort is stable, so equal scores keep vertex insertion order.
fn ranking(graph: &ConceptGraph, scores: Vec<f64>) -> IndexMap<String, f64> {
    let mut entries: Vec<(String, f64)> = graph
        .node_ids()
        .map(str::to_string)
        .zip(scores)
        .collect();

    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.into_iter().collect()
}
