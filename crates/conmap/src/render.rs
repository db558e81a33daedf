//! Render model synthesis for concept maps.
//!
//! [`RenderGraph`] consumes a [`ConceptMap`] directly (not the validated
//! graph: endpoint validity is re-derived here, independently of the defect
//! set) and produces the presentation model a rendering backend turns into an
//! image: one node per concept, one synthetic node per predicate occurrence,
//! and the connecting edges.
//!
//! The deduplication policy follows `show_edge_properties`. With it off,
//! relations sharing a source and predicate collapse onto one predicate node,
//! fanning out to their targets, and repeated edges are suppressed. With it
//! on, every `(from, predicate, to)` triple keeps its own predicate node so
//! per-relation properties stay attached.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::trace;
use serde::Deserialize;

use conmap_schema::{Concept, ConceptMap, Properties};

/// Fixed caption attached to every render graph.
pub const DISCLAIMER: &str = "Concept map by conmap \u{2022} This concept map is AI-generated. \
                              Be aware that it likely contains errors and/or false information.";

const TABLE_OPEN: &str = r#"<TABLE CELLBORDER="0" BORDER="0">"#;
const TABLE_CLOSE: &str = "</TABLE>";

/// Display options for the render model.
///
/// Defaults match the interactive frontend: type labels on, node and edge
/// properties hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Include the concept's type label above its name.
    pub show_labels: bool,

    /// List non-name concept properties inside concept nodes.
    pub show_node_properties: bool,

    /// Give each relation its own predicate node and list its properties.
    pub show_edge_properties: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_node_properties: false,
            show_edge_properties: false,
        }
    }
}

impl RenderOptions {
    /// Sets whether type labels are shown, returning the options for chaining.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Sets whether node properties are listed, returning the options for
    /// chaining.
    pub fn with_node_properties(mut self, show: bool) -> Self {
        self.show_node_properties = show;
        self
    }

    /// Sets whether edge properties are listed, returning the options for
    /// chaining.
    pub fn with_edge_properties(mut self, show: bool) -> Self {
        self.show_edge_properties = show;
        self
    }
}

/// Shape drawn for a render node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Rectangular outline, used for concept nodes.
    Box,
    /// No outline, used for predicate nodes.
    Plaintext,
}

/// Arrowhead drawn at the target end of a render edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    /// Standard arrowhead; the predicate-to-target half of a link.
    Normal,
    /// No arrowhead; the source-to-predicate half of a link.
    None,
}

/// A presentation node: a concept box or a synthetic predicate label.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    key: String,
    label: String,
    shape: NodeShape,
}

impl RenderNode {
    fn new(key: String, label: String, shape: NodeShape) -> Self {
        Self { key, label, shape }
    }

    /// Backend identity of the node (`co_` or `pred_` prefixed).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// HTML-like table markup for the node body, without outer delimiters.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shape the backend should draw.
    pub fn shape(&self) -> NodeShape {
        self.shape
    }
}

/// A presentation edge between two node keys.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEdge {
    source: String,
    target: String,
    arrowhead: ArrowHead,
}

impl RenderEdge {
    fn new(source: String, target: String, arrowhead: ArrowHead) -> Self {
        Self {
            source,
            target,
            arrowhead,
        }
    }

    /// Key of the source node.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Key of the target node.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Arrowhead drawn at the target end.
    pub fn arrowhead(&self) -> ArrowHead {
        self.arrowhead
    }
}

/// The deduplicated presentation graph handed to a rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGraph {
    nodes: IndexMap<String, RenderNode>,
    edges: Vec<RenderEdge>,
    caption: String,
}

impl RenderGraph {
    /// Builds the render model for a concept map.
    ///
    /// Concept nodes are emitted in input order (first occurrence wins for
    /// duplicate ids), then predicate nodes in order of first encounter.
    /// Relations with an endpoint missing from the declared concepts are
    /// silently skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use conmap::render::{RenderGraph, RenderOptions};
    /// use conmap_schema::{Concept, ConceptMap, Relation};
    ///
    /// let map = ConceptMap::new()
    ///     .with_concept(Concept::new("a", "person", "Ada"))
    ///     .with_concept(Concept::new("b", "machine", "Engine"))
    ///     .with_relation(Relation::new("a", "programs", "b"));
    ///
    /// let rendered = RenderGraph::from_map(&map, &RenderOptions::default());
    /// assert_eq!(rendered.node_count(), 3);
    /// assert_eq!(rendered.edge_count(), 2);
    /// ```
    pub fn from_map(map: &ConceptMap, options: &RenderOptions) -> Self {
        let mut nodes: IndexMap<String, RenderNode> = IndexMap::new();
        let mut edges: Vec<RenderEdge> = Vec::new();

        for concept in &map.concepts {
            let key = concept_key(&concept.concept_id);
            if !nodes.contains_key(&key) {
                let label = concept_label(concept, options);
                nodes.insert(key.clone(), RenderNode::new(key, label, NodeShape::Box));
            }
        }

        let known: HashSet<&str> = map
            .concepts
            .iter()
            .map(|concept| concept.concept_id.as_str())
            .collect();
        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

        for relation in &map.relations {
            if !known.contains(relation.from_concept.as_str())
                || !known.contains(relation.to_concept.as_str())
            {
                trace!(
                    from = relation.from_concept,
                    to = relation.to_concept;
                    "Skipping relation with unknown endpoint"
                );
                continue;
            }

            let source = concept_key(&relation.from_concept);
            let target = concept_key(&relation.to_concept);
            let display = escape_text(&relation.predicate);

            let mut key = format!(
                "pred_{}_{}",
                relation.from_concept,
                display.replace(' ', "_")
            );

            if options.show_edge_properties {
                // One predicate node per (from, predicate, to) triple, with
                // the relation's own properties listed; edges are added
                // unconditionally.
                key.push('_');
                key.push_str(&relation.to_concept);

                if !nodes.contains_key(&key) {
                    let label = predicate_label(&display, Some(&relation.properties));
                    nodes.insert(
                        key.clone(),
                        RenderNode::new(key.clone(), label, NodeShape::Plaintext),
                    );
                }

                edges.push(RenderEdge::new(source, key.clone(), ArrowHead::None));
                edges.push(RenderEdge::new(key, target, ArrowHead::Normal));
            } else {
                // Relations sharing (from, predicate) merge onto one node;
                // the seen-pairs set suppresses repeated edges.
                if !nodes.contains_key(&key) {
                    let label = predicate_label(&display, None);
                    nodes.insert(
                        key.clone(),
                        RenderNode::new(key.clone(), label, NodeShape::Plaintext),
                    );
                }

                if seen_pairs.insert((source.clone(), key.clone())) {
                    edges.push(RenderEdge::new(source, key.clone(), ArrowHead::None));
                }
                if seen_pairs.insert((key.clone(), target.clone())) {
                    edges.push(RenderEdge::new(key, target, ArrowHead::Normal));
                }
            }
        }

        trace!(nodes = nodes.len(), edges = edges.len(); "Render model built");

        Self {
            nodes,
            edges,
            caption: DISCLAIMER.to_string(),
        }
    }

    /// Iterates over nodes in emission order.
    pub fn nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.nodes.values()
    }

    /// Looks up a node by its key.
    pub fn node(&self, key: &str) -> Option<&RenderNode> {
        self.nodes.get(key)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges in emission order.
    pub fn edges(&self) -> &[RenderEdge] {
        &self.edges
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Graph-level caption text.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Escapes free text for embedding in HTML-like labels.
///
/// `&`, `<` and `>` become entities for markup correctness; `_` becomes a
/// space purely for readability.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('_', " ")
}

fn concept_key(concept_id: &str) -> String {
    format!("co_{concept_id}")
}

fn concept_label(concept: &Concept, options: &RenderOptions) -> String {
    let mut label = String::from(TABLE_OPEN);

    if options.show_labels {
        label.push_str(&heading_row("I", &escape_text(&concept.kind)));
    }
    label.push_str(&heading_row("B", &escape_text(concept.display_name())));

    // More properties than just the name.
    if options.show_node_properties && concept.properties.len() > 1 {
        label.push_str("<HR/>");
        for (key, value) in &concept.properties {
            if key == "name" {
                continue;
            }
            label.push_str(&property_row(key, value));
        }
    }

    label.push_str(TABLE_CLOSE);
    label
}

fn predicate_label(predicate_display: &str, properties: Option<&Properties>) -> String {
    let mut label = String::from(TABLE_OPEN);
    label.push_str(&heading_row("I", predicate_display));

    if let Some(properties) = properties {
        if !properties.is_empty() {
            label.push_str("<HR/>");
            for (key, value) in properties {
                label.push_str(&property_row(key, value));
            }
        }
    }

    label.push_str(TABLE_CLOSE);
    label
}

/// Single-cell row spanning both table columns, wrapped in `tag`.
fn heading_row(tag: &str, text: &str) -> String {
    format!(
        r#"<TR><TD COLSPAN="2" CELLPADDING="0" CELLSPACING="0"><{tag}>{text}</{tag}></TD></TR>"#
    )
}

/// Two-cell key/value row for a property listing.
fn property_row(key: &str, value: &str) -> String {
    format!(
        r#"<TR><TD ALIGN="left">{}:</TD><TD>{}</TD></TR>"#,
        escape_text(key),
        escape_text(value)
    )
}
