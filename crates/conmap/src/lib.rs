//! Conmap - A pipeline for analyzing and visualizing concept maps.
//!
//! Parsing, validation, structural analysis, and render model synthesis for
//! JSON concept map schemes. A scheme declares concepts and the relations
//! between them; this crate turns one into a defect report, a structural
//! summary, and a Graphviz DOT rendering.

pub mod analysis;
pub mod config;
pub mod export;
pub mod graph;
pub mod render;

mod error;

pub use conmap_schema::{Concept, ConceptMap, Properties, Relation};

pub use error::ConmapError;

use log::{debug, info, trace};

use analysis::GraphSummary;
use config::AppConfig;
use graph::ConceptGraph;
use render::RenderGraph;

/// Facade for processing concept map schemes.
///
/// This provides an API for running a scheme through parsing, structural
/// analysis, and render model synthesis.
///
/// # Examples
///
/// ```
/// use conmap::{MapPipeline, config::AppConfig};
///
/// let source = r#"{
///     "concepts": [
///         {"concept_id": "ada", "type": "person", "properties": {"name": "Ada"}},
///         {"concept_id": "engine", "type": "machine", "properties": {"name": "Engine"}}
///     ],
///     "relations": [
///         {"from_concept": "ada", "to_concept": "engine", "predicate": "programs"}
///     ]
/// }"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let pipeline = MapPipeline::new(config);
///
/// // Parse the scheme into a concept map
/// let map = pipeline.parse(source).expect("Failed to parse");
///
/// // Summarize the map's structure
/// let summary = pipeline.analyze(&map).expect("Failed to analyze");
/// assert_eq!(summary.disconnected_component_count, 1);
///
/// // Render the map to DOT text
/// let dot = pipeline.render_dot(&map);
/// assert!(dot.starts_with("digraph {"));
///
/// // Or use default config
/// let pipeline = MapPipeline::default();
/// ```
#[derive(Default)]
pub struct MapPipeline {
    config: AppConfig,
}

impl MapPipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and style settings
    ///
    /// # Examples
    ///
    /// ```
    /// use conmap::{MapPipeline, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let pipeline = MapPipeline::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON scheme into a [`ConceptMap`].
    ///
    /// Missing `concepts` or `relations` arrays default to empty, and
    /// non-string property values are coerced to display text.
    ///
    /// # Arguments
    ///
    /// * `source` - Scheme JSON as a string
    ///
    /// # Errors
    ///
    /// Returns [`ConmapError::Parse`] when the source is not valid JSON or
    /// does not match the scheme shape.
    pub fn parse(&self, source: &str) -> Result<ConceptMap, ConmapError> {
        info!("Parsing concept map scheme");

        let map: ConceptMap = serde_json::from_str(source)?;

        debug!(
            concepts = map.concepts.len(),
            relations = map.relations.len();
            "Scheme parsed successfully"
        );
        trace!(map:?; "Parsed concept map");

        Ok(map)
    }

    /// Summarize the structure of a concept map.
    ///
    /// Builds the validated graph, then computes component, degree, and
    /// centrality statistics over it.
    ///
    /// # Arguments
    ///
    /// * `map` - A parsed concept map
    ///
    /// # Errors
    ///
    /// Returns [`ConmapError::EmptyGraph`] when the map declares no concepts.
    pub fn analyze(&self, map: &ConceptMap) -> Result<GraphSummary, ConmapError> {
        info!("Building concept graph");
        let graph = ConceptGraph::from_map(map);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            missing = graph.missing_count();
            "Graph built successfully"
        );

        info!("Summarizing graph structure");
        let summary = analysis::summarize(&graph)?;
        trace!(summary:?; "Structure summary");

        Ok(summary)
    }

    /// Render a concept map to Graphviz DOT text.
    ///
    /// Builds the render model according to the configured
    /// [`RenderOptions`](config::RenderOptions) and serializes it with the
    /// configured style.
    ///
    /// # Arguments
    ///
    /// * `map` - A parsed concept map
    ///
    /// # Examples
    ///
    /// ```
    /// use conmap::{Concept, ConceptMap, MapPipeline};
    ///
    /// let map = ConceptMap::new().with_concept(Concept::new("a", "idea", "Graphs"));
    /// let dot = MapPipeline::default().render_dot(&map);
    ///
    /// println!("{}", dot);
    /// ```
    pub fn render_dot(&self, map: &ConceptMap) -> String {
        info!("Building render model");
        let rendered = RenderGraph::from_map(map, &self.config.render());
        debug!(
            nodes = rendered.node_count(),
            edges = rendered.edge_count();
            "Render model ready"
        );

        let dot = export::dot::write_dot(&rendered, self.config.style());
        info!("DOT rendered successfully");
        dot
    }
}
