//! Graphviz DOT serialization of a [`RenderGraph`].
//!
//! Node labels are emitted as HTML-like strings (`label=<...>`), which is why
//! [`RenderGraph`] stores markup without the outer angle brackets. Everything
//! else is a plain quoted attribute.

use log::debug;

use crate::config::StyleConfig;
use crate::render::{ArrowHead, NodeShape, RenderGraph};

/// Serializes a render graph to DOT text.
///
/// # Examples
///
/// ```
/// use conmap::config::StyleConfig;
/// use conmap::export::dot::write_dot;
/// use conmap::render::{RenderGraph, RenderOptions};
/// use conmap_schema::{Concept, ConceptMap};
///
/// let map = ConceptMap::new().with_concept(Concept::new("a", "idea", "Graphs"));
/// let rendered = RenderGraph::from_map(&map, &RenderOptions::default());
///
/// let text = write_dot(&rendered, &StyleConfig::default());
/// assert!(text.starts_with("digraph {"));
/// assert!(text.contains("\"co_a\""));
/// ```
pub fn write_dot(graph: &RenderGraph, style: &StyleConfig) -> String {
    let font = style.font_name();
    let mut out = String::from("digraph {\n");

    for node in graph.nodes() {
        out.push_str(&format!(
            "\t\"{}\" [label=<{}> fontname=\"{}\" shape=\"{}\"]\n",
            quote(node.key()),
            node.label(),
            quote(font),
            shape_name(node.shape())
        ));
    }

    for edge in graph.edges() {
        match edge.arrowhead() {
            ArrowHead::Normal => {
                out.push_str(&format!(
                    "\t\"{}\" -> \"{}\"\n",
                    quote(edge.source()),
                    quote(edge.target())
                ));
            }
            ArrowHead::None => {
                out.push_str(&format!(
                    "\t\"{}\" -> \"{}\" [arrowhead=\"none\"]\n",
                    quote(edge.source()),
                    quote(edge.target())
                ));
            }
        }
    }

    out.push_str(&format!("\tfontname=\"{}\"\n", quote(font)));
    out.push_str("\tfontsize=\"10\"\n");
    out.push_str("\tfontcolor=\"grey\"\n");
    out.push_str(&format!("\tlabel=\"{}\"\n", quote(graph.caption())));
    out.push_str("}\n");

    debug!(bytes = out.len(); "DOT text written");
    out
}

fn shape_name(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Box => "box",
        NodeShape::Plaintext => "plaintext",
    }
}

/// Escapes a value for use inside a double-quoted DOT string.
fn quote(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderOptions;
    use conmap_schema::{Concept, ConceptMap, Relation};

    #[test]
    fn writes_nodes_edges_and_graph_attributes() {
        let map = ConceptMap::new()
            .with_concept(Concept::new("a", "person", "Alice"))
            .with_concept(Concept::new("b", "person", "Bob"))
            .with_relation(Relation::new("a", "knows", "b"));
        let options = RenderOptions::default().with_labels(false);
        let rendered = RenderGraph::from_map(&map, &options);

        let text = write_dot(&rendered, &StyleConfig::default());

        let expected = "digraph {\n\
            \t\"co_a\" [label=<<TABLE CELLBORDER=\"0\" BORDER=\"0\"><TR><TD COLSPAN=\"2\" CELLPADDING=\"0\" CELLSPACING=\"0\"><B>Alice</B></TD></TR></TABLE>> fontname=\"Arial\" shape=\"box\"]\n\
            \t\"co_b\" [label=<<TABLE CELLBORDER=\"0\" BORDER=\"0\"><TR><TD COLSPAN=\"2\" CELLPADDING=\"0\" CELLSPACING=\"0\"><B>Bob</B></TD></TR></TABLE>> fontname=\"Arial\" shape=\"box\"]\n\
            \t\"pred_a_knows\" [label=<<TABLE CELLBORDER=\"0\" BORDER=\"0\"><TR><TD COLSPAN=\"2\" CELLPADDING=\"0\" CELLSPACING=\"0\"><I>knows</I></TD></TR></TABLE>> fontname=\"Arial\" shape=\"plaintext\"]\n\
            \t\"co_a\" -> \"pred_a_knows\" [arrowhead=\"none\"]\n\
            \t\"pred_a_knows\" -> \"co_b\"\n";
        assert!(text.starts_with(expected));
        assert!(text.contains("\tfontname=\"Arial\"\n"));
        assert!(text.contains("\tfontsize=\"10\"\n"));
        assert!(text.contains("\tfontcolor=\"grey\"\n"));
        assert!(text.contains("\tlabel=\"Concept map by conmap"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn predicate_nodes_are_plaintext() {
        let map = ConceptMap::new()
            .with_concept(Concept::new("a", "idea", "One"))
            .with_concept(Concept::new("b", "idea", "Two"))
            .with_relation(Relation::new("a", "implies", "b"));
        let rendered = RenderGraph::from_map(&map, &RenderOptions::default());

        let text = write_dot(&rendered, &StyleConfig::default());
        assert!(text.contains("\"pred_a_implies\" [label=<"));
        assert!(text.contains("shape=\"plaintext\"]"));
    }

    #[test]
    fn configured_font_replaces_the_default() {
        let map = ConceptMap::new().with_concept(Concept::new("a", "idea", "One"));
        let rendered = RenderGraph::from_map(&map, &RenderOptions::default());
        let style = StyleConfig::new(Some("Helvetica".to_string()));

        let text = write_dot(&rendered, &style);
        assert!(text.contains("fontname=\"Helvetica\""));
        assert!(!text.contains("fontname=\"Arial\""));
    }

    #[test]
    fn quoted_strings_escape_backslashes_and_quotes() {
        assert_eq!(quote(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(quote(r"C:\fonts"), r"C:\\fonts");
    }
}
