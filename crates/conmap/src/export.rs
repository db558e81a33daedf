//! Export backends for render graphs.
//!
//! Currently a single backend: Graphviz DOT text, suitable for piping into
//! `dot -Tsvg` or any other Graphviz layout engine.

pub mod dot;
