//! Error types for conmap operations.
//!
//! This module provides the main error type [`ConmapError`]. Referential
//! defects in a scheme are deliberately not represented here: an unresolved
//! relation endpoint is recoverable producer noise, recorded in the graph's
//! defect set rather than raised as an error.

use std::io;

use thiserror::Error;

/// The main error type for conmap operations.
#[derive(Debug, Error)]
pub enum ConmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Scheme parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Structural metrics are undefined over an empty vertex set. Callers
    /// should treat this as "no metrics available", not as a processing
    /// failure.
    #[error("Empty graph: the concept map declares no concepts")]
    EmptyGraph,
}
