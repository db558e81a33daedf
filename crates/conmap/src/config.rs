//! Configuration types for concept map rendering.
//!
//! This module provides configuration structures that control how render
//! models are built and styled. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderOptions`] - Controls which parts of the map appear in the render model.
//! - [`StyleConfig`] - Controls visual styling options such as the label font.
//!
//! # Example
//!
//! ```
//! # use conmap::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.render().show_labels);
//! assert_eq!(config.style().font_name(), "Arial");
//! ```

use serde::Deserialize;

pub use crate::render::RenderOptions;

/// Font used for all labels when none is configured.
const DEFAULT_FONT: &str = "Arial";

/// Top-level application configuration combining render and style settings.
///
/// Groups [`RenderOptions`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render options section.
    #[serde(default)]
    render: RenderOptions,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render options and style
    /// configuration.
    ///
    /// # Arguments
    ///
    /// * `render` - Render model display options.
    /// * `style` - Visual styling options.
    pub fn new(render: RenderOptions, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render options.
    pub fn render(&self) -> RenderOptions {
        self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered output.
///
/// Fields that are not set fall back to built-in defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Font family for node labels and the caption.
    #[serde(default)]
    font_name: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified font name.
    pub fn new(font_name: Option<String>) -> Self {
        Self { font_name }
    }

    /// Returns the configured font name, or the built-in default.
    pub fn font_name(&self) -> &str {
        self.font_name.as_deref().unwrap_or(DEFAULT_FONT)
    }
}
