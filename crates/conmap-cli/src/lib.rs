//! CLI logic for the conmap concept map tool.
//!
//! This module contains the core CLI logic for the conmap tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use conmap::{ConmapError, MapPipeline, config::AppConfig};

/// Run the conmap CLI application
///
/// This function processes the input scheme through the pipeline, writes the
/// resulting DOT text to the output file, and emits the structure summary as
/// JSON, either to a file or to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ConmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scheme parsing errors
pub fn run(args: &Args) -> Result<(), ConmapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing concept map"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_flags(app_config, args);

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the scheme using the MapPipeline API
    let pipeline = MapPipeline::new(app_config);
    let map = pipeline.parse(&source)?;

    // Summarize the structure; an empty scheme has nothing to summarize
    match pipeline.analyze(&map) {
        Ok(summary) => {
            let json = serde_json::to_string_pretty(&summary)?;
            match &args.summary {
                Some(path) => {
                    fs::write(path, json)?;
                    info!(summary_file = path; "Summary exported successfully");
                }
                None => println!("{json}"),
            }
        }
        Err(ConmapError::EmptyGraph) => {
            warn!("Scheme declares no concepts, skipping summary");
        }
        Err(err) => return Err(err),
    }

    // Write output file
    let dot = pipeline.render_dot(&map);
    fs::write(&args.output, dot)?;

    info!(output_file = args.output; "DOT exported successfully");

    Ok(())
}

/// Fold display flags from the command line into the loaded configuration.
fn apply_flags(config: AppConfig, args: &Args) -> AppConfig {
    let mut render = config.render();
    if args.no_labels {
        render = render.with_labels(false);
    }
    if args.node_props {
        render = render.with_node_properties(true);
    }
    if args.edge_props {
        render = render.with_edge_properties(true);
    }
    AppConfig::new(render, config.style().clone())
}
