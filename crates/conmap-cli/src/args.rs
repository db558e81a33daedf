//! Command-line argument definitions for the conmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, render options, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the conmap concept map tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scheme JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output DOT file
    #[arg(short, long, default_value = "out.gv")]
    pub output: String,

    /// Path to the structure summary JSON file; printed to stdout when omitted
    #[arg(short, long)]
    pub summary: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Hide concept type labels
    #[arg(long)]
    pub no_labels: bool,

    /// List concept properties inside concept nodes
    #[arg(long)]
    pub node_props: bool,

    /// Give each relation its own predicate node with its properties
    #[arg(long)]
    pub edge_props: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
