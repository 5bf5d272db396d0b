//! Command-line argument definitions for the Flowsheet CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the diagram, the output path, an optional
//! highlighted node, extra diagram tables, configuration and logging.

use clap::Parser;

/// Command-line arguments for the Flowsheet diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalogue id of the diagram to render; lists the catalogue when omitted
    #[arg(help = "Diagram id, e.g. membrane-bioreactor")]
    pub diagram: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Node id to render as highlighted, with its detail panel
    #[arg(long)]
    pub highlight: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to additional diagram tables (TOML)
    #[arg(long)]
    pub catalog: Option<String>,

    /// List the available diagrams and exit
    #[arg(long)]
    pub list: bool,

    /// Check the diagram data instead of rendering it
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
