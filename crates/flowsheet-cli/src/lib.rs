//! CLI logic for the Flowsheet diagram tool.
//!
//! This module contains the core CLI logic: loading configuration and extra
//! diagram tables, then listing, checking or rendering a diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{error, info};

use flowsheet::{Catalog, FlowsheetBuilder, FlowsheetError};

/// Run the Flowsheet CLI application
///
/// Without a diagram id, or with `--list`, this prints the catalogue. With
/// `--check` it runs the data checks on the diagram. Otherwise it renders the
/// diagram to the output file.
///
/// # Errors
///
/// Returns `FlowsheetError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid diagram tables
/// - Unknown diagram ids
/// - Check findings, when `--check` is given
pub fn run(args: &Args) -> Result<(), FlowsheetError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let mut builder = FlowsheetBuilder::new(app_config);
    if let Some(path) = &args.catalog {
        info!(catalog_path = path; "Loading diagram tables");
        let source = fs::read_to_string(path)?;
        builder = builder.with_catalog(Catalog::from_toml_str(&source)?);
    }

    let diagram = match args.diagram.as_deref() {
        Some(diagram) if !args.list => diagram,
        _ => {
            print!("{}", list_catalog(builder.catalog()));
            return Ok(());
        }
    };

    if !builder.catalog().contains(diagram) {
        error!(diagram_id = diagram; "Diagram not found in catalogue");
        return Err(FlowsheetError::UnknownDiagram(diagram.to_string()));
    }

    if args.check {
        info!(diagram_id = diagram; "Checking diagram");
        let diagnostics = builder.check(diagram)?;
        if diagnostics.is_empty() {
            info!(diagram_id = diagram; "No findings");
            return Ok(());
        }
        return Err(FlowsheetError::Check {
            diagram: diagram.to_string(),
            diagnostics,
        });
    }

    info!(
        diagram_id = diagram,
        output_path = args.output;
        "Processing diagram"
    );

    builder.write_svg(diagram, args.highlight.as_deref(), Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// One `id<TAB>title` line per diagram, in catalogue order.
fn list_catalog(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|diagram| format!("{}\t{}\n", diagram.id(), diagram.title()))
        .collect()
}
