//! Error types for Flowsheet operations.
//!
//! Rendering itself never fails: unknown diagrams, unknown shapes and
//! dangling edges degrade to empty output. [`FlowsheetError`] covers the
//! outer operations that touch files, TOML tables and configuration.

use std::io;

use thiserror::Error;

use crate::check::Diagnostic;

/// The main error type for Flowsheet operations.
#[derive(Debug, Error)]
pub enum FlowsheetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown diagram `{0}`")]
    UnknownDiagram(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    /// Findings of an explicit data check, see [`crate::check`].
    #[error("{} check finding(s) in diagram `{diagram}`", .diagnostics.len())]
    Check {
        diagram: String,
        diagnostics: Vec<Diagnostic>,
    },
}

impl From<crate::export::Error> for FlowsheetError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
