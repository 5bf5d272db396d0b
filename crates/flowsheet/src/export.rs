//! Export of rendered diagrams.
//!
//! The only backend is [`svg::Svg`]. Export errors convert into
//! [`FlowsheetError::Export`] at the crate boundary.
//!
//! [`FlowsheetError::Export`]: crate::FlowsheetError::Export

/// SVG export backend.
pub mod svg;

use thiserror::Error;

/// Errors that can occur during diagram export.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
