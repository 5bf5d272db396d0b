//! Error adapter for converting FlowsheetError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's report formatting used in the CLI. A [`FlowsheetError::Check`]
//! carries several findings; each one is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, Severity as MietteSeverity};

use flowsheet::{
    FlowsheetError,
    check::{Diagnostic, Severity},
};

/// Adapter for a single data-check finding.
pub struct CheckAdapter<'a> {
    diag: &'a Diagnostic,
    /// Diagram the finding belongs to
    diagram: &'a str,
}

impl<'a> CheckAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, diagram: &'a str) -> Self {
        Self { diag, diagram }
    }
}

impl fmt::Debug for CheckAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckAdapter")
            .field("diag", &self.diag)
            .field("diagram", &self.diagram)
            .finish()
    }
}

impl fmt::Display for CheckAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.diagram, self.diag.message())
    }
}

impl std::error::Error for CheckAdapter<'_> {}

impl MietteDiagnostic for CheckAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("flowsheet::check::{}", self.diag.code())))
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for every [`FlowsheetError`] variant except `Check`.
pub struct ErrorAdapter<'a>(pub &'a FlowsheetError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FlowsheetError::Io(_) => "flowsheet::io",
            FlowsheetError::Catalog(_) => "flowsheet::catalog",
            FlowsheetError::Config(_) => "flowsheet::config",
            FlowsheetError::UnknownDiagram(_) => "flowsheet::unknown_diagram",
            FlowsheetError::Export(_) => "flowsheet::export",
            FlowsheetError::Check { .. } => "flowsheet::check",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FlowsheetError::UnknownDiagram(_) => Some(Box::new(
                "run `flowsheet --list` to see the available diagrams",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A single data-check finding.
    Check(CheckAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Check(c) => fmt::Display::fmt(c, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Check(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Check(c) => c.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Check(c) => c.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Check(c) => c.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`FlowsheetError`] into a list of reportable errors.
///
/// For [`FlowsheetError::Check`], this returns one [`Reportable`] for each
/// finding. For other error variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &FlowsheetError) -> Vec<Reportable<'_>> {
    match err {
        FlowsheetError::Check {
            diagram,
            diagnostics,
        } => diagnostics
            .iter()
            .map(|d| Reportable::Check(CheckAdapter::new(d, diagram)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
