//! Findings reported by diagram data checks.
//!
//! Codes are grouped by the part of the diagram they concern:
//! - `C0xx` - Node findings
//! - `C1xx` - Edge findings

use std::fmt;

/// The severity level of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The diagram data is inconsistent; lookups may pick the wrong node.
    Error,

    /// Something will silently render as nothing or as a fallback.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Codes for categorizing check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCode {
    // =========================================================================
    // Node findings (C0xx)
    // =========================================================================
    /// Duplicate node identifier.
    ///
    /// Two nodes share an id; only the first is reachable by lookup.
    C001,

    /// Unrecognized shape tag.
    ///
    /// The node renders as an empty group.
    C002,

    /// Unparseable fill color.
    ///
    /// The node renders with the neutral default fill.
    C003,

    /// Non-positive node size.
    C004,

    // =========================================================================
    // Edge findings (C1xx)
    // =========================================================================
    /// Edge endpoint does not name a node of the diagram.
    ///
    /// The edge renders as an empty path.
    C100,
}

impl CheckCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::C001 => "C001",
            CheckCode::C002 => "C002",
            CheckCode::C003 => "C003",
            CheckCode::C004 => "C004",
            CheckCode::C100 => "C100",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckCode::C001 => "duplicate node identifier",
            CheckCode::C002 => "unrecognized shape tag",
            CheckCode::C003 => "invalid fill color",
            CheckCode::C004 => "non-positive node size",
            CheckCode::C100 => "dangling edge",
        }
    }

    /// Returns the severity findings with this code are reported at.
    pub fn severity(&self) -> Severity {
        match self {
            CheckCode::C001 => Severity::Error,
            CheckCode::C002 | CheckCode::C003 | CheckCode::C004 | CheckCode::C100 => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single check finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: CheckCode,
    message: String,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic at the default severity of `code`.
    pub fn new(code: CheckCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Attaches a help message (builder style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> CheckCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(CheckCode::C100, "edge `a` -> `b` targets unknown node `b`");
        assert_eq!(
            diag.to_string(),
            "warning[C100]: edge `a` -> `b` targets unknown node `b`"
        );
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_code_severity() {
        assert!(CheckCode::C001.severity().is_error());
        assert!(CheckCode::C002.severity().is_warning());
        assert_eq!(
            Diagnostic::new(CheckCode::C001, "dup").severity(),
            Severity::Error
        );
    }
}
