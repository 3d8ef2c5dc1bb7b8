//! Structured diagnostics produced by the structure checker.
//!
//! Errors block a skill from passing validation; warnings are advisory and
//! never change the exit status on their own.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A rule violation that causes validation failure.
    Error,
    /// A potential issue that does not cause failure.
    Warning,
}

/// A single finding from the structure checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., `"E001"`, `"W002"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Metadata field or file the finding is about.
    pub field: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Shorthand for an error diagnostic.
    #[must_use]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Shorthand for a warning diagnostic.
    #[must_use]
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Set the field that caused this diagnostic.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Returns `true` if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Split diagnostics into `(errors, warnings)`, preserving check order.
#[must_use]
pub fn partition(diags: &[Diagnostic]) -> (Vec<&Diagnostic>, Vec<&Diagnostic>) {
    diags.iter().partition(|d| d.is_error())
}

// ── Code constants ─────────────────────────────────────────────────────

/// Missing or empty required metadata field.
pub const E001: &str = "E001";
/// Skill name is not lowercase kebab-case.
pub const E002: &str = "E002";
/// No commands declared.
pub const E003: &str = "E003";
/// README.md is missing.
pub const E004: &str = "E004";
/// Entry file named in metadata does not exist.
pub const E005: &str = "E005";

/// Description exceeds the maximum length.
pub const W001: &str = "W001";
/// README lacks a recommended section.
pub const W002: &str = "W002";
/// Entry file has no execute permission (Unix only).
pub const W003: &str = "W003";
