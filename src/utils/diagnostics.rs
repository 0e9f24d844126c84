//! Column spec diagnostics
//!
//! Check-mode analysis of a `StackOptions` against a table width. Everything
//! `StackOptions::validate` rejects is reported as an error here, plus a few
//! warnings for specs that are well-formed but almost certainly not what the
//! caller meant.
//!
//! ## Example
//!
//! ```rust
//! use restack::{StackOptions, MergeSpec};
//! use restack::diagnostics::check_options;
//!
//! let options = StackOptions {
//!     merge: vec![MergeSpec::new(5, vec![1])],
//!     ..Default::default()
//! };
//! assert!(check_options(&options, 3).has_errors());
//! ```

use std::fmt;

use crate::core::options::StackOptions;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the spec is legal but looks unintended
    Warning,
    /// Error - the pipeline will reject this spec
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Transform the message is about
    pub transform: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            transform: None,
        }
    }

    pub fn with_transform(mut self, transform: &'static str) -> Self {
        self.transform = Some(transform);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.transform {
            Some(transform) => write!(f, "{}: [{}] {}", self.level, transform, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => {}
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        if self.diagnostics.is_empty() {
            return "no issues found".to_string();
        }

        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "notes only".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Analyze the column specs against a table of `column_count` columns.
pub fn check_options(options: &StackOptions, column_count: usize) -> CheckResult {
    let mut result = CheckResult::new();

    if let Err(err) = options.validate(column_count) {
        result.add(Diagnostic::new(DiagnosticLevel::Error, err.to_string()));
    }

    for spec in &options.merge {
        if spec.sources.is_empty() {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!("target {} has no sources, entry is a no-op", spec.target),
                )
                .with_transform("merge"),
            );
        }
    }

    for spec in &options.moves {
        if spec.from == spec.to {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!("moving column {} onto itself is a no-op", spec.from),
                )
                .with_transform("move"),
            );
        }
    }

    for &index in &options.span {
        if options.skip.contains(&index) {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!(
                        "column {} is both spanned and skipped; if no move rearranges it, \
                         the spanned cell is dropped",
                        index
                    ),
                )
                .with_transform("span"),
            );
        }
    }

    if column_count > 0 && options.skip.len() >= column_count {
        let mut indices: Vec<usize> = options.skip.clone();
        indices.sort_unstable();
        indices.dedup();
        if indices.len() >= column_count {
            result.add(
                Diagnostic::new(DiagnosticLevel::Warning, "every column is skipped")
                    .with_transform("skip"),
            );
        }
    }

    result
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}\n", diag));
        }
    }

    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
