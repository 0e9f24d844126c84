//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Spec diagnostics and check-mode reporting

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{check_options, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{StackError, StackResult};
