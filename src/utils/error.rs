//! Error handling for Restack
//!
//! This module provides a unified error type and result type for all
//! stacking operations.

use std::fmt;

/// Stacking error type
#[derive(Debug, Clone)]
pub enum StackError {
    /// Parse error - input HTML could not be parsed into a table
    ParseError { message: String },
    /// Configuration error - a column spec is statically malformed
    InvalidSpec {
        transform: &'static str,
        message: String,
    },
    /// A transform addressed a column that does not exist in the current row
    OutOfRange {
        transform: &'static str,
        index: usize,
        row_len: usize,
    },
    /// The clone hook reported a failure
    Callback { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            StackError::InvalidSpec { transform, message } => {
                write!(f, "Invalid {} spec: {}", transform, message)
            }
            StackError::OutOfRange {
                transform,
                index,
                row_len,
            } => {
                write!(
                    f,
                    "{} transform: column index {} out of range for row of {} cells",
                    transform, index, row_len
                )
            }
            StackError::Callback { message } => {
                write!(f, "Clone hook failed: {}", message)
            }
            StackError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for StackError {}

impl From<std::io::Error> for StackError {
    fn from(err: std::io::Error) -> Self {
        StackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for stacking operations
pub type StackResult<T> = Result<T, StackError>;

// Convenience constructors for errors
impl StackError {
    pub fn parse(message: impl Into<String>) -> Self {
        StackError::ParseError {
            message: message.into(),
        }
    }

    pub fn invalid_spec(transform: &'static str, message: impl Into<String>) -> Self {
        StackError::InvalidSpec {
            transform,
            message: message.into(),
        }
    }

    pub fn out_of_range(transform: &'static str, index: usize, row_len: usize) -> Self {
        StackError::OutOfRange {
            transform,
            index,
            row_len,
        }
    }

    pub fn callback(message: impl Into<String>) -> Self {
        StackError::Callback {
            message: message.into(),
        }
    }
}
