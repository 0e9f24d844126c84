//! Core stacking modules
//!
//! This module contains the stacking engine:
//! - `structure`: the row/column model and its extraction
//! - `pipeline`: the merge/span/move/skip column transforms
//! - `render`: the stacked output model and HTML serialization
//! - `options`: the configuration surface

pub mod options;
pub mod pipeline;
pub mod render;
pub mod structure;

// Re-export main types and functions
pub use options::{MergeSpec, MoveSpec, StackOptions};
pub use pipeline::{merge_columns, move_columns, run_pipeline, skip_columns, span_columns};
pub use render::{insert_clone_after, OutputRow, RowGroup, StackedTable};
pub use structure::{Cell, HtmlTable, Row, Structure, TableSource};
