//! Table structure model and extraction
//!
//! The structure is the canonical row/column model the pipeline operates on:
//!
//! ```text
//! Table source -> Structure -> transform pipeline -> renderer
//! ```
//!
//! Extraction pairs each body cell positionally with its header label. After
//! that point the header list is only documentation; the labels live inside
//! the cells and travel with them through merge/span/move/skip.

mod cell;
mod extract;

#[cfg(test)]
mod tests;

// Re-export public API
pub use cell::{Cell, Row};
pub use extract::{HtmlTable, Structure, TableSource};
