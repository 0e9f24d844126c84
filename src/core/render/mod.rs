//! Rendering of the final structure into the stacked output
//!
//! Two halves: `stacked` maps the structure into the output model, `html`
//! serializes that model and handles the document-splicing conveniences.

mod html;
mod stacked;


pub use html::{apply_unique_suffix, insert_clone_after};
pub use stacked::{OutputRow, RowGroup, StackedTable};
