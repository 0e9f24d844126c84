//! Column transform pipeline
//!
//! Four independent transforms applied to the structure in a fixed order:
//!
//! ```text
//! merge -> span -> move -> skip
//! ```
//!
//! The order is part of the contract: span indices are expressed in
//! post-merge numbering, and skip indices in post-merge, post-move
//! numbering. Each transform recomputes indices against the row as the
//! previous one left it, through the checked splice primitives on `Row`, so
//! a spec that addresses a column that no longer exists fails instead of
//! silently corrupting the row shape.

mod merge;
mod reorder;
mod skip;
mod span;


pub use merge::merge_columns;
pub use reorder::move_columns;
pub use skip::skip_columns;
pub use span::span_columns;

use crate::core::options::StackOptions;
use crate::core::structure::Structure;
use crate::utils::error::StackResult;

/// Validate the specs against the original column count, then run the four
/// transforms in their fixed order.
pub fn run_pipeline(structure: &mut Structure, options: &StackOptions) -> StackResult<()> {
    options.validate(structure.column_count())?;

    merge_columns(structure, &options.merge)?;

    if !options.span.is_empty() {
        span_columns(structure, &options.span)?;
    }

    move_columns(structure, &options.moves)?;

    if !options.skip.is_empty() {
        skip_columns(structure, &options.skip);
    }

    Ok(())
}
