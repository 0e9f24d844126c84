//! Span transform: turn label/value cells into full-width cells

use crate::core::structure::{Cell, Structure};
use crate::utils::error::StackResult;

const TRANSFORM: &str = "span";

/// Replace each spanned cell with a value-only cell, in every row.
///
/// Indices address the post-merge row. Spanning an already-full cell is a
/// no-op.
pub fn span_columns(structure: &mut Structure, span: &[usize]) -> StackResult<()> {
    for row in &mut structure.rows {
        for &index in span {
            let slot = row.cell_mut(TRANSFORM, index)?;
            let value = slot.value().to_string();
            *slot = Cell::full(value);
        }
    }

    Ok(())
}
