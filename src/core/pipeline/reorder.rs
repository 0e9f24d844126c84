//! Move transform: relocate columns within their rows

use crate::core::options::MoveSpec;
use crate::core::structure::Structure;
use crate::utils::error::StackResult;

const TRANSFORM: &str = "move";

/// Apply the move specs to every row, in declaration order.
///
/// Each move is one fold step: the cell is removed at `from` and reinserted
/// at `to` in the already-mutated index space, so overlapping moves depend
/// on declaration order. `to` may equal the shortened row's length, which
/// appends.
pub fn move_columns(structure: &mut Structure, specs: &[MoveSpec]) -> StackResult<()> {
    for spec in specs {
        for row in &mut structure.rows {
            let cell = row.take(TRANSFORM, spec.from)?;
            if let Err(err) = row.put(TRANSFORM, spec.to, cell.clone()) {
                // Reinsert at the old position so the row stays coherent in
                // later error context.
                let _ = row.put(TRANSFORM, spec.from.min(row.len()), cell);
                return Err(err);
            }
        }
    }

    Ok(())
}
