//! Skip transform: drop columns from the output

use crate::core::structure::Structure;

/// Remove the cells whose current index is in the skip set.
///
/// One filtering pass per row, re-indexing as it goes - never iterative
/// removal, which would shift indices mid-walk. An index beyond the current
/// row length matches nothing and is a no-op.
pub fn skip_columns(structure: &mut Structure, skip: &[usize]) {
    for row in &mut structure.rows {
        let cells = std::mem::take(&mut row.cells);
        row.cells = cells
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !skip.contains(index))
            .map(|(_, cell)| cell)
            .collect();
    }
}
