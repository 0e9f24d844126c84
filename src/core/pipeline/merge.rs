//! Merge transform: fold source columns into a target column

use crate::core::options::MergeSpec;
use crate::core::structure::Structure;
use crate::utils::error::StackResult;

const TRANSFORM: &str = "merge";

/// Apply the merge specs to every row, in declaration order.
///
/// Within one spec entry, target and source indices all address the row as
/// it stands when the entry starts: the source values are read and appended
/// to the target in list order first, and only then are the source cells
/// removed (highest index first, so the remaining removals stay valid).
/// Across entries the indices address the already-shrunk row, which makes
/// declaration order externally observable - a source consumed by an earlier
/// entry no longer exists and fails the bounds check.
pub fn merge_columns(structure: &mut Structure, specs: &[MergeSpec]) -> StackResult<()> {
    for spec in specs {
        for row in &mut structure.rows {
            let mut appended = String::new();
            for &source in &spec.sources {
                appended.push_str(row.cell(TRANSFORM, source)?.value());
            }
            row.cell_mut(TRANSFORM, spec.target)?.push_value(&appended);

            let mut removals = spec.sources.clone();
            removals.sort_unstable_by(|a, b| b.cmp(a));
            for source in removals {
                row.take(TRANSFORM, source)?;
            }
        }
    }

    Ok(())
}
