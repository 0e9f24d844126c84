//! Stacked output model
//!
//! A pure mapping of the final structure: one row group per source row, one
//! output row per cell. No transformation logic lives here.

use crate::core::structure::{Cell, Structure};

/// One output row of the stacked layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRow {
    /// Renders as a label cell followed by a value cell
    Pair { label: String, value: String },
    /// Renders as a single cell spanning both output columns
    Full { value: String },
}

impl OutputRow {
    pub fn value(&self) -> &str {
        match self {
            OutputRow::Pair { value, .. } | OutputRow::Full { value } => value,
        }
    }

    /// Whether this row still carries a label
    pub fn has_label(&self) -> bool {
        matches!(self, OutputRow::Pair { .. })
    }
}

/// One group of stacked rows, derived from one source body row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowGroup {
    pub rows: Vec<OutputRow>,
}

/// The rendered output structure, ready for serialization and attachment
///
/// Carries the source table element's attributes so the serialized clone
/// mirrors the original tag. Group order equals source row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedTable {
    /// Attributes of the source table element, in document order
    pub attributes: Vec<(String, String)>,
    /// One group per source body row
    pub groups: Vec<RowGroup>,
}

impl StackedTable {
    /// Consume the final structure into the output model.
    pub fn from_structure(structure: Structure, attributes: &[(String, String)]) -> Self {
        let groups = structure
            .rows
            .into_iter()
            .map(|row| {
                let rows = row
                    .cells
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Pair { label, value } => OutputRow::Pair { label, value },
                        Cell::Full { value } => OutputRow::Full { value },
                    })
                    .collect();
                RowGroup { rows }
            })
            .collect();

        StackedTable {
            attributes: attributes.to_vec(),
            groups,
        }
    }
}
