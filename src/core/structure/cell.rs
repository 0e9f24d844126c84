//! Cell and row types for the table structure model

use crate::utils::error::{StackError, StackResult};

/// A single cell of the stacked structure
///
/// A cell is one of two variants: a label/value pair that renders as two
/// stacked output cells, or a value-only cell that renders as one full-width
/// output cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Header label plus the body cell's content
    Pair { label: String, value: String },
    /// Content only, rendered full-width (a spanned column)
    Full { value: String },
}

impl Cell {
    /// Create a label/value pair cell
    pub fn pair(label: impl Into<String>, value: impl Into<String>) -> Self {
        Cell::Pair {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a value-only full-width cell
    pub fn full(value: impl Into<String>) -> Self {
        Cell::Full {
            value: value.into(),
        }
    }

    /// The cell's value, whichever variant it is
    pub fn value(&self) -> &str {
        match self {
            Cell::Pair { value, .. } | Cell::Full { value } => value,
        }
    }

    /// The cell's label, if it still has one
    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Pair { label, .. } => Some(label),
            Cell::Full { .. } => None,
        }
    }

    /// Whether this cell renders full-width
    pub fn is_full(&self) -> bool {
        matches!(self, Cell::Full { .. })
    }

    /// Append another cell's value to this cell's value (plain concatenation,
    /// no separator)
    pub fn push_value(&mut self, extra: &str) {
        match self {
            Cell::Pair { value, .. } | Cell::Full { value } => value.push_str(extra),
        }
    }

    /// Drop the label slot, keeping only the value
    pub fn into_full(self) -> Self {
        match self {
            Cell::Pair { value, .. } => Cell::Full { value },
            full @ Cell::Full { .. } => full,
        }
    }
}

/// One body row of the structure
///
/// Column positions are not stable across transformations; every positional
/// edit goes through the checked `take`/`put` primitives so an index that no
/// longer exists surfaces as an error instead of corrupting the row shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Row { cells: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove and return the cell at `index`, shifting later cells left
    pub fn take(&mut self, transform: &'static str, index: usize) -> StackResult<Cell> {
        if index >= self.cells.len() {
            return Err(StackError::out_of_range(transform, index, self.cells.len()));
        }
        Ok(self.cells.remove(index))
    }

    /// Insert `cell` at `index`, shifting later cells right.
    ///
    /// `index == len` appends, matching splice semantics at the boundary.
    pub fn put(&mut self, transform: &'static str, index: usize, cell: Cell) -> StackResult<()> {
        if index > self.cells.len() {
            return Err(StackError::out_of_range(transform, index, self.cells.len()));
        }
        self.cells.insert(index, cell);
        Ok(())
    }

    /// Access the cell at `index`
    pub fn cell(&self, transform: &'static str, index: usize) -> StackResult<&Cell> {
        self.cells
            .get(index)
            .ok_or_else(|| StackError::out_of_range(transform, index, self.cells.len()))
    }

    /// Mutable access to the cell at `index`
    pub fn cell_mut(&mut self, transform: &'static str, index: usize) -> StackResult<&mut Cell> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or_else(|| StackError::out_of_range(transform, index, len))
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}
