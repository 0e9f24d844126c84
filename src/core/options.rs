//! Stacking options
//!
//! Column specs are ordered lists of explicit pairs, and declaration order
//! is the order they are applied in. This keeps the pipeline deterministic
//! regardless of how the host built the configuration.

use crate::utils::error::{StackError, StackResult};

// =============================================================================
// Column specs
// =============================================================================

/// One merge operation: fold the values of `sources` into column `target`.
///
/// All indices in one spec address the row as it stands when the spec is
/// applied: the source values are appended in list order, then the source
/// cells are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeSpec {
    /// Column that receives the concatenated values
    pub target: usize,
    /// Columns whose values are appended to the target, in order
    pub sources: Vec<usize>,
}

impl MergeSpec {
    pub fn new(target: usize, sources: Vec<usize>) -> Self {
        Self { target, sources }
    }
}

/// One move operation: remove the cell at `from` and reinsert it at `to`.
///
/// Both indices address the row as left by the previous operation, so a list
/// of moves is a fold, not a parallel permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSpec {
    /// Current index of the column to relocate
    pub from: usize,
    /// Position to reinsert it at
    pub to: usize,
}

impl MoveSpec {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Options for stacking a table
#[derive(Debug, Clone)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct StackOptions {
    /// Columns to merge into others, applied first and in declaration order.
    /// Example: `[MergeSpec { target: 1, sources: vec![2, 3] }]` makes column 1
    /// hold the values of columns 1, 2 and 3.
    /// Default: empty
    pub merge: Vec<MergeSpec>,

    /// Columns to render as a single full-width cell instead of a label/value
    /// pair. Indices address the post-merge row.
    /// Default: empty
    pub span: Vec<usize>,

    /// Columns to relocate, applied after span and in declaration order.
    /// Example: `[MoveSpec { from: 3, to: 0 }]` puts column 3 first.
    /// Default: empty
    pub moves: Vec<MoveSpec>,

    /// Columns to drop from the output, evaluated against the row as left by
    /// merge and move.
    /// Default: empty
    pub skip: Vec<usize>,

    /// CSS class added to the source table when splicing into a document
    /// Default: "restack-origin"
    pub css_class_origin: String,

    /// CSS class added to the generated clone
    /// Default: "restack-clone"
    pub css_class_clone: String,

    /// Attributes whose values must stay unique between origin and clone.
    /// Example: with `["id"]`, `<div id="test">` becomes
    /// `<div id="test-restack-clone">` in the clone.
    /// Default: ["id", "for"]
    pub unique_attributes: Vec<String>,

    /// Suffix appended to rewritten attribute values
    /// Default: "-restack-clone"
    pub attribute_suffix: String,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            merge: Vec::new(),
            span: Vec::new(),
            moves: Vec::new(),
            skip: Vec::new(),
            css_class_origin: "restack-origin".to_string(),
            css_class_clone: "restack-clone".to_string(),
            unique_attributes: vec!["id".to_string(), "for".to_string()],
            attribute_suffix: "-restack-clone".to_string(),
        }
    }
}

impl StackOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object (field names match the struct fields)
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> StackResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| StackError::parse(format!("invalid options JSON: {}", e)))
    }

    /// Reject statically malformed column specs.
    ///
    /// `column_count` is the original header width. Index shifts that only
    /// show up while the pipeline runs are caught later, at the point of
    /// access, as `OutOfRange`.
    pub fn validate(&self, column_count: usize) -> StackResult<()> {
        for spec in &self.merge {
            if spec.target >= column_count {
                return Err(StackError::invalid_spec(
                    "merge",
                    format!(
                        "target {} exceeds table width {}",
                        spec.target, column_count
                    ),
                ));
            }
            let mut seen = Vec::with_capacity(spec.sources.len());
            for &source in &spec.sources {
                if source >= column_count {
                    return Err(StackError::invalid_spec(
                        "merge",
                        format!("source {} exceeds table width {}", source, column_count),
                    ));
                }
                if source == spec.target {
                    return Err(StackError::invalid_spec(
                        "merge",
                        format!("target {} listed among its own sources", spec.target),
                    ));
                }
                if seen.contains(&source) {
                    return Err(StackError::invalid_spec(
                        "merge",
                        format!("source {} listed twice", source),
                    ));
                }
                seen.push(source);
            }
        }

        for &index in &self.span {
            if index >= column_count {
                return Err(StackError::invalid_spec(
                    "span",
                    format!("index {} exceeds table width {}", index, column_count),
                ));
            }
        }

        for spec in &self.moves {
            if spec.from >= column_count {
                return Err(StackError::invalid_spec(
                    "move",
                    format!("source {} exceeds table width {}", spec.from, column_count),
                ));
            }
            if spec.to >= column_count {
                return Err(StackError::invalid_spec(
                    "move",
                    format!(
                        "destination {} exceeds table width {}",
                        spec.to, column_count
                    ),
                ));
            }
        }

        for &index in &self.skip {
            if index >= column_count {
                return Err(StackError::invalid_spec(
                    "skip",
                    format!("index {} exceeds table width {}", index, column_count),
                ));
            }
        }

        Ok(())
    }
}
