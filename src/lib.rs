//! # restack
//!
//! Transforms a standard multi-column HTML table into a vertically stacked
//! label/value layout suitable for narrow viewports.
//!
//! ## Features
//!
//! - **Structure model**: header labels paired positionally with body cells
//! - **Column transforms**: merge, span, move and skip, applied in a fixed
//!   deterministic order
//! - **HTML in, HTML out**: extraction via CSS selectors, serialization as a
//!   clone of the source table
//! - **Collision-free clones**: `id`/`for` (configurable) rewritten with a
//!   suffix so the clone can live next to the origin
//! - **Clone hook**: caller-side post-processing before serialization
//! - **WASM support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Stacking a table
//!
//! ```rust
//! use restack::stack_table;
//!
//! let html = r#"
//!     <table>
//!         <thead><tr><th>Name</th><th>Age</th></tr></thead>
//!         <tbody><tr><td>Ada</td><td>36</td></tr></tbody>
//!     </table>
//! "#;
//!
//! let clone = stack_table(html).unwrap();
//! assert!(clone.contains("<tr><td>Name</td><td>Ada</td></tr>"));
//! assert!(clone.contains("<tr><td>Age</td><td>36</td></tr>"));
//! ```
//!
//! ### Merging and skipping columns
//!
//! ```rust
//! use restack::{stack_table_with_options, MergeSpec, StackOptions};
//!
//! let html = r#"
//!     <table>
//!         <thead><tr><th>First</th><th>Last</th><th>Internal</th></tr></thead>
//!         <tbody><tr><td>Ada </td><td>Lovelace</td><td>x91</td></tr></tbody>
//!     </table>
//! "#;
//!
//! let options = StackOptions {
//!     merge: vec![MergeSpec::new(0, vec![1])],
//!     skip: vec![1],
//!     ..Default::default()
//! };
//!
//! let clone = stack_table_with_options(html, &options).unwrap();
//! assert!(clone.contains("<tr><td>First</td><td>AdaLovelace</td></tr>"));
//! assert!(!clone.contains("x91"));
//! ```

/// Core stacking modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use crate::core::options::{MergeSpec, MoveSpec, StackOptions};
pub use crate::core::pipeline::{
    merge_columns, move_columns, run_pipeline, skip_columns, span_columns,
};
pub use crate::core::render::{
    apply_unique_suffix, insert_clone_after, OutputRow, RowGroup, StackedTable,
};
pub use crate::core::structure::{Cell, HtmlTable, Row, Structure, TableSource};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{StackError, StackResult};

/// Caller-side hook run on the output model before serialization
pub type CloneHook<'a> = &'a dyn Fn(&mut StackedTable) -> StackResult<()>;

/// Stack the first table of `html` with default options, returning the
/// serialized clone.
pub fn stack_table(html: &str) -> StackResult<String> {
    stack_table_with_options(html, &StackOptions::default())
}

/// Stack the first table of `html`, returning the serialized clone.
pub fn stack_table_with_options(html: &str, options: &StackOptions) -> StackResult<String> {
    stack(html, options, None)
}

/// Stack the first table of `html`, running `hook` on the output model
/// before serialization. Hook errors propagate unmodified.
pub fn stack_table_with_hook(
    html: &str,
    options: &StackOptions,
    hook: CloneHook,
) -> StackResult<String> {
    stack(html, options, Some(hook))
}

/// Stack the first table of `html` and return the whole document with the
/// origin CSS class added to that table and the clone inserted immediately
/// after it.
pub fn stack_document(html: &str, options: &StackOptions) -> StackResult<String> {
    let clone = stack_table_with_options(html, options)?;
    insert_clone_after(html, &clone, &options.css_class_origin)
}

/// `stack_document` with a clone hook.
pub fn stack_document_with_hook(
    html: &str,
    options: &StackOptions,
    hook: CloneHook,
) -> StackResult<String> {
    let clone = stack_table_with_hook(html, options, hook)?;
    insert_clone_after(html, &clone, &options.css_class_origin)
}

fn stack(html: &str, options: &StackOptions, hook: Option<CloneHook>) -> StackResult<String> {
    let source = HtmlTable::parse(html)?;
    let mut structure = Structure::extract(&source);

    run_pipeline(&mut structure, options)?;

    let mut stacked = StackedTable::from_structure(structure, source.tag_attributes());

    if let Some(hook) = hook {
        hook(&mut stacked)?;
    }

    stacked.to_html(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = r#"
        <table id="people">
            <thead><tr><th>Name</th><th>Age</th><th>City</th></tr></thead>
            <tbody>
                <tr><td>Ada</td><td>36</td><td>London</td></tr>
                <tr><td>Grace</td><td>85</td><td>Arlington</td></tr>
            </tbody>
        </table>
    "#;

    #[test]
    fn test_stack_table_defaults() {
        let clone = stack_table(PEOPLE).unwrap();
        assert!(clone.contains("<tr><td>Name</td><td>Ada</td></tr>"));
        assert!(clone.contains("<tr><td>City</td><td>Arlington</td></tr>"));
        assert!(clone.contains(r#"id="people-restack-clone""#));
        assert!(clone.contains("restack-clone"));
    }

    #[test]
    fn test_stack_table_merge_and_span() {
        let options = StackOptions {
            merge: vec![MergeSpec::new(1, vec![2])],
            span: vec![1],
            ..Default::default()
        };
        let clone = stack_table_with_options(PEOPLE, &options).unwrap();
        assert!(clone.contains(r#"<tr><td colspan="2">36London</td></tr>"#));
    }

    #[test]
    fn test_stack_table_hook_runs_before_serialization() {
        let hook: fn(&mut StackedTable) -> StackResult<()> = |stacked| {
            stacked
                .attributes
                .push(("data-stacked".to_string(), "yes".to_string()));
            Ok(())
        };
        let clone = stack_table_with_hook(PEOPLE, &StackOptions::default(), &hook).unwrap();
        assert!(clone.contains(r#"data-stacked="yes""#));
    }

    #[test]
    fn test_stack_table_hook_error_propagates() {
        let hook: fn(&mut StackedTable) -> StackResult<()> =
            |_| Err(StackError::callback("refused"));
        let err = stack_table_with_hook(PEOPLE, &StackOptions::default(), &hook).unwrap_err();
        assert!(matches!(err, StackError::Callback { .. }));
    }

    #[test]
    fn test_stack_document_keeps_origin_and_clone_adjacent() {
        let document = stack_document(PEOPLE, &StackOptions::default()).unwrap();
        assert!(document.contains(r#"id="people" class="restack-origin""#));
        let origin_end = document.find("</table>").unwrap();
        let clone_start = document[origin_end..].find("<table").unwrap();
        assert_eq!(&document[origin_end..origin_end + clone_start], "</table>");
    }

    #[test]
    fn test_stack_table_no_table_is_parse_error() {
        let err = stack_table("<p>hello</p>").unwrap_err();
        assert!(matches!(err, StackError::ParseError { .. }));
    }
}
