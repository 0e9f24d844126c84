//! Integration tests for Restack end-to-end stacking

use restack::{
    stack_document, stack_table, stack_table_with_hook, stack_table_with_options, MergeSpec,
    MoveSpec, StackError, StackOptions, StackedTable,
};

fn table(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<table id=\"source\"><thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

// ============================================================================
// Identity rendering
// ============================================================================

mod identity {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_renders_all_pairs_in_order() {
        let html = table(&["A", "B", "C"], &[&["1", "2", "3"]]);
        let clone = stack_table(&html).unwrap();

        let expected_rows = [
            "<tr><td>A</td><td>1</td></tr>",
            "<tr><td>B</td><td>2</td></tr>",
            "<tr><td>C</td><td>3</td></tr>",
        ];
        for row in expected_rows {
            assert!(clone.contains(row), "missing {} in {}", row, clone);
        }

        // Labels appear in header order
        let a = clone.find("<td>A</td>").unwrap();
        let b = clone.find("<td>B</td>").unwrap();
        let c = clone.find("<td>C</td>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_one_group_per_body_row() {
        let html = table(
            &["A", "B"],
            &[&["1", "2"], &["3", "4"], &["5", "6"]],
        );
        let clone = stack_table(&html).unwrap();

        assert_eq!(clone.matches("<tbody>").count(), 3);
        // 3 groups x 2 columns = 6 output rows
        assert_eq!(clone.matches("<tr>").count(), 6);
    }

    #[test]
    fn test_deterministic_output() {
        let html = table(&["A", "B", "C", "D"], &[&["1", "2", "3", "4"]]);
        let options = StackOptions {
            merge: vec![MergeSpec::new(0, vec![1])],
            span: vec![0],
            moves: vec![MoveSpec::new(2, 0)],
            skip: vec![1],
            ..Default::default()
        };

        let first = stack_table_with_options(&html, &options).unwrap();
        let second = stack_table_with_options(&html, &options).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Column transforms
// ============================================================================

mod transforms {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_concatenates_and_shrinks() {
        let html = table(&["W", "X", "Y", "Z"], &[&["a", "b", "c", "d"]]);
        let options = StackOptions {
            merge: vec![MergeSpec::new(1, vec![2, 3])],
            ..Default::default()
        };
        let clone = stack_table_with_options(&html, &options).unwrap();

        assert!(clone.contains("<tr><td>X</td><td>bcd</td></tr>"));
        assert_eq!(clone.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_move_to_front() {
        let html = table(&["A", "B", "C", "D"], &[&["1", "2", "3", "4"]]);
        let options = StackOptions {
            moves: vec![MoveSpec::new(3, 0)],
            ..Default::default()
        };
        let clone = stack_table_with_options(&html, &options).unwrap();

        let d = clone.find("<td>D</td>").unwrap();
        let a = clone.find("<td>A</td>").unwrap();
        assert!(d < a);
    }

    #[test]
    fn test_skip_drops_column_keeps_order() {
        let html = table(&["A", "B", "C"], &[&["1", "2", "3"]]);
        let options = StackOptions {
            skip: vec![1],
            ..Default::default()
        };
        let clone = stack_table_with_options(&html, &options).unwrap();

        assert!(!clone.contains("<td>B</td>"));
        assert!(clone.find("<td>A</td>").unwrap() < clone.find("<td>C</td>").unwrap());
        assert_eq!(clone.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_span_emits_full_width_cell() {
        let html = table(&["A", "B", "C"], &[&["1", "2", "3"]]);
        let options = StackOptions {
            span: vec![2],
            ..Default::default()
        };
        let clone = stack_table_with_options(&html, &options).unwrap();

        assert!(clone.contains("<tr><td colspan=\"2\">3</td></tr>"));
        assert!(!clone.contains("<td>C</td>"));
    }
}

// ============================================================================
// Shape and error handling
// ============================================================================

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_body_rows_truncate_to_header_count() {
        let html = table(&["A", "B"], &[&["1", "2", "3"]]);
        let clone = stack_table(&html).unwrap();

        assert_eq!(clone.matches("<tr>").count(), 2);
        assert!(!clone.contains("<td>3</td>"));
    }

    #[test]
    fn test_consumed_merge_source_is_out_of_range() {
        let html = table(&["A", "B"], &[&["1", "2"]]);
        let options = StackOptions {
            merge: vec![MergeSpec::new(0, vec![1]), MergeSpec::new(0, vec![1])],
            ..Default::default()
        };
        let err = stack_table_with_options(&html, &options).unwrap_err();

        assert!(matches!(err, StackError::OutOfRange { .. }));
    }

    #[test]
    fn test_spec_beyond_table_width_is_invalid() {
        let html = table(&["A", "B"], &[&["1", "2"]]);
        let options = StackOptions {
            span: vec![7],
            ..Default::default()
        };
        let err = stack_table_with_options(&html, &options).unwrap_err();

        assert!(matches!(err, StackError::InvalidSpec { .. }));
    }

    #[test]
    fn test_hook_error_propagates() {
        let html = table(&["A"], &[&["1"]]);
        let hook: fn(&mut StackedTable) -> restack::StackResult<()> =
            |_| Err(StackError::callback("rejected"));
        let err = stack_table_with_hook(&html, &StackOptions::default(), &hook).unwrap_err();

        assert!(matches!(err, StackError::Callback { .. }));
    }

    #[test]
    fn test_missing_table_is_parse_error() {
        let err = stack_table("<p>no table</p>").unwrap_err();
        assert!(matches!(err, StackError::ParseError { .. }));
    }
}

// ============================================================================
// Clone output
// ============================================================================

mod clone_output {
    use super::*;

    #[test]
    fn test_clone_class_and_unique_id() {
        let html = table(&["A"], &[&["1"]]);
        let clone = stack_table(&html).unwrap();

        assert!(clone.contains("restack-clone"));
        assert!(clone.contains(r#"id="source-restack-clone""#));
    }

    #[test]
    fn test_unique_attributes_inside_cells() {
        let html = table(
            &[r#"<label for="name">Name</label>"#],
            &[&[r#"<input id="name">"#]],
        );
        let clone = stack_table(&html).unwrap();

        assert!(clone.contains(r#"for="name-restack-clone""#));
        assert!(clone.contains(r#"id="name-restack-clone""#));
    }

    #[test]
    fn test_hyphenated_attribute_lookalikes_untouched() {
        let html = table(&["A"], &[&[r#"<span data-id="keep">1</span>"#]]);
        let clone = stack_table(&html).unwrap();

        assert!(clone.contains(r#"data-id="keep""#));
        assert!(clone.contains(r#"id="source-restack-clone""#));
    }

    #[test]
    fn test_hook_can_edit_output_model() {
        let html = table(&["A"], &[&["1"]]);
        let hook: fn(&mut StackedTable) -> restack::StackResult<()> = |stacked| {
            stacked.groups.clear();
            Ok(())
        };
        let clone = stack_table_with_hook(&html, &StackOptions::default(), &hook).unwrap();

        assert!(!clone.contains("<tbody>"));
    }

    #[test]
    fn test_document_splices_clone_after_origin() {
        let html = format!("<html><body>{}</body></html>", table(&["A"], &[&["1"]]));
        let document = stack_document(&html, &StackOptions::default()).unwrap();

        assert!(document.contains(r#"id="source" class="restack-origin""#));
        let origin_end = document.find("</table>").unwrap() + "</table>".len();
        assert!(document[origin_end..].trim_start().starts_with("<table"));
        // Original body content is still present
        assert!(document.contains("<td>1</td>"));
    }
}

// ============================================================================
// Config loading
// ============================================================================

#[cfg(feature = "config")]
mod config {
    use super::*;

    #[test]
    fn test_options_from_json_roundtrip_through_stack() {
        let html = table(&["A", "B", "C"], &[&["1", "2", "3"]]);
        let options = StackOptions::from_json(
            r#"{"merge": [{"target": 0, "sources": [1]}], "skip": [1]}"#,
        )
        .unwrap();

        let clone = stack_table_with_options(&html, &options).unwrap();
        assert!(clone.contains("<tr><td>A</td><td>12</td></tr>"));
        assert!(!clone.contains("<td>3</td>"));
    }
}
