//! Regression tests for the structure model and HTML extraction

use super::*;

struct FakeSource {
    headers: Vec<String>,
    body: Vec<Vec<String>>,
}

impl TableSource for FakeSource {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn body_rows(&self) -> Vec<Vec<String>> {
        self.body.clone()
    }
}

fn source(headers: &[&str], body: &[&[&str]]) -> FakeSource {
    FakeSource {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        body: body
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn test_extract_pairs_labels_positionally() {
    let structure = Structure::extract(&source(&["A", "B"], &[&["1", "2"], &["3", "4"]]));

    assert_eq!(structure.column_count(), 2);
    assert_eq!(structure.rows.len(), 2);
    assert_eq!(structure.rows[0].cells[0], Cell::pair("A", "1"));
    assert_eq!(structure.rows[0].cells[1], Cell::pair("B", "2"));
    assert_eq!(structure.rows[1].cells[0], Cell::pair("A", "3"));
}

#[test]
fn test_extract_trims_values_keeps_labels() {
    let structure = Structure::extract(&source(&[" A "], &[&["  1  "]]));

    assert_eq!(structure.rows[0].cells[0], Cell::pair(" A ", "1"));
}

#[test]
fn test_extract_truncates_long_rows_to_header_count() {
    let structure = Structure::extract(&source(&["A", "B"], &[&["1", "2", "3"]]));

    assert_eq!(structure.rows[0].len(), 2);
}

#[test]
fn test_extract_keeps_short_rows_short() {
    let structure = Structure::extract(&source(&["A", "B", "C"], &[&["1"]]));

    assert_eq!(structure.rows[0].len(), 1);
    assert_eq!(structure.rows[0].cells[0], Cell::pair("A", "1"));
}

#[test]
fn test_row_take_out_of_range() {
    let mut row = Row::from(vec![Cell::pair("A", "1")]);
    let err = row.take("merge", 3).unwrap_err();
    assert!(err.to_string().contains("index 3"));
    // The row is untouched
    assert_eq!(row.len(), 1);
}

#[test]
fn test_row_put_appends_at_len() {
    let mut row = Row::from(vec![Cell::pair("A", "1")]);
    row.put("move", 1, Cell::pair("B", "2")).unwrap();
    assert_eq!(row.len(), 2);
    assert!(row.put("move", 5, Cell::pair("C", "3")).is_err());
}

#[test]
fn test_cell_push_value_concatenates_without_separator() {
    let mut cell = Cell::pair("A", "b");
    cell.push_value("cd");
    assert_eq!(cell.value(), "bcd");
}

#[test]
fn test_cell_into_full_drops_label() {
    let cell = Cell::pair("A", "1").into_full();
    assert_eq!(cell, Cell::full("1"));
    assert!(cell.is_full());
    assert_eq!(cell.label(), None);
    // Already-full cells pass through unchanged
    assert_eq!(Cell::full("x").into_full(), Cell::full("x"));
}

#[test]
fn test_html_table_parse() {
    let html = r#"
        <table id="people" class="data">
            <thead><tr><th>Name</th><th>Age</th></tr></thead>
            <tbody>
                <tr><td> Ada </td><td>36</td></tr>
                <tr><td>Grace</td><td>85</td></tr>
            </tbody>
        </table>
    "#;

    let table = HtmlTable::parse(html).unwrap();
    let structure = Structure::extract(&table);

    assert_eq!(structure.headers, vec!["Name", "Age"]);
    assert_eq!(structure.rows.len(), 2);
    assert_eq!(structure.rows[0].cells[0], Cell::pair("Name", "Ada"));
    assert!(table
        .tag_attributes()
        .contains(&("id".to_string(), "people".to_string())));
}

#[test]
fn test_html_table_keeps_cell_markup() {
    let html = r##"
        <table>
            <thead><tr><th><b>Name</b></th></tr></thead>
            <tbody><tr><td><a href="#x">Ada</a></td></tr></tbody>
        </table>
    "##;

    let table = HtmlTable::parse(html).unwrap();
    assert_eq!(table.headers(), vec!["<b>Name</b>"]);
    assert_eq!(table.body_rows()[0][0].trim(), r##"<a href="#x">Ada</a>"##);
}

#[test]
fn test_html_table_missing_table() {
    let err = HtmlTable::parse("<div>nothing here</div>").unwrap_err();
    assert!(err.to_string().contains("no <table>"));
}

#[test]
fn test_html_table_missing_headers() {
    let err = HtmlTable::parse("<table><tbody><tr><td>1</td></tr></tbody></table>").unwrap_err();
    assert!(err.to_string().contains("header"));
}
