//! Structure extraction from a tabular source

use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::cell::{Cell, Row};
use crate::utils::error::{StackError, StackResult};

/// An external tabular source: ordered header contents plus ordered body rows
/// of ordered cell contents. Contents are raw HTML strings.
pub trait TableSource {
    fn headers(&self) -> Vec<String>;
    fn body_rows(&self) -> Vec<Vec<String>>;
}

/// The in-memory row/column model the pipeline transforms
///
/// Built once per invocation, mutated in place by the transforms, consumed
/// once by the renderer. Row order is output order and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    /// Original header labels, one per original column. Immutable after
    /// extraction.
    pub headers: Vec<String>,
    /// One row per body row of the source
    pub rows: Vec<Row>,
}

impl Structure {
    /// Build the structure from a tabular source.
    ///
    /// Each body cell is paired positionally with its header; rows longer
    /// than the header list are truncated to the header count, shorter rows
    /// keep their own length. Values are trimmed, labels are kept verbatim.
    pub fn extract(source: &impl TableSource) -> Self {
        let headers = source.headers();

        let rows = source
            .body_rows()
            .into_iter()
            .map(|values| {
                let cells = values
                    .into_iter()
                    .zip(headers.iter())
                    .map(|(value, label)| Cell::pair(label.clone(), value.trim()))
                    .collect();
                Row { cells }
            })
            .collect();

        Structure { headers, rows }
    }

    /// Number of original columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

// =============================================================================
// HTML source
// =============================================================================

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
    static ref HEADER_SELECTOR: Selector = Selector::parse("thead th").unwrap();
    static ref BODY_ROW_SELECTOR: Selector = Selector::parse("tbody tr").unwrap();
    static ref CELL_SELECTOR: Selector = Selector::parse("td").unwrap();
}

/// A `TableSource` backed by the first `<table>` element of an HTML document
/// or fragment
#[derive(Debug, Clone)]
pub struct HtmlTable {
    headers: Vec<String>,
    body: Vec<Vec<String>>,
    tag_attributes: Vec<(String, String)>,
}

impl HtmlTable {
    /// Parse the first table out of `html`.
    ///
    /// Headers come from `thead th` inner HTML, body cells from `tbody tr`
    /// `td` inner HTML. The table element's own attributes are captured so
    /// the renderer can clone them.
    pub fn parse(html: &str) -> StackResult<Self> {
        let document = Html::parse_document(html);

        let table = document
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| StackError::parse("no <table> element found"))?;

        let headers: Vec<String> = table
            .select(&HEADER_SELECTOR)
            .map(|th| th.inner_html())
            .collect();

        if headers.is_empty() {
            return Err(StackError::parse("table has no <thead> header cells"));
        }

        let body: Vec<Vec<String>> = table
            .select(&BODY_ROW_SELECTOR)
            .map(|tr| tr.select(&CELL_SELECTOR).map(|td| td.inner_html()).collect())
            .collect();

        let tag_attributes = table
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Ok(HtmlTable {
            headers,
            body,
            tag_attributes,
        })
    }

    /// Attributes of the source table element, in document order
    pub fn tag_attributes(&self) -> &[(String, String)] {
        &self.tag_attributes
    }
}

impl TableSource for HtmlTable {
    fn headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn body_rows(&self) -> Vec<Vec<String>> {
        self.body.clone()
    }
}
