//! HTML serialization of the stacked output
//!
//! Cell contents are raw HTML carried over from the source and are emitted
//! verbatim; only attribute values written by the serializer itself are
//! escaped.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt::Write;

use super::stacked::{OutputRow, StackedTable};
use crate::core::options::StackOptions;
use crate::utils::error::{StackError, StackResult};

lazy_static! {
    /// First table element of a document, opening tag through closing tag
    static ref TABLE_BLOCK: Regex = Regex::new(r"(?is)<table\b.*?</table\s*>").unwrap();
    /// Class attribute inside an opening tag
    static ref CLASS_ATTR: Regex = Regex::new(r#"(?i)\bclass\s*=\s*"([^"]*)""#).unwrap();
}

impl StackedTable {
    /// Serialize the clone: the source table's tag attributes with the clone
    /// CSS class appended, one `<tbody>` per row group, a label/value `<tr>`
    /// per pair row and a single `colspan="2"` cell per full row. Attributes
    /// named in `options.unique_attributes` get the suffix appended to their
    /// values everywhere in the clone, the table tag included.
    pub fn to_html(&self, options: &StackOptions) -> StackResult<String> {
        let mut output = String::new();

        output.push_str("<table");
        for (name, value) in self.attributes_with_class(&options.css_class_clone) {
            let _ = write!(output, " {}=\"{}\"", name, escape_attribute(&value));
        }
        output.push_str(">\n");

        for group in &self.groups {
            output.push_str("<tbody>\n");

            for row in &group.rows {
                match row {
                    OutputRow::Pair { label, value } => {
                        let _ = writeln!(output, "<tr><td>{}</td><td>{}</td></tr>", label, value);
                    }
                    OutputRow::Full { value } => {
                        let _ = writeln!(output, "<tr><td colspan=\"2\">{}</td></tr>", value);
                    }
                }
            }

            output.push_str("</tbody>\n");
        }

        output.push_str("</table>");

        if options.unique_attributes.is_empty() {
            return Ok(output);
        }

        apply_unique_suffix(
            &output,
            &options.unique_attributes,
            &options.attribute_suffix,
        )
    }

    /// The source attributes with `class` merged with the clone CSS class
    fn attributes_with_class(&self, clone_class: &str) -> Vec<(String, String)> {
        let mut attributes = self.attributes.clone();

        match attributes.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(clone_class);
            }
            None => attributes.push(("class".to_string(), clone_class.to_string())),
        }

        attributes
    }
}

/// Append `suffix` to the value of every attribute named in `attributes`,
/// anywhere in `html`.
pub fn apply_unique_suffix(
    html: &str,
    attributes: &[String],
    suffix: &str,
) -> StackResult<String> {
    if attributes.is_empty() {
        return Ok(html.to_string());
    }

    let names = attributes
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    // Anchor on the character before the name: `\b` alone also matches after
    // a hyphen and would rewrite lookalikes such as data-id.
    let pattern =
        Regex::new(&format!(r#"(?i)([\s<])({})\s*=\s*"([^"]*)""#, names)).map_err(|e| {
            StackError::invalid_spec("unique-attributes", format!("bad attribute name: {}", e))
        })?;

    Ok(pattern
        .replace_all(html, |caps: &Captures| {
            format!("{}{}=\"{}{}\"", &caps[1], &caps[2], &caps[3], suffix)
        })
        .into_owned())
}

/// Splice the serialized clone into `document`, immediately after the first
/// table element, adding the origin CSS class to that table's opening tag.
pub fn insert_clone_after(
    document: &str,
    clone_html: &str,
    origin_class: &str,
) -> StackResult<String> {
    let matched = TABLE_BLOCK
        .find(document)
        .ok_or_else(|| StackError::parse("no <table> element found"))?;

    let origin = add_class_to_opening_tag(matched.as_str(), origin_class);

    Ok(format!(
        "{}{}{}{}",
        &document[..matched.start()],
        origin,
        clone_html,
        &document[matched.end()..]
    ))
}

fn add_class_to_opening_tag(table_html: &str, class: &str) -> String {
    let Some(tag_end) = table_html.find('>') else {
        return table_html.to_string();
    };
    let (open, rest) = table_html.split_at(tag_end);

    if CLASS_ATTR.is_match(open) {
        let open = CLASS_ATTR.replace(open, |caps: &Captures| {
            format!("class=\"{} {}\"", &caps[1], class)
        });
        format!("{}{}", open, rest)
    } else {
        format!("{} class=\"{}\"{}", open, class, rest)
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
