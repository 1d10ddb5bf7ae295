//! Value selection: the single string a source node carries.

use super::tag::extract_leading_tag_name;
use crate::markup::MarkupSource;

/// Outcome of value selection for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedValue {
    /// Trimmed text, or the leading tag of a container node.
    Value(String),
    /// The node has no text and its markup does not begin with a tag.
    MissingTag { markup: String },
}

/// Chooses the value for `source`.
///
/// Nodes with a text value yield that text with surrounding whitespace
/// trimmed. Other nodes fall back to the leading tag of their raw markup.
pub fn select_value<N: MarkupSource>(source: &N) -> SelectedValue {
    if let Some(text) = source.text_value() {
        return SelectedValue::Value(text.trim().to_string());
    }

    let markup = source.leading_markup();
    match extract_leading_tag_name(&markup) {
        Some(tag) => SelectedValue::Value(tag.to_string()),
        None => SelectedValue::MissingTag { markup },
    }
}
