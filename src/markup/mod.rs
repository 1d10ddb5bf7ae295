//! Boundary to the markup parser.
//!
//! The converter only needs a read-only view of a parsed node: its kind, its
//! raw text value, its children in document order and its raw serialization.
//! [`MarkupSource`] describes that view. It is implemented for
//! `roxmltree::Node`, which does the actual parsing, and for the owned
//! [`MarkupNode`], which lets callers hand over trees built by other parsers.

mod escape;
mod node;
mod xml;

use crate::{ConvertOptions, Result};

pub use escape::{escape_xml_attr, escape_xml_text};
pub use node::MarkupNode;

/// Kinds of node a markup tree may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Document,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// Read-only view of a parsed markup node.
pub trait MarkupSource: Sized {
    /// Iterator over child nodes in document order.
    type Children: Iterator<Item = Self>;

    fn kind(&self) -> MarkupKind;

    /// Raw text value of the node. `None` for elements and documents, which
    /// only have child content.
    fn text_value(&self) -> Option<&str>;

    fn child_nodes(&self) -> Self::Children;

    /// Full textual representation of the node: opening tag, descendants and
    /// closing tag for elements.
    fn outer_markup(&self) -> String;

    /// Start of the raw serialization, up to and including the first tag.
    /// Must yield the same leading tag as `outer_markup` without walking the
    /// node's descendants.
    fn leading_markup(&self) -> String {
        self.outer_markup()
    }

    /// Text node made up entirely of whitespace.
    fn is_whitespace(&self) -> bool {
        self.kind() == MarkupKind::Text
            && self.text_value().is_some_and(|t| t.trim().is_empty())
    }
}

/// Parses `text` into a document, honouring the parser-related options.
pub fn parse_document<'input>(
    text: &'input str,
    options: &ConvertOptions,
) -> Result<roxmltree::Document<'input>> {
    let mut parsing = roxmltree::ParsingOptions::default();
    parsing.allow_dtd = options.allow_dtd;
    Ok(roxmltree::Document::parse_with_options(text, parsing)?)
}
