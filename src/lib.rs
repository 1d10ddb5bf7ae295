//! # xml-datatree
//!
//! Reads XML into a simplified tree of plain string values.
//!
//! Every node of the simplified tree holds one string: text nodes carry their
//! trimmed text, and elements carry the interior of their leading tag
//! (`<item id="3">` becomes `item id="3"`). Attributes, namespaces and node
//! kinds are not kept.
//!
//! ## Example
//!
//! ```
//! use xml_datatree::TreeConverter;
//!
//! let converter = TreeConverter::with_defaults();
//! let conversion = converter
//!     .convert_str("<root><name>Alice</name><empty/></root>")
//!     .unwrap();
//!
//! let root = conversion.tree.root();
//! assert_eq!(root.value(), Some("root"));
//! assert_eq!(root.children()[0].children()[0].value(), Some("Alice"));
//! assert_eq!(root.children()[1].value(), Some("empty"));
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod markup;
pub mod render;

pub use converter::{
    begins_with_tag, convert, extract_leading_tag_name, Conversion, Diagnostic, DiagnosticKind,
    TreeConverter,
};
pub use crate::core::{SimplifiedNode, SimplifiedTree};
pub use error::{Error, Result};
pub use markup::{MarkupKind, MarkupNode, MarkupSource};
pub use render::{JsonRenderer, OutlineRenderer, Renderer};

/// Default limit on how deeply nested a document may be.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for XML to simplified tree conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Whether to keep text nodes made up only of whitespace.
    pub preserve_whitespace: bool,
    /// Whether to drop comment nodes.
    pub ignore_comments: bool,
    /// Whether to drop processing instructions.
    pub ignore_processing_instructions: bool,
    /// Maximum nesting depth, root included. `None` disables the check, and
    /// with it any bound on recursion while converting, measuring or dropping
    /// the resulting tree.
    pub max_depth: Option<usize>,
    /// Whether the parser accepts a DTD.
    pub allow_dtd: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            preserve_whitespace: false,
            ignore_comments: false,
            ignore_processing_instructions: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_dtd: false,
        }
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Converts an XML string to the JSON form of its simplified tree.
    #[pyfunction]
    fn convert_xml(xml: String) -> PyResult<String> {
        let converter = TreeConverter::with_defaults();
        converter
            .convert_str(&xml)
            .and_then(|conversion| JsonRenderer::default().render(&conversion.tree))
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn xml_datatree(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(convert_xml, m)?)?;
        Ok(())
    }
}
