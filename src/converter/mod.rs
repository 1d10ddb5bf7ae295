//! Converts parsed markup trees into simplified trees.

mod context;
mod diagnostic;
mod tag;
mod value;

use crate::core::{SimplifiedNode, SimplifiedTree};
use crate::markup::{parse_document, MarkupKind, MarkupSource};
use crate::{error::Error, ConvertOptions, Result};
use std::path::Path;

pub use self::context::ConversionContext;
pub use self::diagnostic::{Diagnostic, DiagnosticKind};
pub use self::tag::{begins_with_tag, extract_leading_tag_name};
pub use self::value::{select_value, SelectedValue};

/// Result of a conversion: the tree and any warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub tree: SimplifiedTree,
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// True when every node received a value.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_tree(self) -> SimplifiedTree {
        self.tree
    }
}

/// Walks a markup tree depth-first and builds the matching simplified tree.
pub struct TreeConverter {
    options: ConvertOptions,
}

impl TreeConverter {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Converts `source` and everything below it.
    ///
    /// The source tree is only read, so converting the same tree twice gives
    /// two equal, independent results.
    pub fn convert<N: MarkupSource>(&self, source: &N) -> Result<Conversion> {
        if self.options.max_depth == Some(0) {
            return Err(Error::DepthLimitExceeded { limit: 0 });
        }

        let mut context = ConversionContext::new(&self.options);
        let root = Self::build_node(source, &mut context)?;
        let diagnostics = context.take_diagnostics();

        log::debug!(
            "converted {} node(s), {} diagnostic(s)",
            root.node_count(),
            diagnostics.len()
        );

        Ok(Conversion {
            tree: SimplifiedTree::from_root(root),
            diagnostics,
        })
    }

    /// Parses `xml` and converts its document element.
    pub fn convert_str(&self, xml: &str) -> Result<Conversion> {
        let document = parse_document(xml, &self.options)?;
        log::debug!("parsed document of {} byte(s)", xml.len());
        self.convert(&document.root_element())
    }

    /// Reads the file at `path` and converts its document element.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        let xml = std::fs::read_to_string(path.as_ref())?;
        self.convert_str(&xml)
    }

    fn build_node<N: MarkupSource>(
        source: &N,
        context: &mut ConversionContext,
    ) -> Result<SimplifiedNode> {
        let mut node = match select_value(source) {
            SelectedValue::Value(value) => SimplifiedNode::new(value),
            SelectedValue::MissingTag { markup } => {
                context.report_missing_tag(&markup);
                SimplifiedNode::missing()
            }
        };

        let mut index = 0;
        for child in source.child_nodes() {
            if !Self::is_kept(&child, context) {
                continue;
            }
            context.enter_child(index)?;
            let converted = Self::build_node(&child, context)?;
            context.leave_child();
            node.push_child(converted);
            index += 1;
        }

        Ok(node)
    }

    fn is_kept<N: MarkupSource>(child: &N, context: &ConversionContext) -> bool {
        match child.kind() {
            MarkupKind::Text => context.preserve_whitespace() || !child.is_whitespace(),
            MarkupKind::Comment => !context.ignore_comments(),
            MarkupKind::ProcessingInstruction => !context.ignore_processing_instructions(),
            MarkupKind::Document | MarkupKind::Element => true,
        }
    }
}

/// Converts `source` with default options.
pub fn convert<N: MarkupSource>(source: &N) -> Result<Conversion> {
    TreeConverter::with_defaults().convert(source)
}
