use super::Diagnostic;
use crate::error::Error;
use crate::{ConvertOptions, Result};

/// Context passed through conversion for per-call state.
pub struct ConversionContext<'a> {
    options: &'a ConvertOptions,
    path: Vec<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ConversionContext<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Enters child `index` of the current node, enforcing the depth limit.
    pub fn enter_child(&mut self, index: usize) -> Result<()> {
        if let Some(limit) = self.options.max_depth {
            if self.path.len() + 1 >= limit {
                return Err(Error::DepthLimitExceeded { limit });
            }
        }
        self.path.push(index);
        Ok(())
    }

    pub fn leave_child(&mut self) {
        self.path.pop();
    }

    pub fn report_missing_tag(&mut self, markup: &str) {
        let diagnostic = Diagnostic::missing_tag(self.path.clone(), markup);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn preserve_whitespace(&self) -> bool {
        self.options.preserve_whitespace
    }

    pub fn ignore_comments(&self) -> bool {
        self.options.ignore_comments
    }

    pub fn ignore_processing_instructions(&self) -> bool {
        self.options.ignore_processing_instructions
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
