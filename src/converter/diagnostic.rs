use std::fmt;

const SNIPPET_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A node without text whose markup does not begin with a tag.
    MissingTag,
}

/// Non-fatal warning raised while converting a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Child indices leading from the root to the node; empty for the root.
    pub path: Vec<usize>,
    /// Start of the offending markup.
    pub snippet: String,
}

impl Diagnostic {
    pub fn missing_tag(path: Vec<usize>, markup: &str) -> Self {
        let mut snippet: String = markup.chars().take(SNIPPET_CHARS).collect();
        if markup.chars().nth(SNIPPET_CHARS).is_some() {
            snippet.push('…');
        }
        Self {
            kind: DiagnosticKind::MissingTag,
            path,
            snippet,
        }
    }

    /// Path rendered as `/0/2/1`; the root is `/`.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "/".to_string();
        }
        self.path.iter().map(|i| format!("/{i}")).collect()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::MissingTag => write!(
                f,
                "XML code invalid, no tag found at {}: {:?}",
                self.path_string(),
                self.snippet
            ),
        }
    }
}
