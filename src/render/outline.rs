use crate::core::{SimplifiedNode, SimplifiedTree};
use crate::render::Renderer;
use crate::Result;

/// Marker printed for nodes without a value.
pub const NO_VALUE: &str = "∅";

/// One line per node, children indented below their parent.
#[derive(Debug, Clone, Copy)]
pub struct OutlineRenderer {
    pub indent: usize,
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl Renderer for OutlineRenderer {
    fn render(&self, tree: &SimplifiedTree) -> Result<String> {
        let mut out = String::new();
        self.render_node(tree.root(), 0, &mut out);
        Ok(out)
    }
}

impl OutlineRenderer {
    fn render_node(&self, node: &SimplifiedNode, level: usize, out: &mut String) {
        out.push_str(&" ".repeat(level * self.indent));
        out.push_str(node.value().unwrap_or(NO_VALUE));
        out.push('\n');
        for child in node.children() {
            self.render_node(child, level + 1, out);
        }
    }
}
