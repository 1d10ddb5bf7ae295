use crate::core::SimplifiedTree;
use crate::render::Renderer;
use crate::Result;

/// Renders a tree as nested `{"value": ..., "children": [...]}` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, tree: &SimplifiedTree) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(tree)?
        } else {
            serde_json::to_string(tree)?
        };
        Ok(json)
    }
}
