mod json;
mod outline;

use crate::core::SimplifiedTree;
use crate::Result;

pub use json::JsonRenderer;
pub use outline::OutlineRenderer;

pub trait Renderer {
    fn render(&self, tree: &SimplifiedTree) -> Result<String>;
}
