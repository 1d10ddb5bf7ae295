use serde::Serialize;
use std::fmt;

/// A node of the simplified tree: one string value and its ordered children.
///
/// A value of `None` marks a node whose tag could not be extracted. Empty text
/// is kept as `Some("")`, so the two cases stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimplifiedNode {
    value: Option<String>,
    children: Vec<SimplifiedNode>,
}

impl SimplifiedNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Creates a node carrying the "no value" marker.
    pub fn missing() -> Self {
        Self {
            value: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SimplifiedNode>) -> Self {
        self.children = children;
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn children(&self) -> &[SimplifiedNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&SimplifiedNode> {
        self.children.get(index)
    }

    /// Returns the first direct child whose value equals `value`.
    pub fn find_child(&self, value: &str) -> Option<&SimplifiedNode> {
        self.children.iter().find(|c| c.value() == Some(value))
    }

    /// Appends a child after all existing children.
    pub fn push_child(&mut self, child: SimplifiedNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order iterator over this node and everything below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }
}

impl Default for SimplifiedNode {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Pre-order traversal produced by [`SimplifiedNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SimplifiedNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SimplifiedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// An ordered, rooted tree of string values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SimplifiedTree {
    root: SimplifiedNode,
}

impl SimplifiedTree {
    /// Creates a tree whose root has an empty value and no children.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: SimplifiedNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SimplifiedNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SimplifiedNode {
        &mut self.root
    }

    pub fn into_root(self) -> SimplifiedNode {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl fmt::Display for SimplifiedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, &self.root, 0)
    }
}

fn write_outline(f: &mut fmt::Formatter<'_>, node: &SimplifiedNode, level: usize) -> fmt::Result {
    writeln!(f, "{:width$}{}", "", node.value().unwrap_or("∅"), width = level * 2)?;
    for child in &node.children {
        write_outline(f, child, level + 1)?;
    }
    Ok(())
}
