//! Owned markup nodes.
//!
//! Any parser can build these to feed the converter. A node may also be given
//! an arbitrary raw serialization, which is how markup that no longer begins
//! with a tag reaches the converter.

use super::{escape_xml_attr, escape_xml_text, MarkupKind, MarkupSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    kind: MarkupKind,
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<MarkupNode>,
    raw: Option<String>,
}

impl MarkupNode {
    /// Create an element node.
    pub fn element(name: &str) -> Self {
        Self::element_with_attrs(name, Vec::new())
    }

    /// Create an element node with attributes, kept in the given order.
    pub fn element_with_attrs(name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            kind: MarkupKind::Element,
            name: name.to_string(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: None,
            children: Vec::new(),
            raw: None,
        }
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Self {
            kind: MarkupKind::Text,
            name: "#text".to_string(),
            attributes: Vec::new(),
            text: Some(content.to_string()),
            children: Vec::new(),
            raw: None,
        }
    }

    /// Create a comment node.
    pub fn comment(content: &str) -> Self {
        Self {
            kind: MarkupKind::Comment,
            name: "#comment".to_string(),
            text: Some(content.to_string()),
            ..Self::text("")
        }
    }

    /// Create a processing instruction node.
    pub fn processing_instruction(target: &str, data: &str) -> Self {
        Self {
            kind: MarkupKind::ProcessingInstruction,
            name: target.to_string(),
            text: Some(data.to_string()),
            ..Self::text("")
        }
    }

    /// Create a document node; its children are the top-level nodes.
    pub fn document() -> Self {
        Self {
            kind: MarkupKind::Document,
            name: "#document".to_string(),
            ..Self::element("")
        }
    }

    /// Create a container node with no text whose serialization is `raw`.
    pub fn raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            ..Self::element("")
        }
    }

    /// Append a child node.
    pub fn child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    fn write_start_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", key, escape_xml_attr(value)));
        }
        out.push('>');
    }

    /// Leading markup without descending below the first tag. Documents hand
    /// over to their first child, which is where their first tag lives.
    fn write_leading(&self, out: &mut String) {
        let mut node = self;
        while node.raw.is_none() && node.kind == MarkupKind::Document {
            match node.children.first() {
                Some(first) => node = first,
                None => return,
            }
        }
        match (&node.raw, node.kind) {
            (Some(raw), _) => out.push_str(raw),
            (None, MarkupKind::Element) => node.write_start_tag(out),
            _ => node.write_markup(out),
        }
    }

    fn write_markup(&self, out: &mut String) {
        if let Some(raw) = &self.raw {
            out.push_str(raw);
            return;
        }
        match self.kind {
            MarkupKind::Element => {
                self.write_start_tag(out);
                for child in &self.children {
                    child.write_markup(out);
                }
                out.push_str(&format!("</{}>", self.name));
            }
            MarkupKind::Document => {
                for child in &self.children {
                    child.write_markup(out);
                }
            }
            MarkupKind::Text => out.push_str(&escape_xml_text(self.text_or_empty())),
            MarkupKind::Comment => out.push_str(&format!("<!--{}-->", self.text_or_empty())),
            MarkupKind::ProcessingInstruction => {
                out.push_str(&format!("<?{} {}?>", self.name, self.text_or_empty()))
            }
        }
    }
}

impl<'a> MarkupSource for &'a MarkupNode {
    type Children = std::slice::Iter<'a, MarkupNode>;

    fn kind(&self) -> MarkupKind {
        self.kind
    }

    fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn child_nodes(&self) -> Self::Children {
        self.children.iter()
    }

    fn outer_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn leading_markup(&self) -> String {
        let mut out = String::new();
        self.write_leading(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_markup_includes_attributes_and_children() {
        let node = MarkupNode::element_with_attrs("item", vec![("id", "3"), ("note", "a\"b")])
            .child(MarkupNode::text("x < y"));
        assert_eq!(
            (&node).outer_markup(),
            r#"<item id="3" note="a&quot;b">x &lt; y</item>"#
        );
        assert_eq!((&node).text_value(), None);
    }

    #[test]
    fn test_leading_markup_is_the_start_tag_only() {
        let node = MarkupNode::element_with_attrs("item", vec![("id", "3")])
            .child(MarkupNode::element("inner").child(MarkupNode::text("x")));
        assert_eq!((&node).leading_markup(), r#"<item id="3">"#);

        let document = MarkupNode::document()
            .child(MarkupNode::comment(" c "))
            .child(MarkupNode::element("root"));
        assert_eq!((&document).leading_markup(), "<!-- c -->");
        assert_eq!((&MarkupNode::document()).leading_markup(), "");
        assert_eq!(
            (&MarkupNode::raw("plain").child(MarkupNode::element("a"))).leading_markup(),
            "plain"
        );
    }

    #[test]
    fn test_raw_node_reports_its_raw_markup() {
        let node = MarkupNode::raw("no angle brackets here");
        assert_eq!((&node).outer_markup(), "no angle brackets here");
        assert_eq!((&node).kind(), MarkupKind::Element);
        assert_eq!((&node).text_value(), None);
    }

    #[test]
    fn test_whitespace_detection_only_applies_to_text() {
        assert!((&MarkupNode::text(" \n\t")).is_whitespace());
        assert!(!(&MarkupNode::text(" x ")).is_whitespace());
        assert!(!(&MarkupNode::comment("  ")).is_whitespace());
    }
}
