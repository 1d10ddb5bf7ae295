//! `MarkupSource` for nodes parsed by roxmltree.

use super::{escape_xml_text, MarkupKind, MarkupSource};
use roxmltree::{Node, NodeType};

impl<'a, 'input: 'a> MarkupSource for Node<'a, 'input> {
    type Children = roxmltree::Children<'a, 'input>;

    fn kind(&self) -> MarkupKind {
        match self.node_type() {
            NodeType::Root => MarkupKind::Document,
            NodeType::Element => MarkupKind::Element,
            NodeType::Text => MarkupKind::Text,
            NodeType::Comment => MarkupKind::Comment,
            NodeType::PI => MarkupKind::ProcessingInstruction,
        }
    }

    fn text_value(&self) -> Option<&str> {
        match self.node_type() {
            // `Node::text` on an element returns its first text child
            NodeType::Text | NodeType::Comment => self.text(),
            NodeType::PI => Some(self.pi().and_then(|pi| pi.value).unwrap_or("")),
            NodeType::Root | NodeType::Element => None,
        }
    }

    fn child_nodes(&self) -> Self::Children {
        self.children()
    }

    fn outer_markup(&self) -> String {
        let mut out = String::new();
        write_markup(*self, &mut out);
        out
    }

    fn leading_markup(&self) -> String {
        let mut node = *self;
        while node.node_type() == NodeType::Root {
            match node.first_child() {
                Some(child) => node = child,
                None => return String::new(),
            }
        }

        if node.is_element() {
            format!("<{}>", start_tag_interior(element_source(node)))
        } else {
            let mut out = String::new();
            write_markup(node, &mut out);
            out
        }
    }
}

fn element_source<'a>(node: Node<'a, '_>) -> &'a str {
    &node.document().input_text()[node.range()]
}

fn write_markup(node: Node<'_, '_>, out: &mut String) {
    match node.node_type() {
        NodeType::Root => {
            for child in node.children() {
                write_markup(child, out);
            }
        }
        NodeType::Element => {
            let start_tag = start_tag_interior(element_source(node));
            out.push('<');
            out.push_str(start_tag);
            out.push('>');
            for child in node.children() {
                write_markup(child, out);
            }
            out.push_str("</");
            out.push_str(qualified_name(start_tag));
            out.push('>');
        }
        NodeType::Text => out.push_str(&escape_xml_text(node.text().unwrap_or_default())),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text().unwrap_or_default());
            out.push_str("-->");
        }
        NodeType::PI => {
            if let Some(pi) = node.pi() {
                out.push_str("<?");
                out.push_str(pi.target);
                if let Some(value) = pi.value {
                    out.push(' ');
                    out.push_str(value);
                }
                out.push_str("?>");
            }
        }
    }
}

/// Interior of the start tag at the beginning of `source`, without the
/// self-closing slash. `source` has already been validated by the parser, so
/// quoted attribute values are the only place a `>` can hide.
fn start_tag_interior(source: &str) -> &str {
    let mut quote = None;
    for (i, ch) in source.char_indices().skip(1) {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '>' => {
                return source[1..i].trim_end().trim_end_matches('/').trim_end();
            }
            None => {}
        }
    }
    source.get(1..).unwrap_or_default()
}

fn qualified_name(start_tag: &str) -> &str {
    start_tag
        .split(|c: char| c.is_whitespace())
        .next()
        .unwrap_or(start_tag)
}
