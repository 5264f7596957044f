//! HTML markup loading
//!
//! Builds document subtrees from HTML fragments, so pages can be authored as
//! markup exactly like the server renders them. Registered tags are upgraded
//! to their components; attributes are applied before the subtree is
//! appended, which fires observed-attribute callbacks the way element
//! upgrade does.

use ego_tree::NodeRef;
use scraper::node::{Element as MarkupElement, Node};
use scraper::Html;

use crate::document::Document;
use crate::node::NodeId;

/// Parse an HTML fragment and append the resulting elements under `parent`.
///
/// Returns the top-level nodes that were created. Text directly inside an
/// element becomes its light text content; comments and doctypes are dropped.
pub fn parse_fragment(dom: &mut Document, parent: NodeId, html: &str) -> Vec<NodeId> {
    let fragment = Html::parse_fragment(html);

    let mut created = Vec::new();
    collect_top_level(dom, fragment.tree.root(), &mut created);

    for &node in &created {
        dom.append_child(parent, node);
    }

    tracing::debug!(parent = %parent, count = created.len(), "Loaded markup fragment");

    created
}

fn collect_top_level(dom: &mut Document, node: NodeRef<'_, Node>, out: &mut Vec<NodeId>) {
    for child in node.children() {
        match child.value() {
            // The fragment parser wraps everything in a synthetic <html>
            Node::Element(element) if element.name() == "html" => {
                collect_top_level(dom, child, out)
            }
            Node::Element(element) => out.push(build_element(dom, child, element)),
            _ => {}
        }
    }
}

fn build_element(
    dom: &mut Document,
    node: NodeRef<'_, Node>,
    element: &MarkupElement,
) -> NodeId {
    let id = dom.create_element(element.name());

    for (name, value) in element.attrs() {
        dom.set_attribute(id, name, value);
    }

    let mut text = String::new();
    for child in node.children() {
        match child.value() {
            Node::Element(child_element) => {
                let built = build_element(dom, child, child_element);
                dom.append_child(id, built);
            }
            Node::Text(fragment_text) => text.push_str(fragment_text),
            _ => {}
        }
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        dom.set_text(id, trimmed);
    }

    id
}
