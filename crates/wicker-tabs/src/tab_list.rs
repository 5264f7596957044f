//! TabList element
//!
//! A standalone tab strip for pages that manage panels themselves: it
//! enforces selection exclusivity over its tab descendants and republishes
//! committed selections as `change` events, but knows nothing about panels.

use wicker_dom::{Document, Element, Event, EventKind, NodeId};

use crate::tab::TAB_TAG;

/// Tag name for the standalone tab strip.
pub const TAB_LIST_TAG: &str = "wicker-tab-list";

const TEMPLATE: &str = "\
<style>
    :host {
        display: block;
        margin: 0;
        padding-top: 9px;
        padding-bottom: 0;
        border-bottom: 1px solid #ccc;
        line-height: inherit;
    }

    :host([hidden]) {
        display: none;
    }

    :host:after {
        content: \"\";
        display: table;
        clear: both;
    }
</style>

<slot></slot>
";

/// A tab strip without panel linkage. Selection state lives entirely in the
/// document; observers follow it through `change` events.
#[derive(Debug, Default)]
pub struct TabList;

impl TabList {
    pub fn new() -> Self {
        Self
    }
}

impl Element for TabList {
    fn render_shadow(&self) -> Option<String> {
        Some(TEMPLATE.to_string())
    }

    fn on_attach(&mut self, dom: &mut Document, node: NodeId) {
        if !dom.has_attribute(node, "role") {
            dom.set_attribute(node, "role", "tablist");
        }

        dom.listen(node, "select");
    }

    fn on_detach(&mut self, dom: &mut Document, node: NodeId) {
        dom.unlisten(node, "select");
    }

    fn handle_event(&mut self, dom: &mut Document, node: NodeId, event: &Event) {
        if !matches!(event.kind, EventKind::Select) {
            return;
        }

        let target = event.target;
        if dom.tag(target) != TAB_TAG {
            return;
        }

        // Exclusivity is enforced unconditionally; tab strips carry no
        // container-level disabled or selected flags.
        for tab in dom.descendants_with_tag(node, TAB_TAG) {
            if tab != target {
                dom.toggle_attribute(tab, "selected", false);
            }
        }

        tracing::debug!(container = %node, tab = %target, "Tab selected");

        dom.dispatch(node, EventKind::Change { selected_tab: target });
    }
}
