//! Tab element
//!
//! A single selectable, focusable control. A tab only ever changes itself:
//! activation records its fragment in session history and marks the tab
//! selected, then a bubbling `select` intent asks the owning container to
//! deselect the siblings.

use serde::{Deserialize, Serialize};

use wicker_dom::{Document, Element, Event, EventKind, NodeId};

/// Tag name for the tab element.
pub const TAB_TAG: &str = "wicker-tab";

const TEMPLATE: &str = "\
<style>
    :host {
        display: block;
        float: left;
        margin-left: .5em;
        padding: 5px 10px;
        font-size: 14px;
        line-height: 24px;
        font-weight: 600;
        text-decoration: none;
        white-space: nowrap;
        background: #e5e5e5;
        color: #555;
        border: 1px solid #ccc;
        border-bottom: none;
        cursor: pointer;
    }

    :host([hidden]) {
        display: none;
    }

    :host(:disabled) {
        cursor: not-allowed;
    }

    :host(:focus),
    :host(:hover) {
        outline: none;
        background-color: #fff;
        color: #444;
    }

    :host([selected]),
    :host([selected]:focus),
    :host([selected]:focus:active),
    :host([selected]:hover) {
        margin-bottom: -1px;
        background: #f1f1f1;
        color: #000;
        border-bottom: 1px solid #f1f1f1;
    }
</style>

<slot></slot>
";

/// Explicit per-instance state; attributes are only its serialization surface.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TabState {
    pub selected: bool,
    pub disabled: bool,
    /// Fragment reference (`#panelId`) linking the tab to a panel
    pub href: Option<String>,
}

/// A selectable tab control.
#[derive(Debug, Default)]
pub struct Tab {
    state: TabState,
}

impl Tab {
    pub fn new() -> Self {
        Self::default()
    }

    fn sync_from_attributes(&mut self, dom: &Document, node: NodeId) {
        self.state.selected = dom.has_attribute(node, "selected");
        self.state.disabled = dom.has_attribute(node, "disabled");
        self.state.href = dom.attribute(node, "href").map(str::to_string);
    }

    fn reflect_selected(&self, dom: &mut Document, node: NodeId) {
        let selected = self.state.selected;
        dom.set_attribute(node, "tabindex", if selected { "0" } else { "-1" });
        dom.set_attribute(node, "aria-selected", if selected { "true" } else { "false" });
    }

    fn reflect_disabled(&self, dom: &mut Document, node: NodeId) {
        let disabled = self.state.disabled;
        dom.set_attribute(node, "aria-disabled", if disabled { "true" } else { "false" });

        if disabled || !self.state.selected {
            dom.remove_attribute(node, "tabindex");
            dom.blur(node);
        } else {
            dom.set_attribute(node, "tabindex", "0");
        }
    }

    /// Selection intent, triggered by a click or its keyboard equivalent.
    ///
    /// A disabled or already selected tab ignores it. Otherwise the fragment
    /// (if any) replaces the current history entry, the tab marks itself
    /// selected and reports whether a `select` should be emitted.
    fn select(&mut self, dom: &mut Document, node: NodeId) -> bool {
        if self.state.disabled || self.state.selected {
            tracing::debug!(
                node = %node,
                disabled = self.state.disabled,
                "Ignoring activation of disabled or already selected tab"
            );
            return false;
        }

        // Re-read the link at the boundary; `href` is not an observed attribute
        self.state.href = dom.attribute(node, "href").map(str::to_string);

        if let Some(href) = self.state.href.as_deref() {
            if href.starts_with('#') {
                dom.history_mut().replace(href);
            }
        }

        self.state.selected = true;
        dom.toggle_attribute(node, "selected", true);

        tracing::debug!(node = %node, "Tab activated");

        true
    }
}

impl Element for Tab {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &["selected", "disabled"]
    }

    fn render_shadow(&self) -> Option<String> {
        Some(TEMPLATE.to_string())
    }

    fn on_attach(&mut self, dom: &mut Document, node: NodeId) {
        if !dom.has_attribute(node, "role") {
            dom.set_attribute(node, "role", "tab");
        }

        self.sync_from_attributes(dom, node);
        self.reflect_selected(dom, node);

        dom.listen(node, "click");
    }

    fn on_detach(&mut self, dom: &mut Document, node: NodeId) {
        dom.unlisten(node, "click");
    }

    fn on_attribute_change(
        &mut self,
        dom: &mut Document,
        node: NodeId,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) {
        let has_value = new.is_some();

        match name {
            "selected" => {
                self.state.selected = has_value;
                self.reflect_selected(dom, node);
            }
            "disabled" => {
                self.state.disabled = has_value;
                self.reflect_disabled(dom, node);
            }
            _ => {}
        }
    }

    fn handle_event(&mut self, dom: &mut Document, node: NodeId, event: &Event) {
        if matches!(event.kind, EventKind::Click) && event.target == node && self.select(dom, node)
        {
            dom.dispatch(node, EventKind::Select);
        }
    }
}
