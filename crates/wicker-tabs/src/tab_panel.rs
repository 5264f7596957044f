//! TabPanel element
//!
//! A content region paired with a tab. Purely reactive: only its owning
//! container ever flips `active`, and the panel reflects that into
//! focusability and visibility attributes. Emits nothing.

use serde::{Deserialize, Serialize};

use wicker_dom::{Document, Element, NodeId};

/// Tag name for the tab panel element.
pub const TAB_PANEL_TAG: &str = "wicker-tab-panel";

const TEMPLATE: &str = "\
<style>
    :host {
        display: none;
        padding-top: 9px;
    }

    :host([active]) {
        display: block;
    }

    :host([hidden]),
    :host([active][hidden]) {
        display: none;
    }

    :host(:focus),
    :host(:hover) {
        outline: none;
    }
</style>

<slot></slot>
";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TabPanelState {
    pub active: bool,
}

/// A tab content panel.
#[derive(Debug, Default)]
pub struct TabPanel {
    state: TabPanelState,
}

impl TabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// An inactive panel takes no tab stop and is hidden from assistive
    /// technology and rendering alike.
    fn apply_visibility(&self, dom: &mut Document, node: NodeId) {
        let active = self.state.active;
        dom.set_attribute(node, "tabindex", if active { "0" } else { "-1" });
        dom.set_attribute(node, "aria-hidden", if active { "false" } else { "true" });
        dom.toggle_attribute(node, "hidden", !active);
    }
}

impl Element for TabPanel {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &["active"]
    }

    fn render_shadow(&self) -> Option<String> {
        Some(TEMPLATE.to_string())
    }

    fn on_attach(&mut self, dom: &mut Document, node: NodeId) {
        if !dom.has_attribute(node, "role") {
            dom.set_attribute(node, "role", "tabpanel");
        }

        // Re-applying for the current state makes repeated attachment a no-op
        self.state.active = dom.has_attribute(node, "active");
        self.apply_visibility(dom, node);
    }

    fn on_attribute_change(
        &mut self,
        dom: &mut Document,
        node: NodeId,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) {
        if name == "active" {
            self.state.active = new.is_some();
            self.apply_visibility(dom, node);
        }
    }
}
