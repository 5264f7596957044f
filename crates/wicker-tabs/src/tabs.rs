//! Tabs element
//!
//! The composite container pairing a tab strip with content panels. It owns
//! the tab-to-panel association (derived from `href`/`id` fragment matching
//! at attach time), enforces selection exclusivity across both, and adds
//! arrow-key navigation between tabs.

use wicker_dom::{Document, Element, Event, EventKind, Key, NodeId};

use crate::tab::TAB_TAG;

/// Tag name for the composite tabs container.
pub const TABS_TAG: &str = "wicker-tabs";

const TEMPLATE: &str = "\
<wicker-tab-list>
    <slot name=\"tabs\"></slot>
</wicker-tab-list>

<slot name=\"tabpanels\"></slot>
";

/// Tabs container with panel linkage and keyboard navigation. Selection state
/// lives entirely in the document; observers follow it through `change` events.
#[derive(Debug, Default)]
pub struct Tabs {
    /// Tab-to-panel association, rebuilt at every attach
    links: Vec<(NodeId, NodeId)>,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    fn panel_for(&self, tab: NodeId) -> Option<NodeId> {
        self.links
            .iter()
            .find(|&&(t, _)| t == tab)
            .map(|&(_, panel)| panel)
    }

    /// Resolve each tab's `#fragment` href against descendant ids and wire
    /// up the ARIA relationship. Existing ids and ARIA attributes are left
    /// alone so re-attachment never rewires an already-correct linkage.
    fn link_panels(&mut self, dom: &mut Document, node: NodeId) {
        self.links.clear();

        for tab in dom.descendants_with_tag(node, TAB_TAG) {
            let fragment = match dom.attribute(tab, "href") {
                Some(href) if href.starts_with('#') => href[1..].to_string(),
                _ => continue,
            };

            let Some(panel) = dom.find_by_id(node, &fragment) else {
                tracing::debug!(tab = %tab, fragment = %fragment, "No panel matches tab fragment");
                continue;
            };

            if !dom.has_attribute(tab, "id") {
                dom.set_attribute(tab, "id", &format!("{fragment}-tab"));
            }
            if !dom.has_attribute(tab, "aria-controls") {
                dom.set_attribute(tab, "aria-controls", &fragment);
            }
            if !dom.has_attribute(panel, "aria-labelledby") {
                let tab_id = dom.attribute(tab, "id").unwrap_or_default().to_string();
                dom.set_attribute(panel, "aria-labelledby", &tab_id);
            }

            self.links.push((tab, panel));
        }
    }

    /// Markup may pre-mark any number of tabs selected; the first one in
    /// document order wins and everything else is brought in line with it.
    fn reconcile_initial_selection(&self, dom: &mut Document, node: NodeId) {
        let tabs = dom.descendants_with_tag(node, TAB_TAG);
        let preselected: Vec<NodeId> = tabs
            .iter()
            .copied()
            .filter(|&tab| dom.has_attribute(tab, "selected"))
            .collect();

        let Some(&winner) = preselected.first() else {
            return;
        };

        if preselected.len() > 1 {
            tracing::warn!(
                container = %node,
                count = preselected.len(),
                "Multiple tabs pre-marked selected, keeping the first"
            );
        }

        for &tab in &tabs {
            if tab != winner {
                dom.toggle_attribute(tab, "selected", false);
            }
            if let Some(panel) = self.panel_for(tab) {
                dom.toggle_attribute(panel, "active", tab == winner);
            }
        }
    }

    fn handle_select(&self, dom: &mut Document, node: NodeId, target: NodeId) {
        if dom.tag(target) != TAB_TAG {
            return;
        }

        for tab in dom.descendants_with_tag(node, TAB_TAG) {
            let panel = self.panel_for(tab);

            if tab == target {
                if let Some(panel) = panel {
                    dom.toggle_attribute(panel, "active", true);
                }
            } else {
                dom.toggle_attribute(tab, "selected", false);
                if let Some(panel) = panel {
                    dom.toggle_attribute(panel, "active", false);
                }
            }
        }

        tracing::debug!(container = %node, tab = %target, "Tab selected");

        dom.dispatch(node, EventKind::Change { selected_tab: target });
    }

    fn handle_keyup(&self, dom: &mut Document, node: NodeId, target: NodeId, key: Key) {
        if dom.tag(target) != TAB_TAG {
            return;
        }

        let forward = match key {
            Key::ArrowRight => true,
            Key::ArrowLeft => false,
            _ => return,
        };

        let Some(next) = find_enabled_sibling(dom, target, forward) else {
            return;
        };

        tracing::debug!(container = %node, from = %target, to = %next, "Keyboard tab navigation");

        dom.focus(next);
        // Equivalent to a user click, so the full selection protocol runs
        dom.dispatch(next, EventKind::Click);
    }
}

/// Walk the sibling chain for the nearest enabled tab. Disabled tabs are
/// skipped, a non-tab sibling ends the walk, and there is no wrap-around.
fn find_enabled_sibling(dom: &Document, from: NodeId, forward: bool) -> Option<NodeId> {
    let mut current = from;
    loop {
        let next = if forward {
            dom.next_element_sibling(current)?
        } else {
            dom.previous_element_sibling(current)?
        };

        if dom.tag(next) != TAB_TAG {
            return None;
        }
        if !dom.has_attribute(next, "disabled") {
            return Some(next);
        }

        current = next;
    }
}

impl Element for Tabs {
    fn render_shadow(&self) -> Option<String> {
        Some(TEMPLATE.to_string())
    }

    fn on_attach(&mut self, dom: &mut Document, node: NodeId) {
        if !dom.has_attribute(node, "role") {
            dom.set_attribute(node, "role", "tabpanel");
        }

        self.link_panels(dom, node);
        self.reconcile_initial_selection(dom, node);

        dom.listen(node, "select");
        dom.listen(node, "keyup");
    }

    fn on_detach(&mut self, dom: &mut Document, node: NodeId) {
        dom.unlisten(node, "select");
        dom.unlisten(node, "keyup");
        self.links.clear();
    }

    fn handle_event(&mut self, dom: &mut Document, node: NodeId, event: &Event) {
        match event.kind {
            EventKind::Select => self.handle_select(dom, node, event.target),
            EventKind::KeyUp(key) => self.handle_keyup(dom, node, event.target, key),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_panel::TAB_PANEL_TAG;
    use crate::test_document;
    use wicker_dom::parse_fragment;

    const PAGE: &str = r##"
<wicker-tabs>
    <wicker-tab slot="tabs" href="#p1">A</wicker-tab>
    <wicker-tab slot="tabs" href="#p2" disabled>B</wicker-tab>
    <wicker-tab slot="tabs" href="#p3">C</wicker-tab>
    <wicker-tab-panel slot="tabpanels" id="p1">First</wicker-tab-panel>
    <wicker-tab-panel slot="tabpanels" id="p2">Second</wicker-tab-panel>
    <wicker-tab-panel slot="tabpanels" id="p3">Third</wicker-tab-panel>
</wicker-tabs>
"##;

    struct Fixture {
        container: NodeId,
        tabs: Vec<NodeId>,
        panels: Vec<NodeId>,
    }

    fn load(dom: &mut wicker_dom::Document, markup: &str) -> Fixture {
        let root = dom.root();
        let created = parse_fragment(dom, root, markup);
        let container = created[0];
        let tabs = dom.descendants_with_tag(container, TAB_TAG);
        let panels = dom.descendants_with_tag(container, TAB_PANEL_TAG);
        dom.take_events();
        Fixture {
            container,
            tabs,
            panels,
        }
    }

    fn change_events(dom: &mut wicker_dom::Document) -> Vec<wicker_dom::Event> {
        dom.take_events()
            .into_iter()
            .filter(|e| matches!(e.kind, EventKind::Change { .. }))
            .collect()
    }

    #[test]
    fn test_linkage_wires_aria() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        assert_eq!(dom.attribute(fx.tabs[0], "id"), Some("p1-tab"));
        assert_eq!(dom.attribute(fx.tabs[0], "aria-controls"), Some("p1"));
        assert_eq!(dom.attribute(fx.panels[0], "aria-labelledby"), Some("p1-tab"));
        assert_eq!(dom.attribute(fx.panels[2], "aria-labelledby"), Some("p3-tab"));
    }

    #[test]
    fn test_linkage_keeps_existing_ids() {
        let mut dom = test_document();
        let fx = load(
            &mut dom,
            r##"
<wicker-tabs>
    <wicker-tab id="custom" href="#p1">A</wicker-tab>
    <wicker-tab-panel id="p1">First</wicker-tab-panel>
</wicker-tabs>
"##,
        );

        assert_eq!(dom.attribute(fx.tabs[0], "id"), Some("custom"));
        assert_eq!(dom.attribute(fx.panels[0], "aria-labelledby"), Some("custom"));
    }

    #[test]
    fn test_reattach_does_not_rewire() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);
        let root = dom.root();

        dom.remove_child(root, fx.container);
        dom.append_child(root, fx.container);

        assert_eq!(dom.attribute(fx.tabs[0], "id"), Some("p1-tab"));
        assert_eq!(dom.attribute(fx.tabs[0], "aria-controls"), Some("p1"));
        assert_eq!(dom.attribute(fx.panels[0], "aria-labelledby"), Some("p1-tab"));
    }

    #[test]
    fn test_unresolvable_href_skipped() {
        let mut dom = test_document();
        let fx = load(
            &mut dom,
            r##"
<wicker-tabs>
    <wicker-tab href="#missing">A</wicker-tab>
    <wicker-tab href="#p1">B</wicker-tab>
    <wicker-tab-panel id="p1">First</wicker-tab-panel>
</wicker-tabs>
"##,
        );

        assert!(!dom.has_attribute(fx.tabs[0], "aria-controls"));

        // The unlinked tab still participates in selection exclusivity
        dom.dispatch(fx.tabs[1], EventKind::Click);
        dom.take_events();
        dom.dispatch(fx.tabs[0], EventKind::Click);

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(!dom.has_attribute(fx.panels[0], "active"));
        assert_eq!(change_events(&mut dom).len(), 1);
    }

    #[test]
    fn test_click_selects_tab_and_panel() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[0], EventKind::Click);

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(dom.has_attribute(fx.panels[0], "active"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(!dom.has_attribute(fx.tabs[2], "selected"));
        assert!(!dom.has_attribute(fx.panels[1], "active"));
        assert!(!dom.has_attribute(fx.panels[2], "active"));

        let changes = change_events(&mut dom);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].target, fx.container);
        assert_eq!(changes[0].selected_tab(), Some(fx.tabs[0]));
    }

    #[test]
    fn test_clicking_selected_or_disabled_changes_nothing() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[0], EventKind::Click);
        dom.take_events();

        dom.dispatch(fx.tabs[0], EventKind::Click);
        dom.dispatch(fx.tabs[1], EventKind::Click);

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(dom.has_attribute(fx.panels[0], "active"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(change_events(&mut dom).is_empty());
    }

    #[test]
    fn test_arrow_right_skips_disabled_tab() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[0], EventKind::Click);
        dom.take_events();

        dom.dispatch(fx.tabs[0], EventKind::KeyUp(Key::ArrowRight));

        assert!(dom.has_attribute(fx.tabs[2], "selected"));
        assert!(dom.has_attribute(fx.panels[2], "active"));
        assert!(!dom.has_attribute(fx.tabs[0], "selected"));
        assert!(!dom.has_attribute(fx.panels[0], "active"));
        assert_eq!(dom.focused(), Some(fx.tabs[2]));

        let changes = change_events(&mut dom);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].selected_tab(), Some(fx.tabs[2]));
    }

    #[test]
    fn test_arrow_left_skips_disabled_tab() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[2], EventKind::Click);
        dom.take_events();

        dom.dispatch(fx.tabs[2], EventKind::KeyUp(Key::ArrowLeft));

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(dom.has_attribute(fx.panels[0], "active"));
        assert_eq!(dom.focused(), Some(fx.tabs[0]));
    }

    #[test]
    fn test_arrow_at_end_is_noop() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[2], EventKind::Click);
        dom.take_events();

        dom.dispatch(fx.tabs[2], EventKind::KeyUp(Key::ArrowRight));

        assert!(dom.has_attribute(fx.tabs[2], "selected"));
        assert!(change_events(&mut dom).is_empty());
    }

    #[test]
    fn test_arrow_stops_at_non_tab_sibling() {
        let mut dom = test_document();
        let fx = load(
            &mut dom,
            r##"
<wicker-tabs>
    <wicker-tab href="#p1">A</wicker-tab>
    <span>divider</span>
    <wicker-tab href="#p2">B</wicker-tab>
    <wicker-tab-panel id="p1">First</wicker-tab-panel>
    <wicker-tab-panel id="p2">Second</wicker-tab-panel>
</wicker-tabs>
"##,
        );

        dom.dispatch(fx.tabs[0], EventKind::Click);
        dom.take_events();

        dom.dispatch(fx.tabs[0], EventKind::KeyUp(Key::ArrowRight));

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(change_events(&mut dom).is_empty());
    }

    #[test]
    fn test_preselected_tab_activates_its_panel() {
        let mut dom = test_document();
        let fx = load(
            &mut dom,
            r##"
<wicker-tabs>
    <wicker-tab href="#p1">A</wicker-tab>
    <wicker-tab href="#p2" selected>B</wicker-tab>
    <wicker-tab-panel id="p1">First</wicker-tab-panel>
    <wicker-tab-panel id="p2">Second</wicker-tab-panel>
</wicker-tabs>
"##,
        );

        assert!(dom.has_attribute(fx.tabs[1], "selected"));
        assert!(dom.has_attribute(fx.panels[1], "active"));
        assert!(!dom.has_attribute(fx.panels[0], "active"));
    }

    #[test]
    fn test_multiple_preselected_tabs_reconciled() {
        let mut dom = test_document();
        let fx = load(
            &mut dom,
            r##"
<wicker-tabs>
    <wicker-tab href="#p1" selected>A</wicker-tab>
    <wicker-tab href="#p2" selected>B</wicker-tab>
    <wicker-tab-panel id="p1">First</wicker-tab-panel>
    <wicker-tab-panel id="p2" active>Second</wicker-tab-panel>
</wicker-tabs>
"##,
        );

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(dom.has_attribute(fx.panels[0], "active"));
        assert!(!dom.has_attribute(fx.panels[1], "active"));
    }

    #[test]
    fn test_nothing_preselected_stays_unselected() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        for &tab in &fx.tabs {
            assert!(!dom.has_attribute(tab, "selected"));
        }
        for &panel in &fx.panels {
            assert!(!dom.has_attribute(panel, "active"));
        }
    }

    #[test]
    fn test_click_then_arrow_interaction_sequence() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[0], EventKind::Click);

        assert!(dom.has_attribute(fx.tabs[0], "selected"));
        assert!(dom.has_attribute(fx.panels[0], "active"));
        let changes = change_events(&mut dom);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].selected_tab(), Some(fx.tabs[0]));

        // Arrow right from A; disabled B is skipped and C takes over
        dom.dispatch(fx.tabs[0], EventKind::KeyUp(Key::ArrowRight));

        assert!(dom.has_attribute(fx.tabs[2], "selected"));
        assert!(dom.has_attribute(fx.panels[2], "active"));
        assert!(!dom.has_attribute(fx.tabs[0], "selected"));
        assert!(!dom.has_attribute(fx.tabs[1], "selected"));
        assert!(!dom.has_attribute(fx.panels[0], "active"));
        assert_eq!(dom.focused(), Some(fx.tabs[2]));
        let changes = change_events(&mut dom);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].selected_tab(), Some(fx.tabs[2]));
    }

    #[test]
    fn test_history_follows_selection() {
        let mut dom = test_document();
        let fx = load(&mut dom, PAGE);

        dom.dispatch(fx.tabs[0], EventKind::Click);
        assert_eq!(dom.history().current().fragment, "#p1");
        assert_eq!(dom.history().len(), 1);

        dom.dispatch(fx.tabs[0], EventKind::KeyUp(Key::ArrowRight));
        assert_eq!(dom.history().current().fragment, "#p3");
        assert_eq!(dom.history().len(), 1);
    }
}
