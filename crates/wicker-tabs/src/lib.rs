//! Wicker tab elements
//!
//! The Tab / TabPanel / TabList / Tabs custom element family: attribute-driven
//! state with ARIA reflection, selection exclusivity synchronized through
//! bubbling select events, panel linkage via fragment references, and
//! arrow-key navigation.

mod tab;
mod tab_list;
mod tab_panel;
mod tabs;

pub use tab::{Tab, TabState, TAB_TAG};
pub use tab_list::{TabList, TAB_LIST_TAG};
pub use tab_panel::{TabPanel, TabPanelState, TAB_PANEL_TAG};
pub use tabs::{Tabs, TABS_TAG};

use wicker_dom::Registry;

/// Register the whole element family on a registry.
pub fn define_elements(registry: &mut Registry) -> wicker_dom::Result<()> {
    registry.define(TAB_TAG, || Box::new(Tab::new()))?;
    registry.define(TAB_PANEL_TAG, || Box::new(TabPanel::new()))?;
    registry.define(TAB_LIST_TAG, || Box::new(TabList::new()))?;
    registry.define(TABS_TAG, || Box::new(Tabs::new()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_document() -> wicker_dom::Document {
    let mut registry = Registry::new();
    define_elements(&mut registry).unwrap();
    wicker_dom::Document::new(registry)
}
