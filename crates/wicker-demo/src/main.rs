//! Wicker demo
//!
//! Headless rendition of a tabbed settings page: registers the element
//! family, loads the page markup, scripts a short user interaction, and
//! prints document snapshots along the way.

use anyhow::{Context, Result};
use wicker_dom::{parse_fragment, Document, EventKind, Key, Registry};
use wicker_tabs::{define_elements, TAB_TAG};

const PAGE: &str = r##"
<wicker-tabs>
    <wicker-tab slot="tabs" href="#tab1" selected>Tab 1</wicker-tab>
    <wicker-tab slot="tabs" href="#tab2">Tab 2</wicker-tab>
    <wicker-tab slot="tabs" href="#tab3" disabled>Tab 3</wicker-tab>
    <wicker-tab slot="tabs" href="#tab4">Tab 4</wicker-tab>
    <wicker-tab-panel slot="tabpanels" id="tab1" active>This is the content of tab 1.</wicker-tab-panel>
    <wicker-tab-panel slot="tabpanels" id="tab2">This is the content of tab 2.</wicker-tab-panel>
    <wicker-tab-panel slot="tabpanels" id="tab3">This is the content of tab 3.</wicker-tab-panel>
    <wicker-tab-panel slot="tabpanels" id="tab4">This is the content of tab 4.</wicker-tab-panel>
</wicker-tabs>
"##;

fn main() -> Result<()> {
    wicker_dom::init_logging();

    let mut registry = Registry::new();
    define_elements(&mut registry)?;
    let mut dom = Document::new(registry);

    let root = dom.root();
    let created = parse_fragment(&mut dom, root, PAGE);
    let page = created.first().copied().context("empty page markup")?;
    dom.take_events();

    println!("After load:");
    println!("{}", serde_json::to_string_pretty(&dom.snapshot(page))?);

    let tabs = dom.descendants_with_tag(page, TAB_TAG);
    let second = tabs.get(1).copied().context("missing second tab")?;

    // Click the second tab
    dom.dispatch(second, EventKind::Click);
    report_changes(&mut dom);

    // Arrow right from it; the third tab is disabled, so the fourth takes over
    dom.dispatch(second, EventKind::KeyUp(Key::ArrowRight));
    report_changes(&mut dom);

    println!("History fragment: {}", dom.history().current().fragment);
    println!("After interaction:");
    println!("{}", serde_json::to_string_pretty(&dom.snapshot(page))?);

    Ok(())
}

fn report_changes(dom: &mut Document) {
    for event in dom.take_events() {
        if let Some(tab) = event.selected_tab() {
            tracing::info!(container = %event.target, tab = %tab, "Selection changed");
        }
    }
}
