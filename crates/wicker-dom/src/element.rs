//! Custom element behavior interface
//!
//! The explicit rendition of the custom-element lifecycle callbacks: the
//! document invokes these hooks instead of the platform, which keeps
//! component logic runnable and testable without a browser.

use crate::document::Document;
use crate::event::Event;
use crate::node::NodeId;

/// Lifecycle and behavior hooks for a custom element.
///
/// The component is taken out of its document slot while a hook runs. A hook
/// that changes one of its node's own observed attributes therefore receives
/// the resulting [`Element::on_attribute_change`] after it returns, never
/// re-entrantly.
pub trait Element {
    /// Attribute names whose changes re-enter [`Element::on_attribute_change`].
    fn observed_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Opaque shadow markup, rendered once at element creation.
    ///
    /// The document stores it behind the [`ShadowRoot`](crate::ShadowRoot)
    /// boundary; selection logic never looks inside.
    fn render_shadow(&self) -> Option<String> {
        None
    }

    /// Called when the node becomes connected to the document tree.
    fn on_attach(&mut self, _dom: &mut Document, _node: NodeId) {}

    /// Called when the node is disconnected from the document tree.
    fn on_detach(&mut self, _dom: &mut Document, _node: NodeId) {}

    /// Called when an observed attribute changes value.
    fn on_attribute_change(
        &mut self,
        _dom: &mut Document,
        _node: NodeId,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
    ) {
    }

    /// Called when a subscribed event is delivered to this node.
    fn handle_event(&mut self, _dom: &mut Document, _node: NodeId, _event: &Event) {}
}

/// Constructor registered for a tag name.
pub type ElementCtor = fn() -> Box<dyn Element>;
