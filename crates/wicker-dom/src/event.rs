//! Event model
//!
//! Events always bubble from their target to the document root. Delivery is
//! subscription-based: a node only sees events it registered for with
//! [`Document::listen`](crate::Document::listen), which makes the otherwise
//! implicit bubbling topology explicit.

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Keyboard keys the host distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// User activation of the target node
    Click,
    /// Key released while the target node has focus
    KeyUp(Key),
    /// Selection intent emitted by a tab, handled by its container
    Select,
    /// Public notification that a container committed a new selection
    Change { selected_tab: NodeId },
}

impl EventKind {
    /// Subscription key; mirrors DOM event type strings.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyUp(_) => "keyup",
            EventKind::Select => "select",
            EventKind::Change { .. } => "change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Node the event was dispatched from
    pub target: NodeId,
}

impl Event {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Payload of a `change` event, if this is one.
    pub fn selected_tab(&self) -> Option<NodeId> {
        match self.kind {
            EventKind::Change { selected_tab } => Some(selected_tab),
            _ => None,
        }
    }
}
