//! Document nodes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shadow::ShadowRoot;

/// Handle to a node in a [`Document`](crate::Document) tree.
///
/// Handles stay valid for the lifetime of the document; removing a node from
/// the tree only unlinks it, so a removed subtree can be re-attached later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct NodeData {
    /// Tag name, lowercase
    pub(crate) tag: String,
    /// Attribute map; ordered so snapshots are deterministic
    pub(crate) attributes: BTreeMap<String, String>,
    /// Light text content projected into the default slot
    pub(crate) text: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Whether the node is reachable from the document root
    pub(crate) connected: bool,
    /// Attribute names whose changes re-enter the component
    pub(crate) observed: &'static [&'static str],
    pub(crate) shadow: Option<ShadowRoot>,
}

impl NodeData {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            connected: false,
            observed: &[],
            shadow: None,
        }
    }
}

/// Serializable view of a subtree, for demo output and test assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}
