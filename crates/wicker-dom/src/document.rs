//! Document tree
//!
//! Arena-backed element tree with the facilities the custom elements need
//! from their host: structural edits with attach/detach lifecycle, attribute
//! reflection callbacks, subscription-based event bubbling, focus tracking,
//! and session history.
//!
//! Execution is single-threaded and cooperative. Work scheduled from inside a
//! component hook (a dispatched event, or a component touching its own
//! observed attribute) is queued and processed once the current hook returns,
//! so every hook runs to completion before the next one starts.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::element::Element;
use crate::event::{Event, EventKind};
use crate::history::SessionHistory;
use crate::node::{NodeData, NodeId, NodeSnapshot};
use crate::registry::Registry;
use crate::shadow::ShadowRoot;

enum Task {
    Deliver(Event),
    AttributeChanged {
        node: NodeId,
        name: String,
        old: Option<String>,
        new: Option<String>,
    },
}

pub struct Document {
    registry: Registry,
    nodes: Vec<NodeData>,
    /// Component slots, parallel to `nodes`. A slot is `None` for plain
    /// elements, and temporarily empty while its component runs a hook.
    components: Vec<Option<Box<dyn Element>>>,
    root: NodeId,
    /// Event-name subscriptions per node
    listeners: HashMap<NodeId, HashSet<&'static str>>,
    focused: Option<NodeId>,
    history: SessionHistory,
    /// Fully delivered events, drained by external observers
    emitted: Vec<Event>,
    queue: VecDeque<Task>,
    draining: bool,
}

impl Document {
    pub fn new(registry: Registry) -> Self {
        let mut doc = Self {
            registry,
            nodes: Vec::new(),
            components: Vec::new(),
            root: NodeId(0),
            listeners: HashMap::new(),
            focused: None,
            history: SessionHistory::new(),
            emitted: Vec::new(),
            queue: VecDeque::new(),
            draining: false,
        };

        let root = doc.alloc(NodeData::new("#root"), None);
        doc.nodes[root.index()].connected = true;
        doc.root = root;
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Create an element node; registered tags are upgraded to their
    /// component, which also renders the shadow root.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let component = self.registry.create(tag);

        let mut data = NodeData::new(tag);
        if let Some(component) = &component {
            data.observed = component.observed_attributes();
            data.shadow = component.render_shadow().map(ShadowRoot::new);
        }

        let node = self.alloc(data, component);
        tracing::debug!(node = %node, tag = %tag, "Created element");
        node
    }

    fn alloc(&mut self, data: NodeData, component: Option<Box<dyn Element>>) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(data);
        self.components.push(component);
        node
    }

    // ---- Tree structure ----

    /// Append `child` under `parent`. If `parent` is connected, the whole
    /// appended subtree attaches, firing `on_attach` top-down.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.node(child).parent.is_none(),
            "node already has a parent"
        );

        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);

        if self.node(parent).connected {
            self.connect_subtree(child);
        }
    }

    /// Remove `child` from `parent`, firing `on_detach` through the subtree.
    /// The nodes stay alive and can be re-appended later.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.retain(|&c| c != child);
        self.node_mut(child).parent = None;

        if self.node(child).connected {
            self.disconnect_subtree(child);
        }
    }

    fn connect_subtree(&mut self, node: NodeId) {
        let mut order = Vec::new();
        self.collect_subtree(node, &mut order);

        for &id in &order {
            self.nodes[id.index()].connected = true;
        }
        for &id in &order {
            self.with_component(id, |component, dom| component.on_attach(dom, id));
        }
        self.drain();
    }

    fn disconnect_subtree(&mut self, node: NodeId) {
        let mut order = Vec::new();
        self.collect_subtree(node, &mut order);

        for &id in &order {
            self.with_component(id, |component, dom| component.on_detach(dom, id));
        }
        for &id in &order {
            self.nodes[id.index()].connected = false;
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
        self.drain();
    }

    fn collect_subtree(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.push(node);
        for &child in &self.node(node).children {
            self.collect_subtree(child, out);
        }
    }

    // ---- Accessors ----

    fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.index()]
    }

    fn node_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index()]
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text = text.to_string();
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.node(node).connected
    }

    pub fn shadow(&self, node: NodeId) -> Option<&ShadowRoot> {
        self.node(node).shadow.as_ref()
    }

    // ---- Attributes ----

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.node(node).attributes.contains_key(name)
    }

    /// Set an attribute. Writing the current value again is a no-op; a real
    /// change to an observed attribute re-enters the component.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let old = self.node(node).attributes.get(name).cloned();
        if old.as_deref() == Some(value) {
            return;
        }

        self.node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
        self.attribute_changed(node, name, old, Some(value.to_string()));
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let old = self.node_mut(node).attributes.remove(name);
        if let Some(old) = old {
            self.attribute_changed(node, name, Some(old), None);
        }
    }

    /// Boolean attribute helper: present with an empty value, or absent.
    pub fn toggle_attribute(&mut self, node: NodeId, name: &str, on: bool) {
        if on {
            self.set_attribute(node, name, "");
        } else {
            self.remove_attribute(node, name);
        }
    }

    fn attribute_changed(
        &mut self,
        node: NodeId,
        name: &str,
        old: Option<String>,
        new: Option<String>,
    ) {
        if !self.node(node).observed.iter().any(|&o| o == name) {
            return;
        }

        self.queue.push_back(Task::AttributeChanged {
            node,
            name: name.to_string(),
            old,
            new,
        });
        self.drain();
    }

    // ---- Events ----

    /// Subscribe `node` to an event name. Delivery covers events targeting
    /// the node itself and events bubbling up from its descendants.
    pub fn listen(&mut self, node: NodeId, event: &'static str) {
        self.listeners.entry(node).or_default().insert(event);
    }

    pub fn unlisten(&mut self, node: NodeId, event: &str) {
        if let Some(set) = self.listeners.get_mut(&node) {
            set.remove(event);
            if set.is_empty() {
                self.listeners.remove(&node);
            }
        }
    }

    /// Dispatch an event from `target`, bubbling to the root. Dispatching
    /// from inside a handler queues the event until the handler completes.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) {
        self.queue.push_back(Task::Deliver(Event { kind, target }));
        self.drain();
    }

    fn drain(&mut self) {
        if self.draining {
            return;
        }
        self.draining = true;

        while let Some(task) = self.queue.pop_front() {
            match task {
                Task::Deliver(event) => self.deliver(event),
                Task::AttributeChanged {
                    node,
                    name,
                    old,
                    new,
                } => {
                    self.with_component(node, |component, dom| {
                        component.on_attribute_change(dom, node, &name, old.as_deref(), new.as_deref())
                    });
                }
            }
        }

        self.draining = false;
    }

    fn deliver(&mut self, event: Event) {
        tracing::trace!(target = %event.target, event = event.name(), "Delivering event");

        let mut current = Some(event.target);
        while let Some(node) = current {
            let subscribed = self
                .listeners
                .get(&node)
                .is_some_and(|set| set.contains(event.name()));
            if subscribed {
                self.with_component(node, |component, dom| {
                    component.handle_event(dom, node, &event)
                });
            }
            current = self.parent(node);
        }

        self.emitted.push(event);
    }

    /// Drain the log of fully delivered events.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.emitted)
    }

    fn with_component<F>(&mut self, node: NodeId, f: F)
    where
        F: FnOnce(&mut Box<dyn Element>, &mut Document),
    {
        let Some(slot) = self.components.get_mut(node.index()) else {
            return;
        };
        let Some(mut component) = slot.take() else {
            return;
        };

        f(&mut component, self);

        if let Some(slot) = self.components.get_mut(node.index()) {
            *slot = Some(component);
        }
    }

    // ---- Queries ----

    /// Descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &child in self.children(node) {
            self.collect_subtree(child, &mut out);
        }
        out
    }

    /// Descendants with the given tag, in document order.
    pub fn descendants_with_tag(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|&d| self.tag(d) == tag)
            .collect()
    }

    /// First descendant of `scope` whose `id` attribute equals `id`.
    pub fn find_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&d| self.attribute(d, "id") == Some(id))
    }

    pub fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let pos = siblings.iter().position(|&s| s == node)?;
        siblings.get(pos + 1).copied()
    }

    pub fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(node)?);
        let pos = siblings.iter().position(|&s| s == node)?;
        siblings.get(pos.checked_sub(1)?).copied()
    }

    // ---- Focus ----

    pub fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    /// Clears focus if `node` currently holds it.
    pub fn blur(&mut self, node: NodeId) {
        if self.focused == Some(node) {
            self.focused = None;
        }
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    // ---- History ----

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }

    // ---- Snapshots ----

    /// Serializable view of the subtree rooted at `node`.
    pub fn snapshot(&self, node: NodeId) -> NodeSnapshot {
        let data = self.node(node);
        NodeSnapshot {
            tag: data.tag.clone(),
            attributes: data.attributes.clone(),
            text: data.text.clone(),
            children: data.children.iter().map(|&c| self.snapshot(c)).collect(),
        }
    }
}
