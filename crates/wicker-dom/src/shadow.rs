//! Shadow root boundary

use serde::{Deserialize, Serialize};

/// Opaque rendering boundary attached to an element at creation.
///
/// Holds the markup an element produced from
/// [`render_shadow`](crate::Element::render_shadow). The markup is never
/// instantiated as live nodes; it is kept so a renderer (or a human) can
/// inspect what the element encapsulates, and nothing else in the host
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowRoot {
    markup: String,
}

impl ShadowRoot {
    pub(crate) fn new(markup: String) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}
