//! Wicker document host
//!
//! In-memory element tree the Wicker custom elements run against: nodes with
//! attributes, a custom element registry, subscription-based event bubbling,
//! focus tracking, session history, shadow roots, and an HTML fragment loader.
//! Single-threaded and event-driven; every handler runs to completion before
//! the next queued event is processed.

mod document;
mod element;
mod error;
mod event;
mod history;
mod markup;
mod node;
mod registry;
mod shadow;

pub use document::Document;
pub use element::{Element, ElementCtor};
pub use error::DomError;
pub use event::{Event, EventKind, Key};
pub use history::{HistoryEntry, SessionHistory};
pub use markup::parse_fragment;
pub use node::{NodeId, NodeSnapshot};
pub use registry::Registry;
pub use shadow::ShadowRoot;

pub type Result<T> = std::result::Result<T, DomError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
