//! Custom element registry

use std::collections::HashMap;

use crate::element::{Element, ElementCtor};
use crate::error::DomError;
use crate::Result;

/// Tag-name to constructor table.
///
/// Tags are registered up front and the registry is handed to the document at
/// construction; elements created afterwards with a registered tag are
/// upgraded to their component.
#[derive(Default)]
pub struct Registry {
    ctors: HashMap<String, ElementCtor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for a tag.
    ///
    /// Custom element names must contain a hyphen, and a tag can only be
    /// defined once.
    pub fn define(&mut self, tag: &str, ctor: ElementCtor) -> Result<()> {
        if !tag.contains('-') {
            return Err(DomError::InvalidName(tag.to_string()));
        }
        if self.ctors.contains_key(tag) {
            return Err(DomError::DuplicateTag(tag.to_string()));
        }

        self.ctors.insert(tag.to_string(), ctor);

        tracing::debug!(tag = %tag, "Defined custom element");

        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.ctors.contains_key(tag)
    }

    pub(crate) fn create(&self, tag: &str) -> Option<Box<dyn Element>> {
        self.ctors.get(tag).map(|ctor| ctor())
    }
}
