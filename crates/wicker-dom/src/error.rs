//! Document host error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Invalid custom element name (must contain a hyphen): {0}")]
    InvalidName(String),

    #[error("Custom element already defined: {0}")]
    DuplicateTag(String),
}
