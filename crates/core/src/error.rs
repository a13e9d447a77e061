//! Domain error model shared by the workspace.

use thiserror::Error;

/// Result type used for shared domain primitives.
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the shared primitives themselves.
///
/// Inventory validation lives with the inventory (`InventoryError`); this type
/// only covers what `stocklist-core` can reject on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
