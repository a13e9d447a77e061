use thiserror::Error;

/// Reasons an `add` can be rejected.
///
/// All variants are recoverable: the inventory is left exactly as it was.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Quantity input is not an integer.
    #[error("quantity must be an integer")]
    InvalidQuantityFormat,

    /// Quantity is an integer but not strictly positive.
    #[error("quantity must be an integer greater than zero")]
    InvalidQuantityValue,

    /// Name is empty or whitespace only.
    #[error("item name cannot be empty")]
    EmptyName,
}

impl InventoryError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::InvalidQuantityFormat => "invalid_quantity_format",
            InventoryError::InvalidQuantityValue => "invalid_quantity_value",
            InventoryError::EmptyName => "empty_name",
        }
    }
}
