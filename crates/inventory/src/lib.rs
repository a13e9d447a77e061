//! Inventory domain module.
//!
//! The in-memory inventory store: an ordered list of items with validated
//! add, idempotent remove and read-only listing. Pure domain logic (no IO, no
//! HTTP, no storage).

pub mod error;
pub mod item;
pub mod store;

pub use error::InventoryError;
pub use item::{Item, Quantity};
pub use store::Inventory;
