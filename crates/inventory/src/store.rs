use stocklist_core::{Entity, ItemId};

use crate::error::InventoryError;
use crate::item::{Item, Quantity};

/// In-memory inventory: items in insertion order.
///
/// Invariants held by construction:
/// - ids are unique,
/// - every quantity is strictly positive,
/// - every name has at least one non-whitespace character.
///
/// One instance per session; callers own it explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Validate raw input and append a new item.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// quantity format, quantity value, then name. On error nothing changes.
    pub fn add(&mut self, name: &str, quantity: &str) -> Result<Item, InventoryError> {
        let quantity = Quantity::parse(quantity)?;
        if name.trim().is_empty() {
            return Err(InventoryError::EmptyName);
        }

        let item = Item::new(self.fresh_id(), name.to_string(), quantity);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`, if any.
    ///
    /// A miss is not an error. The return value only says whether something
    /// was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| *item.id() != id);
        self.items.len() != before
    }

    /// Current items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| *item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
