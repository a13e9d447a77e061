use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{json, Value};

use stocklist_inventory::{Inventory, Item};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: QuantityInput,
}

/// Quantity as sent by a client: a JSON string, a JSON number, or anything
/// else (which will fail integer parsing).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl Default for QuantityInput {
    fn default() -> Self {
        QuantityInput::Text(String::new())
    }
}

impl QuantityInput {
    /// Raw text handed to the inventory for parsing.
    ///
    /// Numbers keep their JSON spelling, so `5.0` stays non-integral.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            QuantityInput::Text(s) => Cow::Borrowed(s),
            QuantityInput::Number(n) => Cow::Owned(n.to_string()),
            QuantityInput::Other(v) => Cow::Owned(v.to_string()),
        }
    }
}

// -------------------------
// Response mapping
// -------------------------

pub const EMPTY_INVENTORY_MESSAGE: &str = "inventory is empty; add the first item";
pub const ITEM_REMOVED_MESSAGE: &str = "item removed";

pub fn added_message(item: &Item) -> String {
    format!("added item: {} (quantity {})", item.name(), item.quantity())
}

pub fn inventory_to_json(inventory: &Inventory) -> Value {
    let mut body = json!({
        "items": inventory.list(),
        "count": inventory.len(),
    });
    if inventory.is_empty() {
        body["message"] = Value::from(EMPTY_INVENTORY_MESSAGE);
    }
    body
}
