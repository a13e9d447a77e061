use core::num::IntErrorKind;

use serde::Serialize;

use stocklist_core::{Entity, ItemId, ValueObject};

use crate::error::InventoryError;

/// Strictly positive item quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Parse raw user input into a quantity.
    ///
    /// Surrounding whitespace is ignored and an explicit sign is accepted.
    /// Format is checked before value: `"abc"` is a format error, `"-3"` and
    /// `"0"` are value errors. Integers above `u64::MAX` are well-formed but
    /// out of range, so they are value errors too.
    pub fn parse(input: &str) -> Result<Self, InventoryError> {
        let trimmed = input.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InventoryError::InvalidQuantityFormat);
        }
        if negative {
            return Err(InventoryError::InvalidQuantityValue);
        }

        match digits.parse::<u64>() {
            Ok(0) => Err(InventoryError::InvalidQuantityValue),
            Ok(value) => Ok(Self(value)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(InventoryError::InvalidQuantityValue)
            }
            Err(_) => Err(InventoryError::InvalidQuantityFormat),
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}

/// A single inventory record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: Quantity,
}

impl Item {
    /// Only the store creates items, after validation.
    pub(crate) fn new(id: ItemId, name: String, quantity: Quantity) -> Self {
        Self { id, name, quantity }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
