//! Item records and the request shapes that create or modify them.
//!
//! `NewItem` and `ItemPatch` are what clients send; `Item` is what the store
//! keeps. Validation happens once at this boundary so the store only ever
//! sees well-formed values.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::store::QuantityPolicy;

/// A stored inventory item. `name` is the key and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: i64,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewItem {
    /// Check business rules and turn the request into a storable item.
    pub fn validate(self) -> Result<Item> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::BadRequest("name must not be empty".into()));
        }
        if self.quantity <= 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        check_price(self.price)?;

        Ok(Item {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
        })
    }
}

/// Body of an update request. Every field is optional.
///
/// A `name` in the body is tolerated and ignored: the path names the item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPatch {
    /// Check the supplied fields; absent fields are always valid.
    pub fn validate(&self) -> Result<()> {
        if let Some(q) = self.quantity {
            if q <= 0 {
                return Err(InventoryError::InvalidQuantity);
            }
        }
        check_price(self.price)
    }
}

impl Item {
    /// Merge a validated patch into this item.
    ///
    /// Price and description are only overwritten by non-zero / non-empty
    /// values. On error the item is left untouched.
    pub fn apply(&mut self, patch: &ItemPatch, policy: QuantityPolicy) -> Result<()> {
        let quantity = match patch.quantity {
            None => self.quantity,
            Some(q) => match policy {
                QuantityPolicy::Replace => q,
                QuantityPolicy::Accumulate => self.quantity.checked_add(q).ok_or_else(|| {
                    InventoryError::BadRequest("quantity overflow".into())
                })?,
            },
        };

        self.quantity = quantity;
        if let Some(price) = patch.price.filter(|p| *p != 0.0) {
            self.price = Some(price);
        }
        if let Some(desc) = patch.description.as_ref().filter(|d| !d.is_empty()) {
            self.description = Some(desc.clone());
        }
        Ok(())
    }
}

fn check_price(price: Option<f64>) -> Result<()> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => Err(InventoryError::BadRequest(
            "price must be a non-negative number".into(),
        )),
        _ => Ok(()),
    }
}
