//! In-memory inventory store.
//!
//! - `name -> Item`, backed by a sharded `DashMap`
//! - each operation locks only the shard holding its key, so check-and-insert
//!   on create and read-modify-write on update are atomic per name
//! - an optional [`InventoryObserver`] is notified while that lock is held,
//!   so observers see changes to one name in the order they were applied

use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Deserialize;

use crate::error::{InventoryError, Result};
use crate::item::{Item, ItemPatch};

/// How an update's quantity combines with the stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Stored quantity becomes the patch quantity.
    #[default]
    Replace,
    /// Patch quantity is added onto the stored one.
    Accumulate,
}

/// Hook for successful mutations.
///
/// Called with the item's shard locked: implementations must not call back
/// into the store.
pub trait InventoryObserver: Send + Sync {
    /// `item` was inserted (`created`) or updated in place.
    fn item_stored(&self, item: &Item, created: bool);
    /// `item` is about to be removed.
    fn item_removed(&self, item: &Item);
}

#[derive(Default)]
pub struct InventoryStore {
    items: DashMap<String, Item>,
    policy: QuantityPolicy,
    observer: Option<Arc<dyn InventoryObserver>>,
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("len", &self.items.len())
            .field("policy", &self.policy)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl InventoryStore {
    pub fn new(policy: QuantityPolicy) -> Self {
        Self {
            items: DashMap::new(),
            policy,
            observer: None,
        }
    }

    pub fn with_observer(policy: QuantityPolicy, observer: Arc<dyn InventoryObserver>) -> Self {
        Self {
            items: DashMap::new(),
            policy,
            observer: Some(observer),
        }
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Insert a new item. Fails if the name is taken; the stored item is kept as is.
    pub fn create(&self, item: Item) -> Result<Item> {
        if item.quantity <= 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        match self.items.entry(item.name.clone()) {
            Entry::Occupied(_) => Err(InventoryError::AlreadyExists),
            Entry::Vacant(slot) => {
                let stored = slot.insert(item);
                if let Some(obs) = &self.observer {
                    obs.item_stored(stored.value(), true);
                }
                let item = stored.value().clone();
                drop(stored);
                tracing::debug!(item = %item.name, quantity = item.quantity, "item created");
                Ok(item)
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<Item> {
        self.items
            .get(name)
            .map(|r| r.value().clone())
            .ok_or(InventoryError::NotFound)
    }

    /// Merge `patch` into the named item and return the result.
    pub fn update(&self, name: &str, patch: &ItemPatch) -> Result<Item> {
        let mut entry = self.items.get_mut(name).ok_or(InventoryError::NotFound)?;
        patch.validate()?;
        entry.value_mut().apply(patch, self.policy)?;
        if let Some(obs) = &self.observer {
            obs.item_stored(entry.value(), false);
        }

        let updated = entry.value().clone();
        drop(entry);
        tracing::debug!(item = %name, quantity = updated.quantity, policy = ?self.policy, "item updated");
        Ok(updated)
    }

    /// Remove the named item, returning what was stored.
    pub fn delete(&self, name: &str) -> Result<Item> {
        let item = match self.items.entry(name.to_owned()) {
            Entry::Vacant(_) => return Err(InventoryError::NotFound),
            Entry::Occupied(slot) => {
                if let Some(obs) = &self.observer {
                    obs.item_removed(slot.get());
                }
                slot.remove()
            }
        };
        tracing::debug!(item = %name, "item deleted");
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy of every stored item, sorted by name.
    pub fn snapshot(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.iter().map(|r| r.value().clone()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }
}
