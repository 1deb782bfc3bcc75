//! stockpile core: the inventory domain without any transport.
//!
//! This crate owns the item model, boundary validation, and the in-memory
//! store with its two invariants (unique names on create, existence on
//! read/update/delete). The HTTP gateway builds on top of it.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible
//! path surfaces as `InventoryError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod item;
pub mod store;

pub use error::{ClientCode, InventoryError, Result};
pub use item::{Item, ItemPatch, NewItem};
pub use store::{InventoryObserver, InventoryStore, QuantityPolicy};
