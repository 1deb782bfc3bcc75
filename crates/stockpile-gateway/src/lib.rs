//! stockpile gateway library entry.
//!
//! This crate wires config, the inventory store, the item handlers, and the
//! metrics layer into an axum application. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod router;
