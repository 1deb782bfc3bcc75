//! Lightweight in-process metrics.
//!
//! Series are stored as atomics, updated by the item handlers and by the
//! request-tracking middleware, and rendered by the scrape handler.

pub mod metrics;
pub mod middleware;

pub use metrics::InventoryMetrics;
