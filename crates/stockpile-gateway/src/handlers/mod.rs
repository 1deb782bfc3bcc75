//! HTTP handlers: item CRUD and the metrics scrape endpoint.

pub mod items;
pub mod metrics;

pub use items::{create_item, delete_item, read_item, update_item};
pub use metrics::scrape;
