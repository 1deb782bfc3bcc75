//! Shared application state for the stockpile gateway.
//!
//! One `InventoryStore` is built per process and handed to every handler
//! through axum state. Metrics are optional; when enabled they observe the
//! store directly, so handlers never touch the gauges themselves.

use std::sync::Arc;

use stockpile_core::{InventoryError, InventoryObserver, InventoryStore};

use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::obs::InventoryMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: InventoryStore,
    metrics: Option<Arc<InventoryMetrics>>,
}

impl AppState {
    /// Build state from an already validated config.
    pub fn new(cfg: GatewayConfig) -> Self {
        let policy = cfg.inventory.quantity_policy;
        let metrics = cfg.metrics.enabled.then(|| Arc::new(InventoryMetrics::new()));
        let store = match &metrics {
            Some(m) => {
                let observer: Arc<dyn InventoryObserver> = m.clone();
                InventoryStore::with_observer(policy, observer)
            }
            None => InventoryStore::new(policy),
        };

        tracing::info!(
            policy = ?store.policy(),
            metrics = cfg.metrics.enabled,
            "inventory state ready"
        );

        Self {
            inner: Arc::new(AppStateInner { cfg, store, metrics }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &InventoryStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> Option<Arc<InventoryMetrics>> {
        self.inner.metrics.clone()
    }

    /// Count a failed request and wrap the error for the response.
    pub fn reject(&self, e: InventoryError) -> ApiError {
        if let Some(m) = &self.inner.metrics {
            m.errors.inc();
        }
        tracing::debug!(code = e.client_code().as_str(), error = %e, "request rejected");
        ApiError(e)
    }
}
