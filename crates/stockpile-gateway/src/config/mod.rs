//! Gateway config loader (strict parsing).

pub mod schema;

use std::{fs, io, path::Path};

use stockpile_core::error::{InventoryError, Result};

pub use schema::{GatewayConfig, GatewaySection, InventorySection, MetricsSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path.as_ref())
        .map_err(|e| InventoryError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| InventoryError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but an absent file yields the default config.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(InventoryError::Internal(format!("read config failed: {e}"))),
    }
}
