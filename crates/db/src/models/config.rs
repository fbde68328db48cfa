//! The stored configuration document.

use hops_core::types::{ConfigVersion, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The single row of `dashboard_config`.
///
/// `data` is kept as raw JSON here; the API parses it into the typed
/// document so a malformed blob surfaces as an application error instead of
/// a decode failure inside the driver.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredConfig {
    pub data: serde_json::Value,
    pub version: ConfigVersion,
    pub updated_at: Timestamp,
}
