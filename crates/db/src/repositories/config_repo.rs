//! Repository for the single-row `dashboard_config` table.

use hops_core::types::ConfigVersion;
use sqlx::PgPool;

use crate::models::config::StoredConfig;

const COLUMNS: &str = "data, version, updated_at";

/// Load and compare-and-swap the configuration document.
pub struct ConfigRepo;

impl ConfigRepo {
    /// Load the document, or `None` if the row has never been written.
    pub async fn load(pool: &PgPool) -> Result<Option<StoredConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboard_config WHERE id = 1");
        sqlx::query_as::<_, StoredConfig>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Write `data` only if the stored version still equals `expected`.
    ///
    /// Version `0` means "no row yet" and inserts. Returns the new row, or
    /// `None` if another writer got there first.
    pub async fn save_if_version(
        pool: &PgPool,
        data: &serde_json::Value,
        expected: ConfigVersion,
    ) -> Result<Option<StoredConfig>, sqlx::Error> {
        let saved = if expected == 0 {
            let query = format!(
                "INSERT INTO dashboard_config (id, data, version) VALUES (1, $1, 1) \
                 ON CONFLICT (id) DO NOTHING \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, StoredConfig>(&query)
                .bind(data)
                .fetch_optional(pool)
                .await?
        } else {
            let query = format!(
                "UPDATE dashboard_config \
                 SET data = $1, version = version + 1, updated_at = NOW() \
                 WHERE id = 1 AND version = $2 \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, StoredConfig>(&query)
                .bind(data)
                .bind(expected)
                .fetch_optional(pool)
                .await?
        };

        if saved.is_none() {
            tracing::debug!(expected_version = expected, "Config save lost a version race");
        }
        Ok(saved)
    }
}
