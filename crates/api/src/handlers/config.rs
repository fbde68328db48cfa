//! Handlers for the stored dashboard configuration.
//!
//! Every write goes through [`mutate_config`], which applies a pure mutation
//! to a freshly loaded document and saves it with a compare-and-swap on the
//! row version.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use hops_core::config_export::{export_dashboard, export_filename};
use hops_core::dashboard::ConfigDocument;
use hops_core::error::CoreError;
use hops_core::icon_match::{apply_icon_matching, IconLibrary};
use hops_core::types::ConfigVersion;
use hops_db::repositories::{ConfigRepo, IconRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load-mutate-save attempts before giving up with 409.
const MAX_SAVE_ATTEMPTS: u32 = 3;

// ---------------------------------------------------------------------------
// Store helpers
// ---------------------------------------------------------------------------

/// Load the stored document and its version.
///
/// A store that has never been written reads as an empty document at
/// version 0.
pub(crate) async fn load_document(pool: &PgPool) -> AppResult<(ConfigDocument, ConfigVersion)> {
    let Some(stored) = ConfigRepo::load(pool).await? else {
        return Ok((ConfigDocument::default(), 0));
    };

    let document = serde_json::from_value(stored.data)
        .map_err(|e| AppError::InternalError(format!("Stored config is malformed: {e}")))?;
    Ok((document, stored.version))
}

fn to_json(document: &ConfigDocument) -> AppResult<serde_json::Value> {
    serde_json::to_value(document)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize config: {e}")))
}

/// Apply `mutate` to the current document and persist the result.
///
/// The save only lands if nobody else saved in between; otherwise the
/// document is reloaded and `mutate` runs again. Returns the mutation's
/// output and the new version.
pub(crate) async fn mutate_config<T, F>(pool: &PgPool, mut mutate: F) -> AppResult<(T, ConfigVersion)>
where
    F: FnMut(&mut ConfigDocument) -> T,
{
    for attempt in 1..=MAX_SAVE_ATTEMPTS {
        let (mut document, version) = load_document(pool).await?;
        let outcome = mutate(&mut document);
        let data = to_json(&document)?;

        if let Some(saved) = ConfigRepo::save_if_version(pool, &data, version).await? {
            return Ok((outcome, saved.version));
        }
        tracing::warn!(attempt, expected_version = version, "Config changed during save, retrying");
    }

    Err(AppError::Core(CoreError::Conflict(
        "Configuration was modified concurrently, please retry".into(),
    )))
}

/// Snapshot the icon library for matching.
pub(crate) async fn load_icon_library(pool: &PgPool) -> AppResult<IconLibrary> {
    let icons = IconRepo::list(pool, None).await?;
    Ok(IconLibrary::new(icons.into_iter().map(Into::into)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// The document together with the version a later save must present.
#[derive(Debug, Serialize)]
pub struct VersionedConfig {
    pub version: ConfigVersion,
    pub config: ConfigDocument,
}

/// GET /config
pub async fn get_config(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (config, version) = load_document(&state.pool).await?;
    Ok(Json(DataResponse {
        data: VersionedConfig { version, config },
    }))
}

/// Request body for `PUT /config`.
#[derive(Debug, Deserialize)]
pub struct ReplaceConfigRequest {
    /// Version the client last read.
    pub version: ConfigVersion,
    pub config: ConfigDocument,
}

/// PUT /config
///
/// Replace the whole document. Fails with 409 if `version` is stale.
pub async fn replace_config(
    State(state): State<AppState>,
    Json(input): Json<ReplaceConfigRequest>,
) -> AppResult<impl IntoResponse> {
    let data = to_json(&input.config)?;
    let saved = ConfigRepo::save_if_version(&state.pool, &data, input.version)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Configuration version {} is stale",
                input.version
            )))
        })?;

    tracing::info!(
        version = saved.version,
        dashboards = input.config.dashboards.len(),
        "Configuration replaced"
    );

    Ok(Json(DataResponse {
        data: VersionedConfig {
            version: saved.version,
            config: input.config,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub dashboard_id: Option<String>,
}

/// GET /config/export
///
/// Download the whole document, or a single dashboard when `dashboard_id`
/// is given.
pub async fn export_config(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let (document, _) = load_document(&state.pool).await?;

    let (body, filename) = match params.dashboard_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => {
            let export = export_dashboard(&document, id, chrono::Utc::now())?;
            let filename = export_filename(Some(export.dashboards[0].name.as_str()));
            (serde_json::to_string_pretty(&export), filename)
        }
        None => (serde_json::to_string_pretty(&document), export_filename(None)),
    };
    let body = body.map_err(|e| AppError::InternalError(format!("Failed to serialize export: {e}")))?;

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename={filename}")),
        ],
        body,
    ))
}

#[derive(Debug, Serialize)]
pub struct MatchIconsResult {
    pub icons_matched: usize,
    pub version: ConfigVersion,
}

/// POST /config/match-icons
///
/// Fill in icons for entries that only carry a placeholder.
pub async fn match_icons(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let library = load_icon_library(&state.pool).await?;
    let (icons_matched, version) =
        mutate_config(&state.pool, |doc| apply_icon_matching(doc, &library)).await?;

    tracing::info!(icons_matched, library_size = library.len(), "Icon matching applied");

    Ok(Json(DataResponse {
        data: MatchIconsResult {
            icons_matched,
            version,
        },
    }))
}
