//! Handlers for the icon library.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hops_core::error::CoreError;
use hops_core::icon_match::{find_icon, IconRecord, MatchStep};
use hops_core::icons::{
    ensure_mutable, validate_artwork, validate_category_ref, validate_name, validate_new_icon,
};
use hops_db::models::icon::{CreateIcon, Icon, UpdateIcon};
use hops_db::repositories::IconRepo;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::config::load_icon_library;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an icon or fail with 404.
async fn find_or_404(pool: &PgPool, id: &str) -> AppResult<Icon> {
    IconRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Icon",
            id: id.to_string(),
        })
    })
}

#[derive(Debug, Deserialize)]
pub struct ListIconsParams {
    pub category: Option<String>,
}

/// GET /icons
pub async fn list_icons(
    State(state): State<AppState>,
    Query(params): Query<ListIconsParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let icons = IconRepo::list(&state.pool, category).await?;
    Ok(Json(DataResponse { data: icons }))
}

/// POST /icons
pub async fn create_icon(
    State(state): State<AppState>,
    Json(input): Json<CreateIcon>,
) -> AppResult<impl IntoResponse> {
    validate_new_icon(
        &input.id,
        &input.name,
        &input.category_id,
        &input.icon,
        input.image_url.as_deref(),
    )
    .map_err(AppError::Core)?;

    let icon = IconRepo::create(&state.pool, &input).await?;
    tracing::info!(icon_id = %icon.id, category_id = %icon.category_id, "Icon created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: icon })))
}

/// PUT /icons/{id}
pub async fn update_icon(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateIcon>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = input.name.as_deref() {
        validate_name(name).map_err(AppError::Core)?;
    }
    if let Some(category_id) = input.category_id.as_deref() {
        validate_category_ref(category_id).map_err(AppError::Core)?;
    }

    let existing = find_or_404(&state.pool, &id).await?;
    ensure_mutable(existing.is_preset, "Icon", &id).map_err(AppError::Core)?;
    validate_artwork(
        input.icon.as_deref().unwrap_or(&existing.icon),
        existing.image_url.as_deref(),
    )
    .map_err(AppError::Core)?;

    // The row can only vanish here if it was deleted concurrently.
    let icon = IconRepo::update(&state.pool, &id, &input).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Icon",
            id: id.clone(),
        })
    })?;

    Ok(Json(DataResponse { data: icon }))
}

/// DELETE /icons/{id}
pub async fn delete_icon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let existing = find_or_404(&state.pool, &id).await?;
    ensure_mutable(existing.is_preset, "Icon", &id).map_err(AppError::Core)?;

    if IconRepo::delete(&state.pool, &id).await? {
        tracing::info!(icon_id = %id, "Icon deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct MatchIconParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct IconMatch {
    pub found: bool,
    pub step: Option<MatchStep>,
    pub icon: Option<IconRecord>,
}

/// GET /icons/match
///
/// Run the matcher for one application name against the whole library.
pub async fn match_icon(
    State(state): State<AppState>,
    Query(params): Query<MatchIconParams>,
) -> AppResult<impl IntoResponse> {
    let library = load_icon_library(&state.pool).await?;
    let matched = find_icon(&params.name, &library);

    let data = match matched {
        Some((step, icon)) => IconMatch {
            found: true,
            step: Some(step),
            icon: Some(icon.clone()),
        },
        None => IconMatch {
            found: false,
            step: None,
            icon: None,
        },
    };
    Ok(Json(DataResponse { data }))
}
