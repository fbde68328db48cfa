//! Handlers for icon categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hops_core::error::CoreError;
use hops_core::icon_category::FALLBACK_CATEGORY;
use hops_core::icons::{ensure_mutable, validate_category_icon, validate_name, validate_new_category};
use hops_db::models::icon_category::{CreateIconCategory, IconCategory, UpdateIconCategory};
use hops_db::repositories::IconCategoryRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "IconCategory",
        id: id.to_string(),
    })
}

async fn find_or_404(pool: &PgPool, id: &str) -> AppResult<IconCategory> {
    IconCategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /icon-categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = IconCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /icon-categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateIconCategory>,
) -> AppResult<impl IntoResponse> {
    validate_new_category(&input.id, &input.name, &input.icon).map_err(AppError::Core)?;

    let category = IconCategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = %category.id, "Icon category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /icon-categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateIconCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = input.name.as_deref() {
        validate_name(name).map_err(AppError::Core)?;
    }
    if let Some(icon) = input.icon.as_deref() {
        validate_category_icon(icon).map_err(AppError::Core)?;
    }

    let existing = find_or_404(&state.pool, &id).await?;
    ensure_mutable(existing.is_preset, "Icon category", &id).map_err(AppError::Core)?;

    let category = IconCategoryRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /icon-categories/{id}
///
/// Icons in the category move to the fallback category before the row is
/// removed.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let existing = find_or_404(&state.pool, &id).await?;
    ensure_mutable(existing.is_preset, "Icon category", &id).map_err(AppError::Core)?;

    let moved = IconCategoryRepo::delete_reassigning(&state.pool, &id, FALLBACK_CATEGORY)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(category_id = %id, icons_moved = moved, "Icon category deleted");
    Ok(StatusCode::NO_CONTENT)
}
