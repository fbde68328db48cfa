pub mod config;
pub mod health;
pub mod icons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /config                          get, replace
/// /config/export                   full or single-dashboard export
/// /config/import                   upload, convert, merge, persist
/// /config/import/preview           upload and convert only
/// /config/match-icons              fill missing entry icons
///
/// /icons                           list, create
/// /icons/match                     run the matcher for one name
/// /icons/{id}                      update, delete
///
/// /icon-categories                 list, create
/// /icon-categories/{id}            update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/config", config::router())
        .nest("/icons", icons::icon_router())
        .nest("/icon-categories", icons::category_router())
}
