use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{icon_categories, icons};
use crate::state::AppState;

/// Routes mounted at `/icons`.
///
/// ```text
/// GET    /          list_icons (?category=)
/// POST   /          create_icon
/// GET    /match     match_icon (?name=)
/// PUT    /{id}      update_icon
/// DELETE /{id}      delete_icon
/// ```
pub fn icon_router() -> Router<AppState> {
    Router::new()
        .route("/", get(icons::list_icons).post(icons::create_icon))
        .route("/match", get(icons::match_icon))
        .route("/{id}", put(icons::update_icon).delete(icons::delete_icon))
}

/// Routes mounted at `/icon-categories`.
///
/// ```text
/// GET    /          list_categories
/// POST   /          create_category
/// PUT    /{id}      update_category
/// DELETE /{id}      delete_category
/// ```
pub fn category_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(icon_categories::list_categories).post(icon_categories::create_category),
        )
        .route(
            "/{id}",
            put(icon_categories::update_category).delete(icon_categories::delete_category),
        )
}
