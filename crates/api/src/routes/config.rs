use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{config, import};
use crate::state::AppState;

/// Routes mounted at `/config`.
///
/// ```text
/// GET    /                  get_config
/// PUT    /                  replace_config
/// GET    /export            export_config (?dashboard_id=)
/// POST   /import            import_config (multipart)
/// POST   /import/preview    preview_import (multipart)
/// POST   /match-icons       match_icons
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(config::get_config).put(config::replace_config))
        .route("/export", get(config::export_config))
        .route("/import", post(import::import_config))
        .route("/import/preview", post(import::preview_import))
        .route("/match-icons", post(config::match_icons))
}
