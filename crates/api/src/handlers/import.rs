//! Handlers for importing dashboards from uploaded files.
//!
//! Detection and conversion run before the store is touched, so a file that
//! fails to parse never changes the stored document.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use hops_core::converters::{detect_and_convert, FormatKind};
use hops_core::dashboard::ConfigDocument;
use hops_core::icon_match::apply_icon_matching;
use hops_core::import_merge::{merge_imported, RenamedDashboard};
use hops_core::types::ConfigVersion;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::config::{load_icon_library, mutate_config};
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Multipart fields that switch on icon matching after the merge.
const AUTO_MATCH_FIELDS: &[&str] = &["auto_match_icons", "autoMatchIcons"];

/// The parts of an import form the handlers care about.
#[derive(Debug, Default)]
struct ImportUpload {
    data: Vec<u8>,
    auto_match_icons: bool,
}

/// Drain the multipart stream. Unknown fields are ignored.
async fn read_upload(mut multipart: Multipart) -> AppResult<ImportUpload> {
    let mut file: Option<Vec<u8>> = None;
    let mut auto_match_icons = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == FILE_FIELD {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some(data.to_vec());
        } else if AUTO_MATCH_FIELDS.contains(&name.as_str()) {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            auto_match_icons = value.trim() == "true";
        }
    }

    let data = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    Ok(ImportUpload {
        data,
        auto_match_icons,
    })
}

#[derive(Debug, Serialize)]
pub struct ImportPreview {
    pub format: FormatKind,
    pub format_label: &'static str,
    pub document: ConfigDocument,
}

/// POST /config/import/preview
///
/// Detect and convert an uploaded file without saving anything.
pub async fn preview_import(multipart: Multipart) -> AppResult<impl IntoResponse> {
    let upload = read_upload(multipart).await?;
    let (format, document) = detect_and_convert(&upload.data)?;

    tracing::debug!(
        %format,
        dashboards = document.dashboards.len(),
        "Import preview generated"
    );

    Ok(Json(DataResponse {
        data: ImportPreview {
            format,
            format_label: format.label(),
            document,
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub imported: usize,
    pub icons_matched: usize,
    pub format: FormatKind,
    pub message: String,
    pub renamed: Vec<RenamedDashboard>,
    pub version: ConfigVersion,
}

/// Summary line shown to the user after an import.
fn import_message(imported: usize, format: FormatKind, icons_matched: usize) -> String {
    let mut message = format!(
        "Imported {imported} dashboard(s) from {} format",
        format.display_name()
    );
    if icons_matched > 0 {
        message.push_str(&format!(", matched {icons_matched} icon(s)"));
    }
    message
}

/// POST /config/import
///
/// Convert an uploaded file, append its dashboards to the stored document
/// and optionally fill in missing icons across the merged result.
pub async fn import_config(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let upload = read_upload(multipart).await?;
    let (format, imported) = detect_and_convert(&upload.data)?;

    let library = if upload.auto_match_icons {
        Some(load_icon_library(&state.pool).await?)
    } else {
        None
    };

    let ((summary, icons_matched), version) = mutate_config(&state.pool, |doc| {
        let summary = merge_imported(doc, imported.clone());
        let icons_matched = library
            .as_ref()
            .map_or(0, |library| apply_icon_matching(doc, library));
        (summary, icons_matched)
    })
    .await?;

    tracing::info!(
        %format,
        imported = summary.imported,
        renamed = summary.renamed.len(),
        icons_matched,
        version,
        "Configuration imported"
    );

    Ok(Json(DataResponse {
        data: ImportResult {
            imported: summary.imported,
            icons_matched,
            format,
            message: import_message(summary.imported, format, icons_matched),
            renamed: summary.renamed,
            version,
        },
    }))
}
