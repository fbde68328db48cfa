//! Export payloads for the stored configuration.

use serde::Serialize;

use crate::dashboard::{ConfigDocument, Dashboard};
use crate::error::CoreError;
use crate::types::Timestamp;

/// `exportType` marker on a single-dashboard export.
pub const SINGLE_DASHBOARD_EXPORT: &str = "single-dashboard";

const FILENAME_PREFIX: &str = "hops";
const FULL_EXPORT_STEM: &str = "hops-config";

/// One dashboard, shaped so it can be imported again as a native document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport<'a> {
    pub export_type: &'static str,
    pub exported_at: Timestamp,
    pub dashboards: [&'a Dashboard; 1],
}

/// Extract the dashboard with `dashboard_id` for export.
pub fn export_dashboard<'a>(
    doc: &'a ConfigDocument,
    dashboard_id: &str,
    now: Timestamp,
) -> Result<DashboardExport<'a>, CoreError> {
    let dashboard = doc
        .find_dashboard(dashboard_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Dashboard",
            id: dashboard_id.to_string(),
        })?;

    Ok(DashboardExport {
        export_type: SINGLE_DASHBOARD_EXPORT,
        exported_at: now,
        dashboards: [dashboard],
    })
}

/// Download file name: `hops-config.json` for the full document,
/// `hops-<slug>.json` for a named dashboard.
///
/// The slug lowercases the name, turns spaces into hyphens and drops
/// anything outside `[a-z0-9._-]` so the name is header-safe.
pub fn export_filename(dashboard_name: Option<&str>) -> String {
    let slug: String = dashboard_name
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    if slug.is_empty() {
        format!("{FULL_EXPORT_STEM}.json")
    } else {
        format!("{FILENAME_PREFIX}-{slug}.json")
    }
}
