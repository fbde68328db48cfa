//! Folding an imported document into the stored configuration.

use serde::Serialize;

use crate::dashboard::ConfigDocument;

/// Suffix appended to the name of a dashboard whose path had to change.
pub const IMPORTED_SUFFIX: &str = " (Imported)";

/// A dashboard that was moved to a free path during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedDashboard {
    pub original_path: String,
    pub path: String,
}

/// Outcome of [`merge_imported`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Number of dashboards appended.
    pub imported: usize,
    /// Dashboards whose path collided.
    pub renamed: Vec<RenamedDashboard>,
}

/// Append every dashboard of `imported` to `existing`.
///
/// A colliding path gets the first free `-N` suffix (starting at 1); the id
/// is re-derived from the new path and the name is marked as imported.
/// Existing dashboards are never touched. Theme and settings carry over
/// only where `existing` has none.
pub fn merge_imported(existing: &mut ConfigDocument, imported: ConfigDocument) -> MergeSummary {
    let mut taken = existing.dashboard_paths();
    let mut summary = MergeSummary::default();

    for mut dashboard in imported.dashboards {
        let original_path = dashboard.path.clone();
        let path = free_path(&original_path, |p| taken.contains(p));

        if path != original_path {
            dashboard.id = path.trim_start_matches('/').to_string();
            dashboard.name.push_str(IMPORTED_SUFFIX);
            dashboard.path = path.clone();
            summary.renamed.push(RenamedDashboard {
                original_path,
                path: path.clone(),
            });
        }

        taken.insert(path);
        existing.dashboards.push(dashboard);
        summary.imported += 1;
    }

    if existing.theme.is_none() {
        existing.theme = imported.theme;
    }
    if existing.settings.is_none() {
        existing.settings = imported.settings;
    }

    summary
}

/// `path` itself when free, else `path-1`, `path-2`, ...
fn free_path(path: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(path) {
        return path.to_string();
    }
    (1u64..)
        .map(|n| format!("{path}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| path.to_string())
}
