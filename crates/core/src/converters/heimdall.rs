//! Heimdall JSON export → native document.
//!
//! Heimdall exports a flat array of application tiles. Everything lands in a
//! single `Services` group on a `/heimdall` dashboard.

use serde::Deserialize;

use super::{order_of, single_dashboard, FormatKind, ImportError};
use crate::dashboard::{ConfigDocument, Entry, EntrySize, Group, OpenMode, PLACEHOLDER_ICON};

#[derive(Debug, Deserialize)]
struct HeimdallItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    appdescription: Option<String>,
}

impl HeimdallItem {
    /// `appdescription` when present, otherwise `description` unless it holds
    /// serialized per-app settings (a JSON object).
    fn entry_description(&self) -> Option<String> {
        if let Some(app) = self.appdescription.as_deref().filter(|d| !d.is_empty()) {
            return Some(app.to_string());
        }
        self.description
            .as_deref()
            .filter(|d| !d.is_empty() && !d.starts_with('{'))
            .map(str::to_string)
    }
}

/// Convert a Heimdall JSON export.
pub fn convert(data: &[u8]) -> Result<ConfigDocument, ImportError> {
    let items: Vec<HeimdallItem> =
        serde_json::from_slice(data).map_err(|e| ImportError::parse(FormatKind::Heimdall, e))?;

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Entry {
            id: format!("entry-{i}"),
            description: item.entry_description(),
            name: item.title.unwrap_or_default(),
            url: Some(item.url.unwrap_or_default()),
            icon: Some(PLACEHOLDER_ICON.to_string()),
            open_mode: Some(OpenMode::Newtab),
            size: Some(EntrySize::Medium),
            order: order_of(i),
            ..Entry::default()
        })
        .collect();

    let group = Group {
        id: "services".to_string(),
        name: "Services".to_string(),
        collapsed: Some(false),
        entries: Some(entries),
        order: Some(0),
        ..Group::default()
    };

    Ok(single_dashboard(
        "heimdall",
        "Heimdall Import".to_string(),
        "/heimdall",
        vec![group],
    ))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn descriptions(json: &str) -> Vec<Option<String>> {
        let doc = convert(json.as_bytes()).unwrap();
        doc.entries().map(|e| e.description.clone()).collect()
    }

    #[test]
    fn collapses_into_services_group() {
        let json = r##"[
            {"title": "Plex", "colour": "#E5A00D", "url": "http://plex.lan", "appid": "abc"},
            {"title": "Sonarr", "colour": "#fff", "url": "http://sonarr.lan"}
        ]"##;
        let doc = convert(json.as_bytes()).unwrap();

        let dashboard = &doc.dashboards[0];
        assert_eq!(dashboard.id, "heimdall");
        assert_eq!(dashboard.name, "Heimdall Import");
        assert_eq!(dashboard.path, "/heimdall");

        let groups: Vec<_> = doc.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "services");
        assert_eq!(groups[0].name, "Services");

        let entries: Vec<_> = doc.entries().collect();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["entry-0", "entry-1"]);
        assert_eq!(entries[1].order, Some(1));
        assert_eq!(entries[1].url.as_deref(), Some("http://sonarr.lan"));
    }

    #[test]
    fn every_entry_gets_placeholder_icon() {
        let doc = convert(br#"[{"title": "Plex", "url": "http://plex"}]"#).unwrap();
        assert_eq!(doc.entries().next().unwrap().icon_symbol(), PLACEHOLDER_ICON);
    }

    #[test]
    fn appdescription_wins() {
        let json = r#"[{"title": "A", "url": "u", "appdescription": "nice app", "description": "{\"foo\":1}"}]"#;
        assert_eq!(descriptions(json), [Some("nice app".to_string())]);
    }

    #[test]
    fn plain_description_used_when_appdescription_null() {
        let json = r#"[{"title": "A", "url": "u", "appdescription": null, "description": "a text note"}]"#;
        assert_eq!(descriptions(json), [Some("a text note".to_string())]);
    }

    #[test]
    fn json_looking_description_is_dropped() {
        let json = r#"[{"title": "A", "url": "u", "description": "{\"x\":true}"}]"#;
        assert_eq!(descriptions(json), [None]);
    }

    #[test]
    fn empty_appdescription_falls_through() {
        let json = r#"[{"title": "A", "url": "u", "appdescription": "", "description": "fallback"}]"#;
        assert_eq!(descriptions(json), [Some("fallback".to_string())]);
    }

    #[test]
    fn non_array_is_parse_failure() {
        assert_matches!(
            convert(br#"{"title": "A"}"#),
            Err(ImportError::ParseFailure { format: FormatKind::Heimdall, .. })
        );
    }
}
