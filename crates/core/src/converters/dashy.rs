//! Dashy (`conf.yml`) → native document.
//!
//! Sections become groups and items become entries, mirroring the Homer
//! mapping. Dashy icons come in several encodings; [`convert_icon`] sorts
//! them into an image URL, a symbolic reference, or the placeholder glyph.

use serde::Deserialize;

use super::{order_of, single_dashboard, FormatKind, ImportError};
use crate::dashboard::{ConfigDocument, Entry, EntrySize, Group, OpenMode, PLACEHOLDER_ICON};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashyConfig {
    #[serde(default)]
    page_info: Option<PageInfo>,
    #[serde(default)]
    sections: Option<Vec<DashySection>>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DashySection {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    items: Option<Vec<DashyItem>>,
}

#[derive(Debug, Deserialize)]
struct DashyItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Result of interpreting a Dashy icon string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashyIcon {
    /// A directly loadable image.
    Image(String),
    /// A symbolic `prefix:name` reference.
    Symbol(String),
}

/// Font Awesome style classes and their icon-set prefixes.
const FONT_AWESOME_STYLES: &[(&str, &str)] = &[
    ("fas", "fa6-solid"),
    ("fa-solid", "fa6-solid"),
    ("fab", "fa6-brands"),
    ("fa-brands", "fa6-brands"),
    ("far", "fa6-regular"),
    ("fa-regular", "fa6-regular"),
];

/// Interpret a Dashy icon string.
///
/// - `http(s)://…` and absolute paths pass through as images.
/// - `mdi-name` / `mdi:name` become `mdi:name`.
/// - `fas fa-name`, `fab fa-name`, `far fa-name` and bare `fa-name` map onto
///   the Font Awesome 6 sets.
/// - Anything else (`hl-*` and `si-*` short codes, `favicon`, empty) becomes
///   the placeholder glyph, leaving the entry eligible for icon matching.
pub fn convert_icon(raw: &str) -> DashyIcon {
    let icon = raw.trim();

    if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with('/') {
        return DashyIcon::Image(icon.to_string());
    }

    if let Some(name) = icon
        .strip_prefix("mdi-")
        .or_else(|| icon.strip_prefix("mdi:"))
        .filter(|n| is_icon_name(n))
    {
        return DashyIcon::Symbol(format!("mdi:{name}"));
    }

    if let Some(symbol) = font_awesome_symbol(icon) {
        return DashyIcon::Symbol(symbol);
    }

    DashyIcon::Symbol(PLACEHOLDER_ICON.to_string())
}

fn font_awesome_symbol(icon: &str) -> Option<String> {
    let mut style = "fa6-solid";
    let mut name = None;

    for class in icon.split_whitespace() {
        if let Some((_, prefix)) = FONT_AWESOME_STYLES.iter().find(|(c, _)| *c == class) {
            style = prefix;
        } else if let Some(n) = class.strip_prefix("fa-") {
            name = Some(n);
        } else {
            return None;
        }
    }

    name.filter(|n| is_icon_name(n))
        .map(|n| format!("{style}:{n}"))
}

fn is_icon_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Convert a Dashy YAML document.
pub fn convert(data: &[u8]) -> Result<ConfigDocument, ImportError> {
    let dashy: DashyConfig = serde_yaml::from_slice(data).map_err(|e| ImportError::parse(FormatKind::Dashy, e))?;

    let groups = dashy
        .sections
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, section)| Group {
            id: format!("group-{i}"),
            name: section.name.unwrap_or_default(),
            collapsed: Some(false),
            entries: Some(
                section
                    .items
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(j, item)| convert_item(i, j, item))
                    .collect(),
            ),
            order: order_of(i),
            ..Group::default()
        })
        .collect();

    let title = dashy.page_info.and_then(|p| p.title).unwrap_or_default();

    Ok(single_dashboard("home", title, "/home", groups))
}

fn convert_item(section_index: usize, item_index: usize, item: DashyItem) -> Entry {
    let (icon, icon_url) = match convert_icon(item.icon.as_deref().unwrap_or_default()) {
        DashyIcon::Image(url) => (String::new(), Some(url)),
        DashyIcon::Symbol(symbol) => (symbol, None),
    };

    Entry {
        id: format!("entry-{section_index}-{item_index}"),
        name: item.title.unwrap_or_default(),
        url: Some(item.url.unwrap_or_default()),
        icon: Some(icon),
        icon_url,
        description: item.description.filter(|d| !d.is_empty()),
        open_mode: Some(OpenMode::Newtab),
        size: Some(EntrySize::Medium),
        order: order_of(item_index),
        ..Entry::default()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const SAMPLE: &str = r#"
pageInfo:
  title: Dashy Lab
  description: All the things
sections:
  - name: Networking
    icon: fas fa-network-wired
    items:
      - title: Pi-hole
        description: DNS sinkhole
        icon: hl-pihole
        url: http://pihole.lan/admin
        tags: [dns]
      - title: Router
        icon: https://router.lan/favicon.png
        url: http://router.lan
  - name: Dev
    items:
      - title: GitHub
        icon: fab fa-github
        url: https://github.com
"#;

    // -- convert_icon ---------------------------------------------------------

    #[test]
    fn urls_pass_through_as_images() {
        assert_eq!(
            convert_icon("https://cdn.example.com/x.png"),
            DashyIcon::Image("https://cdn.example.com/x.png".into())
        );
        assert_eq!(
            convert_icon("/item-icons/x.svg"),
            DashyIcon::Image("/item-icons/x.svg".into())
        );
    }

    #[test]
    fn material_design_icons() {
        assert_eq!(convert_icon("mdi-docker"), DashyIcon::Symbol("mdi:docker".into()));
        assert_eq!(convert_icon("mdi:docker"), DashyIcon::Symbol("mdi:docker".into()));
    }

    #[test]
    fn font_awesome_classes() {
        assert_eq!(
            convert_icon("fas fa-rocket"),
            DashyIcon::Symbol("fa6-solid:rocket".into())
        );
        assert_eq!(
            convert_icon("fab fa-github"),
            DashyIcon::Symbol("fa6-brands:github".into())
        );
        assert_eq!(
            convert_icon("far fa-clock"),
            DashyIcon::Symbol("fa6-regular:clock".into())
        );
        assert_eq!(convert_icon("fa-home"), DashyIcon::Symbol("fa6-solid:home".into()));
    }

    #[test]
    fn short_codes_and_junk_fall_back_to_placeholder() {
        for raw in ["", "hl-plex", "si-grafana", "favicon", "fas", "fas fa-", "🚀"] {
            assert_eq!(
                convert_icon(raw),
                DashyIcon::Symbol(PLACEHOLDER_ICON.into()),
                "input {raw:?}"
            );
        }
    }

    // -- convert --------------------------------------------------------------

    #[test]
    fn sections_become_groups() {
        let doc = convert(SAMPLE.as_bytes()).unwrap();
        let dashboard = &doc.dashboards[0];
        assert_eq!(dashboard.name, "Dashy Lab");
        assert_eq!(dashboard.path, "/home");

        let groups: Vec<_> = doc.groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Networking");
        assert_eq!(groups[0].entries.as_ref().map(Vec::len), Some(2));
        assert_eq!(doc.entries().nth(2).map(|e| e.id.as_str()), Some("entry-1-0"));
    }

    #[test]
    fn item_icons_are_sniffed() {
        let doc = convert(SAMPLE.as_bytes()).unwrap();
        let entries: Vec<_> = doc.entries().collect();

        let pihole = entries[0];
        assert_eq!(pihole.icon.as_deref(), Some(PLACEHOLDER_ICON));
        assert_eq!(pihole.icon_url, None);
        assert_eq!(pihole.description.as_deref(), Some("DNS sinkhole"));

        let router = entries[1];
        assert_eq!(router.icon.as_deref(), Some(""));
        assert_eq!(router.icon_url.as_deref(), Some("https://router.lan/favicon.png"));

        assert_eq!(entries[2].icon.as_deref(), Some("fa6-brands:github"));
    }

    #[test]
    fn missing_page_info_gives_empty_name() {
        let doc = convert(b"sections: []\n").unwrap();
        assert_eq!(doc.dashboards[0].name, "");
    }

    #[test]
    fn malformed_sections_is_parse_failure() {
        assert_matches!(
            convert(b"sections: 42\n"),
            Err(ImportError::ParseFailure { format: FormatKind::Dashy, .. })
        );
    }
}
