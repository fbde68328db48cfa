//! Homer (`config.yml`) → native document.
//!
//! Every Homer service becomes a group and every item an entry, all inside
//! one `/home` dashboard with a single `Main` tab.

use serde::Deserialize;

use super::{order_of, single_dashboard, FormatKind, ImportError};
use crate::dashboard::{ConfigDocument, Entry, EntrySize, Group, OpenMode, PLACEHOLDER_ICON};

#[derive(Debug, Default, Deserialize)]
struct HomerConfig {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    services: Option<Vec<HomerService>>,
}

#[derive(Debug, Default, Deserialize)]
struct HomerService {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    items: Option<Vec<HomerItem>>,
}

#[derive(Debug, Default, Deserialize)]
struct HomerItem {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Convert a Homer YAML document.
pub fn convert(data: &[u8]) -> Result<ConfigDocument, ImportError> {
    let homer: HomerConfig = serde_yaml::from_slice(data).map_err(|e| ImportError::parse(FormatKind::Homer, e))?;

    let groups = homer
        .services
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, service)| Group {
            id: format!("group-{i}"),
            name: service.name.unwrap_or_default(),
            collapsed: Some(false),
            entries: Some(
                service
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

    Ok(single_dashboard(
        "home",
        homer.title.unwrap_or_default(),
        "/home",
        groups,
    ))
}

fn convert_item(service_index: usize, item_index: usize, item: HomerItem) -> Entry {
    let icon = match (item.icon.filter(|i| !i.is_empty()), item.logo) {
        (Some(icon), _) => icon,
        // Logos are image paths relative to the Homer install; they cannot be
        // carried over, so fall back to the generic glyph.
        (None, Some(logo)) if !logo.is_empty() => PLACEHOLDER_ICON.to_string(),
        (None, _) => String::new(),
    };

    Entry {
        id: format!("entry-{service_index}-{item_index}"),
        name: item.name.unwrap_or_default(),
        url: Some(item.url.unwrap_or_default()),
        icon: Some(icon),
        description: item.subtitle.filter(|s| !s.is_empty()),
        open_mode: Some(OpenMode::Newtab),
        size: Some(EntrySize::Medium),
        order: order_of(item_index),
        ..Entry::default()
    }
}
