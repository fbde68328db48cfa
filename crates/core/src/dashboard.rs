//! The native dashboard document.
//!
//! The whole configuration (dashboards → tabs → groups → entries, plus
//! theme and global settings) is one JSON document and the unit of
//! persistence. Keys are camelCase on the wire. Keys this model does not
//! know about are kept in a flattened `extra` map at every level so a
//! document survives a parse/serialize cycle without losing data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Unknown keys carried alongside a typed node.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Generic symbolic icon emitted by converters when no real icon is known.
pub const PLACEHOLDER_ICON: &str = "mdi:application";

/// Symbolic icons treated as "no real icon assigned".
pub const PLACEHOLDER_ICONS: &[&str] = &[PLACEHOLDER_ICON, "mdi:link"];

/// Any `mdi:help*` glyph is also a placeholder.
const PLACEHOLDER_ICON_PREFIX: &str = "mdi:help";

/// Whether a symbolic icon reference counts as a placeholder.
///
/// The empty string is a placeholder too.
pub fn is_placeholder_icon(icon: &str) -> bool {
    icon.is_empty()
        || PLACEHOLDER_ICONS.contains(&icon)
        || icon.starts_with(PLACEHOLDER_ICON_PREFIX)
}

// ---------------------------------------------------------------------------
// Document root
// ---------------------------------------------------------------------------

/// The complete configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default)]
    pub dashboards: Vec<Dashboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ConfigDocument {
    /// A document holding exactly the given dashboards.
    pub fn with_dashboards(dashboards: Vec<Dashboard>) -> Self {
        Self {
            dashboards,
            ..Self::default()
        }
    }

    /// Every group in document order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.dashboards
            .iter()
            .flat_map(|d| d.tabs.iter().flatten())
            .flat_map(|t| t.groups.iter().flatten())
    }

    /// Every entry in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.dashboards
            .iter()
            .flat_map(|d| d.tabs.iter().flatten())
            .flat_map(|t| t.groups.iter().flatten())
            .flat_map(|g| g.entries.iter().flatten())
    }

    /// Every entry in document order, mutably.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.dashboards
            .iter_mut()
            .flat_map(|d| d.tabs.iter_mut().flatten())
            .flat_map(|t| t.groups.iter_mut().flatten())
            .flat_map(|g| g.entries.iter_mut().flatten())
    }

    /// The set of dashboard paths currently in use.
    pub fn dashboard_paths(&self) -> HashSet<String> {
        self.dashboards.iter().map(|d| d.path.clone()).collect()
    }

    pub fn find_dashboard(&self, id: &str) -> Option<&Dashboard> {
        self.dashboards.iter().find(|d| d.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tree nodes
// ---------------------------------------------------------------------------
//
// Only `id`, `name` and `path` are required. Every other key is optional and
// stays absent on output when it was absent on input; nothing is defaulted
// in. Numbers the backend never interprets are kept as `serde_json::Number`
// so `1` is not rewritten as `1.0`.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    /// URL-safe path, unique across dashboards (e.g. `/home`).
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A single link tile.
///
/// `icon` is a symbolic reference (e.g. `mdi:docker`); `icon_url` is a
/// resolved image. When both are present the image wins at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_mode: Option<OpenMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_check: Option<StatusCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<EntrySize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Entry {
    /// The symbolic icon, or `""` when none is set.
    pub fn icon_symbol(&self) -> &str {
        self.icon.as_deref().unwrap_or_default()
    }

    /// Whether the entry carries a real image or non-placeholder symbol.
    pub fn has_real_icon(&self) -> bool {
        self.icon_url.as_deref().is_some_and(|u| !u.is_empty())
            || !is_placeholder_icon(self.icon_symbol())
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------
//
// Each enum names the values the frontend understands. Anything else is
// carried verbatim in `Other`.

/// How an entry's link is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    Iframe,
    Newtab,
    Sametab,
    Modal,
    #[serde(untagged)]
    Other(String),
}

/// Tile size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySize {
    Small,
    Medium,
    Large,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Image,
    Slideshow,
    Color,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCheckKind {
    Http,
    Icmp,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Auto,
    #[serde(untagged)]
    Other(String),
}

// ---------------------------------------------------------------------------
// Styling and settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Slideshow interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<serde_json::Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCheck {
    #[serde(rename = "type")]
    pub kind: StatusCheckKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Poll interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<serde_json::Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_hotkey: Option<String>,
    /// Path of the dashboard shown at `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
