//! Import format detection and conversion into the native document.
//!
//! Four source schemas are understood:
//!
//! - **hops**: the native document itself (JSON object with `dashboards`).
//! - **Homer**: YAML with a `services` list.
//! - **Dashy**: YAML with a `sections` list.
//! - **Heimdall**: a JSON array export of application tiles.
//!
//! Detection is purely structural. File names and MIME types are never
//! consulted.

pub mod dashy;
pub mod heimdall;
pub mod homer;

use serde::{Deserialize, Serialize};

use crate::dashboard::{ConfigDocument, Dashboard, Group, Tab};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A recognised source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Hops,
    Homer,
    Dashy,
    Heimdall,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hops => "hops",
            Self::Homer => "homer",
            Self::Dashy => "dashy",
            Self::Heimdall => "heimdall",
        }
    }

    /// Human-readable name used in error and status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hops => "HOPS",
            Self::Homer => "Homer",
            Self::Dashy => "Dashy",
            Self::Heimdall => "Heimdall",
        }
    }

    /// Label describing the format together with its serialization.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hops => "HOPS JSON",
            Self::Homer => "Homer YAML",
            Self::Dashy => "Dashy YAML",
            Self::Heimdall => "Heimdall JSON",
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an uploaded file could not be turned into a native document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// No probe recognised the file.
    #[error("unknown dashboard format")]
    UnknownFormat,

    /// The file matched a format signature but violated its schema.
    #[error("failed to parse {} config: {detail}", .format.display_name())]
    ParseFailure { format: FormatKind, detail: String },

    /// A native import without a usable `dashboards` array.
    #[error("invalid config: {0}")]
    InvalidNativeSchema(String),
}

impl ImportError {
    fn parse(format: FormatKind, err: impl std::fmt::Display) -> Self {
        Self::ParseFailure {
            format,
            detail: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

type Probe = fn(&[u8]) -> Option<FormatKind>;

/// Detection probes in priority order. The first probe to answer wins.
const PROBES: &[Probe] = &[probe_yaml_mapping, probe_native_object, probe_heimdall_array];

/// Determine which known schema `data` conforms to.
pub fn detect_format(data: &[u8]) -> Result<FormatKind, ImportError> {
    PROBES
        .iter()
        .find_map(|probe| probe(data))
        .ok_or(ImportError::UnknownFormat)
}

/// YAML-tolerant probe: a mapping with `services` is Homer, with `sections`
/// is Dashy.
fn probe_yaml_mapping(data: &[u8]) -> Option<FormatKind> {
    let value: serde_yaml::Value = serde_yaml::from_slice(data).ok()?;
    let mapping = value.as_mapping()?;
    if mapping.contains_key("services") {
        Some(FormatKind::Homer)
    } else if mapping.contains_key("sections") {
        Some(FormatKind::Dashy)
    } else {
        None
    }
}

/// Strict JSON object carrying `dashboards`.
fn probe_native_object(data: &[u8]) -> Option<FormatKind> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(data).ok()?;
    object
        .contains_key("dashboards")
        .then_some(FormatKind::Hops)
}

/// Strict JSON array whose first element has both `title` and `url`.
fn probe_heimdall_array(data: &[u8]) -> Option<FormatKind> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(data).ok()?;
    let first = items.first()?.as_object()?;
    (first.contains_key("title") && first.contains_key("url")).then_some(FormatKind::Heimdall)
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert `data`, already identified as `format`, into a native document.
pub fn convert(format: FormatKind, data: &[u8]) -> Result<ConfigDocument, ImportError> {
    match format {
        FormatKind::Hops => convert_native(data),
        FormatKind::Homer => homer::convert(data),
        FormatKind::Dashy => dashy::convert(data),
        FormatKind::Heimdall => heimdall::convert(data),
    }
}

/// Detect and convert in one step.
pub fn detect_and_convert(data: &[u8]) -> Result<(FormatKind, ConfigDocument), ImportError> {
    let format = detect_format(data)?;
    let document = convert(format, data)?;
    Ok((format, document))
}

/// The identity path: parse a native document without transforming it.
pub fn convert_native(data: &[u8]) -> Result<ConfigDocument, ImportError> {
    let value: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| ImportError::parse(FormatKind::Hops, e))?;

    match value.get("dashboards") {
        Some(serde_json::Value::Array(_)) => {}
        Some(_) => {
            return Err(ImportError::InvalidNativeSchema(
                "'dashboards' must be an array".to_string(),
            ))
        }
        None => {
            return Err(ImportError::InvalidNativeSchema(
                "missing 'dashboards' field".to_string(),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| ImportError::parse(FormatKind::Hops, e))
}

/// Wrap converted groups in the single dashboard / single tab shell every
/// foreign format collapses into.
pub(crate) fn single_dashboard(id: &str, name: String, path: &str, groups: Vec<Group>) -> ConfigDocument {
    let tab = Tab {
        id: "main".to_string(),
        name: "Main".to_string(),
        groups: Some(groups),
        order: Some(0),
        ..Tab::default()
    };

    ConfigDocument::with_dashboards(vec![Dashboard {
        id: id.to_string(),
        name,
        path: path.to_string(),
        tabs: Some(vec![tab]),
        order: Some(0),
        ..Dashboard::default()
    }])
}

/// Array positions become `order` values.
pub(crate) fn order_of(index: usize) -> Option<i32> {
    Some(i32::try_from(index).unwrap_or(i32::MAX))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
