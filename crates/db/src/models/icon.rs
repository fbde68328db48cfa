//! Icon library rows.

use hops_core::icon_match::IconRecord;
use hops_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `icons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_preset: bool,
    pub created_at: Timestamp,
}

impl From<Icon> for IconRecord {
    fn from(icon: Icon) -> Self {
        Self {
            id: icon.id,
            name: icon.name,
            icon: Some(icon.icon).filter(|i| !i.is_empty()),
            image_url: icon.image_url.filter(|u| !u.is_empty()),
            color: icon.color,
        }
    }
}

/// DTO for creating a user icon.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIcon {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub category_id: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a user icon. The image is fixed at creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIcon {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub category_id: Option<String>,
    /// `None` keeps the current color; `""` clears it.
    pub color: Option<String>,
}
