//! Icon category rows.

use hops_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `icon_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_preset: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a user category.
#[derive(Debug, Deserialize)]
pub struct CreateIconCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

/// DTO for updating a user category.
#[derive(Debug, Deserialize)]
pub struct UpdateIconCategory {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}
