//! Repository for the `icons` table.

use hops_core::icon_category::{PackIcon, PACK_IMAGE_URL_PREFIX};
use sqlx::PgPool;

use crate::models::icon::{CreateIcon, Icon, UpdateIcon};

const COLUMNS: &str = "id, name, icon, category_id, color, image_url, is_preset, created_at";

/// Provides CRUD operations for the icon library.
pub struct IconRepo;

impl IconRepo {
    /// List icons ordered by name, optionally restricted to one category.
    pub async fn list(pool: &PgPool, category_id: Option<&str>) -> Result<Vec<Icon>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM icons \
             WHERE ($1::TEXT IS NULL OR category_id = $1) \
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Icon>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Icon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM icons WHERE id = $1");
        sqlx::query_as::<_, Icon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user (non-preset) icon. Blank optional fields are stored as NULL.
    pub async fn create(pool: &PgPool, input: &CreateIcon) -> Result<Icon, sqlx::Error> {
        let query = format!(
            "INSERT INTO icons (id, name, icon, category_id, color, image_url, is_preset) \
             VALUES ($1, $2, $3, $4, NULLIF($5, ''), NULLIF($6, ''), FALSE) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Icon>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.category_id)
            .bind(&input.color)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Patch a user icon. Presets are never matched, so `None` means
    /// "missing or preset". An empty `color` clears it.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateIcon,
    ) -> Result<Option<Icon>, sqlx::Error> {
        let query = format!(
            "UPDATE icons SET \
                name = COALESCE($2, name), \
                icon = COALESCE($3, icon), \
                category_id = COALESCE($4, category_id), \
                color = CASE WHEN $5::TEXT IS NULL THEN color ELSE NULLIF($5, '') END \
             WHERE id = $1 AND is_preset = FALSE \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Icon>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.category_id)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user icon. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM icons WHERE id = $1 AND is_preset = FALSE")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of icons that came from the bundled pack.
    pub async fn count_pack_icons(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM icons WHERE image_url LIKE $1 || '%'")
                .bind(PACK_IMAGE_URL_PREFIX)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert pack icons as presets in one transaction. Ids that already
    /// exist are left untouched. Returns the number of rows inserted.
    pub async fn insert_pack_icons(pool: &PgPool, icons: &[PackIcon]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for icon in icons {
            let result = sqlx::query(
                "INSERT INTO icons (id, name, icon, category_id, image_url, is_preset) \
                 VALUES ($1, $2, '', $3, $4, TRUE) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(&icon.id)
            .bind(&icon.name)
            .bind(icon.category_id)
            .bind(&icon.image_url)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
