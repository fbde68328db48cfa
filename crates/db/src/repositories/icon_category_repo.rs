//! Repository for the `icon_categories` table.

use sqlx::PgPool;

use crate::models::icon_category::{CreateIconCategory, IconCategory, UpdateIconCategory};

const COLUMNS: &str = "id, name, icon, sort_order, is_preset, created_at";

/// Provides CRUD operations for icon categories.
pub struct IconCategoryRepo;

impl IconCategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<IconCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM icon_categories ORDER BY sort_order ASC, name ASC");
        sqlx::query_as::<_, IconCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<IconCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM icon_categories WHERE id = $1");
        sqlx::query_as::<_, IconCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user (non-preset) category.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIconCategory,
    ) -> Result<IconCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO icon_categories (id, name, icon, sort_order, is_preset) \
             VALUES ($1, $2, $3, $4, FALSE) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IconCategory>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.order)
            .fetch_one(pool)
            .await
    }

    /// Patch a user category; `None` means "missing or preset".
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateIconCategory,
    ) -> Result<Option<IconCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE icon_categories SET \
                name = COALESCE($2, name), \
                icon = COALESCE($3, icon), \
                sort_order = COALESCE($4, sort_order) \
             WHERE id = $1 AND is_preset = FALSE \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IconCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Move every icon of category `id` into `fallback_id`, then delete the
    /// category, atomically. Preset categories are never deleted.
    ///
    /// Returns the number of reassigned icons, or `None` if no user category
    /// with that id existed (nothing is changed in that case).
    pub async fn delete_reassigning(
        pool: &PgPool,
        id: &str,
        fallback_id: &str,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let moved = sqlx::query("UPDATE icons SET category_id = $2 WHERE category_id = $1")
            .bind(id)
            .bind(fallback_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM icon_categories WHERE id = $1 AND is_preset = FALSE")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        tracing::info!(category_id = %id, reassigned = moved, "Icon category deleted");
        Ok(Some(moved))
    }
}
