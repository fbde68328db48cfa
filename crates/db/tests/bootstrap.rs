//! Migration bootstrap: connect, migrate, verify seed data.

use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    hops_db::health_check(&pool).await.unwrap();

    let (categories,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM icon_categories WHERE is_preset")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(categories, 16);

    let (icons,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM icons WHERE is_preset")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(icons > 0, "generic icons should be seeded");

    let (uploaded,): (String,) =
        sqlx::query_as("SELECT icon FROM icon_categories WHERE id = 'uploaded'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(uploaded, "mdi:folder-image");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_icon_without_artwork_is_rejected(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO icons (id, name, icon, category_id) VALUES ('bare', 'Bare', '', 'media')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
