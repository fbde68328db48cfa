//! Integration tests for the icon and icon category repositories.

use hops_core::icon_category::{pack_icon, FALLBACK_CATEGORY};
use hops_db::models::icon::{CreateIcon, UpdateIcon};
use hops_db::models::icon_category::CreateIconCategory;
use hops_db::repositories::{IconCategoryRepo, IconRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_icon(id: &str, category_id: &str) -> CreateIcon {
    CreateIcon {
        id: id.to_string(),
        name: id.to_uppercase(),
        icon: "mdi:star".to_string(),
        category_id: category_id.to_string(),
        color: None,
        image_url: None,
    }
}

fn new_category(id: &str) -> CreateIconCategory {
    CreateIconCategory {
        id: id.to_string(),
        name: "Lab".to_string(),
        icon: "mdi:flask".to_string(),
        order: 50,
    }
}

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_filter_icons(pool: PgPool) {
    let created = IconRepo::create(&pool, &new_icon("mine", "media")).await.unwrap();
    assert!(!created.is_preset);
    assert_eq!(created.image_url, None);

    let media = IconRepo::list(&pool, Some("media")).await.unwrap();
    assert!(media.iter().any(|i| i.id == "mine"));
    assert!(media.iter().all(|i| i.category_id == "media"));

    let names: Vec<_> = media.iter().map(|i| i.name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_presets_are_not_updated_or_deleted(pool: PgPool) {
    let patch = UpdateIcon {
        name: Some("Hacked".to_string()),
        icon: None,
        category_id: None,
        color: None,
    };
    assert!(IconRepo::update(&pool, "media-generic", &patch)
        .await
        .unwrap()
        .is_none());
    assert!(!IconRepo::delete(&pool, "media-generic").await.unwrap());

    let still = IconRepo::find_by_id(&pool, "media-generic").await.unwrap().unwrap();
    assert_eq!(still.name, "Media");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_sets_keeps_and_clears_color(pool: PgPool) {
    IconRepo::create(&pool, &new_icon("mine", "media")).await.unwrap();
    let patch = |color: Option<&str>| UpdateIcon {
        name: None,
        icon: None,
        category_id: None,
        color: color.map(str::to_string),
    };

    let set = IconRepo::update(&pool, "mine", &patch(Some("#ff0000"))).await.unwrap().unwrap();
    assert_eq!(set.color.as_deref(), Some("#ff0000"));

    let kept = IconRepo::update(&pool, "mine", &patch(None)).await.unwrap().unwrap();
    assert_eq!(kept.color.as_deref(), Some("#ff0000"));

    let cleared = IconRepo::update(&pool, "mine", &patch(Some(""))).await.unwrap().unwrap();
    assert_eq!(cleared.color, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pack_insert_is_idempotent(pool: PgPool) {
    let icons: Vec<_> = ["plex.svg", "uptime-kuma.svg"]
        .into_iter()
        .filter_map(pack_icon)
        .collect();

    assert_eq!(IconRepo::insert_pack_icons(&pool, &icons).await.unwrap(), 2);
    assert_eq!(IconRepo::insert_pack_icons(&pool, &icons).await.unwrap(), 0);
    assert_eq!(IconRepo::count_pack_icons(&pool).await.unwrap(), 2);

    let plex = IconRepo::find_by_id(&pool, "plex").await.unwrap().unwrap();
    assert!(plex.is_preset);
    assert_eq!(plex.category_id, "media");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_category_reassigns_icons(pool: PgPool) {
    IconCategoryRepo::create(&pool, &new_category("lab")).await.unwrap();
    IconRepo::create(&pool, &new_icon("beaker", "lab")).await.unwrap();

    let moved = IconCategoryRepo::delete_reassigning(&pool, "lab", FALLBACK_CATEGORY)
        .await
        .unwrap();
    assert_eq!(moved, Some(1));

    let beaker = IconRepo::find_by_id(&pool, "beaker").await.unwrap().unwrap();
    assert_eq!(beaker.category_id, FALLBACK_CATEGORY);
    assert!(IconCategoryRepo::find_by_id(&pool, "lab").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_preset_category_delete_changes_nothing(pool: PgPool) {
    let result = IconCategoryRepo::delete_reassigning(&pool, "media", FALLBACK_CATEGORY)
        .await
        .unwrap();
    assert_eq!(result, None);

    let media = IconRepo::list(&pool, Some("media")).await.unwrap();
    assert!(!media.is_empty(), "icons must stay in the preset category");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_categories_ordered(pool: PgPool) {
    let categories = IconCategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.first().map(|c| c.id.as_str()), Some("containers"));
    assert_eq!(categories.last().map(|c| c.id.as_str()), Some("uploaded"));
}
