//! One-shot import of the bundled dashboard icon pack.
//!
//! Scans the pack directory for SVG files and registers each one as a preset
//! icon, categorised by name. Runs in the background at startup and does
//! nothing when the directory is missing or the pack was imported before.

use std::path::{Path, PathBuf};

use hops_core::icon_category::{is_variant_file, pack_icon, PackIcon};
use hops_db::repositories::IconRepo;
use sqlx::PgPool;

/// Result of scanning the pack directory.
#[derive(Debug, Default)]
pub struct PackScan {
    /// Importable icons, ordered by file name.
    pub icons: Vec<PackIcon>,
    /// `-dark` / `-light` theme variants that were left out.
    pub skipped_variants: usize,
}

/// Collect the importable icons in `dir`. Subdirectories and non-SVG files
/// are ignored.
pub async fn scan_pack_dir(dir: &Path) -> std::io::Result<PackScan> {
    let mut filenames = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            filenames.push(name.to_string());
        }
    }
    filenames.sort();

    let mut scan = PackScan::default();
    for filename in &filenames {
        match pack_icon(filename) {
            Some(icon) => scan.icons.push(icon),
            None if is_variant_file(filename) => scan.skipped_variants += 1,
            None => {}
        }
    }
    Ok(scan)
}

/// Import the pack in `dir` unless it is absent or already imported.
pub async fn run(pool: PgPool, dir: PathBuf) {
    if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
        tracing::debug!(dir = %dir.display(), "Icon pack directory not found, skipping import");
        return;
    }

    match IconRepo::count_pack_icons(&pool).await {
        Ok(0) => {}
        Ok(existing) => {
            tracing::debug!(existing, "Icon pack already imported");
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "Icon pack: failed to count existing icons");
            return;
        }
    }

    let scan = match scan_pack_dir(&dir).await {
        Ok(scan) => scan,
        Err(e) => {
            tracing::error!(error = %e, dir = %dir.display(), "Icon pack: failed to read directory");
            return;
        }
    };

    match IconRepo::insert_pack_icons(&pool, &scan.icons).await {
        Ok(imported) => {
            tracing::info!(
                imported,
                skipped_variants = scan.skipped_variants,
                "Icon pack imported"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Icon pack: import failed");
        }
    }
}
