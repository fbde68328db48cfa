//! Icon library and icon category validation.
//!
//! Presets (seeded by migrations or the bundled icon pack) are read-only;
//! only user-created rows may be edited or deleted.

use crate::error::CoreError;

pub const MAX_ID_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Validate an icon or category id: non-empty, at most 100 characters, only
/// lowercase alphanumerics plus `-`, `_` and `.`.
pub fn validate_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation("Id must not be empty".into()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(CoreError::Validation(format!(
            "Id must be at most {MAX_ID_LENGTH} characters"
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
    {
        return Err(CoreError::Validation(
            "Id must contain only lowercase alphanumeric characters, '-', '_' and '.'".into(),
        ));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// An icon needs a symbolic reference, an image, or both.
pub fn validate_artwork(icon: &str, image_url: Option<&str>) -> Result<(), CoreError> {
    let has_image = image_url.is_some_and(|u| !u.trim().is_empty());
    if icon.trim().is_empty() && !has_image {
        return Err(CoreError::Validation(
            "Either icon or imageUrl is required".into(),
        ));
    }
    Ok(())
}

pub fn validate_category_ref(category_id: &str) -> Result<(), CoreError> {
    if category_id.trim().is_empty() {
        return Err(CoreError::Validation("Category id must not be empty".into()));
    }
    Ok(())
}

/// Category glyphs are symbolic references and may not be blank.
pub fn validate_category_icon(icon: &str) -> Result<(), CoreError> {
    if icon.trim().is_empty() {
        return Err(CoreError::Validation("Category icon must not be empty".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Composite checks
// ---------------------------------------------------------------------------

/// Validate a user icon before insert.
pub fn validate_new_icon(
    id: &str,
    name: &str,
    category_id: &str,
    icon: &str,
    image_url: Option<&str>,
) -> Result<(), CoreError> {
    validate_id(id)?;
    validate_name(name)?;
    validate_category_ref(category_id)?;
    validate_artwork(icon, image_url)
}

/// Validate a user category before insert.
pub fn validate_new_category(id: &str, name: &str, icon: &str) -> Result<(), CoreError> {
    validate_id(id)?;
    validate_name(name)?;
    validate_category_icon(icon)
}

/// Reject writes to preset rows.
pub fn ensure_mutable(is_preset: bool, entity: &str, id: &str) -> Result<(), CoreError> {
    if is_preset {
        return Err(CoreError::Forbidden(format!(
            "{entity} '{id}' is a preset and cannot be modified"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_id ----------------------------------------------------------

    #[test]
    fn ids_accept_slug_characters() {
        assert!(validate_id("uptime-kuma").is_ok());
        assert!(validate_id("my_icon.v2").is_ok());
    }

    #[test]
    fn ids_reject_uppercase_and_spaces() {
        assert_matches!(validate_id("Plex"), Err(CoreError::Validation(_)));
        assert_matches!(validate_id("my icon"), Err(CoreError::Validation(_)));
        assert_matches!(validate_id(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn ids_have_a_length_cap() {
        assert!(validate_id(&"a".repeat(MAX_ID_LENGTH)).is_ok());
        assert!(validate_id(&"a".repeat(MAX_ID_LENGTH + 1)).is_err());
    }

    // -- validate_artwork -----------------------------------------------------

    #[test]
    fn artwork_needs_icon_or_image() {
        assert!(validate_artwork("mdi:docker", None).is_ok());
        assert!(validate_artwork("", Some("/uploads/x.png")).is_ok());
        assert_matches!(validate_artwork("", None), Err(CoreError::Validation(_)));
        assert_matches!(validate_artwork(" ", Some("")), Err(CoreError::Validation(_)));
    }

    // -- composites -----------------------------------------------------------

    #[test]
    fn new_icon_checks_every_field() {
        assert!(validate_new_icon("nas", "NAS", "storage", "mdi:nas", None).is_ok());
        assert!(validate_new_icon("nas", " ", "storage", "mdi:nas", None).is_err());
        assert!(validate_new_icon("nas", "NAS", "", "mdi:nas", None).is_err());
    }

    #[test]
    fn new_category_requires_icon() {
        assert!(validate_new_category("lab", "Lab", "mdi:flask").is_ok());
        assert!(validate_new_category("lab", "Lab", "").is_err());
    }

    #[test]
    fn presets_are_read_only() {
        assert!(ensure_mutable(false, "Icon", "mine").is_ok());
        let err = ensure_mutable(true, "Icon", "docker").unwrap_err();
        assert_matches!(err, CoreError::Forbidden(ref msg) if msg.contains("docker"));
    }
}
