pub mod competition;
pub mod edition;
pub mod entry;
pub mod matches;
pub mod scoreboard;
pub mod stage;

/// Shared slug validation: lowercase ascii, digits and single hyphens,
/// no leading/trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let is_valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_slug;

    #[test]
    fn accepts_plain_slugs() {
        assert!(validate_slug("summer-cup-2024").is_ok());
        assert!(validate_slug("u19").is_ok());
    }

    #[test]
    fn rejects_bad_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-lead").is_err());
        assert!(validate_slug("trail-").is_err());
        assert!(validate_slug("double--dash").is_err());
        assert!(validate_slug("Upper").is_err());
        assert!(validate_slug("space here").is_err());
    }
}
