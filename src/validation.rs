//! Input validation and size limits for board content.
//!
//! Every user-supplied field passes through here before it enters a board:
//! fields are trimmed, required fields must be non-empty after trimming,
//! and each field has a generous upper size cap to keep a single submission
//! from ballooning the persisted snapshot.

use crate::error::{ChemboardError, Result};

/// Maximum length for a thread or wiki title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for an author handle in characters.
pub const MAX_AUTHOR_LENGTH: usize = 100;

/// Maximum length for thread, reply, or summary body text (10 KB).
pub const MAX_BODY_LENGTH: usize = 10 * 1024;

/// Maximum length for a single wiki tag in characters.
pub const MAX_TAG_LENGTH: usize = 50;

/// Maximum number of tags on a single wiki entry.
pub const MAX_TAGS_PER_ENTRY: usize = 16;

/// Trims a required field and validates it is non-empty and within `max` characters.
///
/// Returns the trimmed value on success so callers store normalized text.
pub fn require_field(name: &str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChemboardError::validation(format!(
            "{} cannot be empty",
            name
        )));
    }
    if trimmed.chars().count() > max {
        return Err(ChemboardError::validation(format!(
            "{} exceeds maximum length of {} characters",
            name, max
        )));
    }
    Ok(trimmed.to_string())
}

/// Parses a comma-separated tag list, trimming each piece and discarding empties.
///
/// An empty or all-whitespace input yields an empty tag list; tags are optional.
pub fn parse_tags(raw: &str) -> Result<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    if tags.len() > MAX_TAGS_PER_ENTRY {
        return Err(ChemboardError::validation(format!(
            "too many tags (maximum is {})",
            MAX_TAGS_PER_ENTRY
        )));
    }
    for tag in &tags {
        if tag.chars().count() > MAX_TAG_LENGTH {
            return Err(ChemboardError::validation(format!(
                "tag '{}' exceeds maximum length of {} characters",
                tag, MAX_TAG_LENGTH
            )));
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_field_trims_and_accepts() {
        let value = require_field("title", "  Buffer capacity  ", MAX_TITLE_LENGTH).unwrap();
        assert_eq!(value, "Buffer capacity");
    }

    #[test]
    fn require_field_rejects_whitespace_only() {
        let err = require_field("title", "   \t ", MAX_TITLE_LENGTH).unwrap_err();
        assert!(matches!(err, ChemboardError::Validation(_)));
    }

    #[test]
    fn require_field_rejects_oversized() {
        let long = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(require_field("title", &long, MAX_TITLE_LENGTH).is_err());
    }

    #[test]
    fn parse_tags_trims_and_drops_empty_pieces() {
        let tags = parse_tags("acid-base, , equilibrium ,").unwrap();
        assert_eq!(tags, vec!["acid-base", "equilibrium"]);
    }

    #[test]
    fn parse_tags_empty_input_yields_no_tags() {
        assert!(parse_tags("").unwrap().is_empty());
        assert!(parse_tags("  ,  ,").unwrap().is_empty());
    }
}
