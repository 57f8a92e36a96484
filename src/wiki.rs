//! Wiki board: reference articles with tags and free-text search.

use crate::error::Result;
use crate::validation::{parse_tags, require_field, MAX_BODY_LENGTH, MAX_TITLE_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A reference article with a free-text summary and short tag labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiEntry {
    /// Stable identifier, assigned at creation and backfilled on load for
    /// records persisted without one.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WikiEntry {
    /// Lowercased search haystack: title, summary, and all tags joined.
    fn haystack(&self) -> String {
        let mut parts = Vec::with_capacity(2 + self.tags.len());
        parts.push(self.title.as_str());
        parts.push(self.summary.as_str());
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Input for creating a wiki entry. `tags` is the raw comma-separated field.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub summary: String,
    pub tags: String,
}

/// Wiki board state: the entry collection plus the current search query.
#[derive(Debug, Default)]
pub struct WikiBoard {
    entries: Vec<WikiEntry>,
    query: String,
}

impl WikiBoard {
    /// Creates an empty board with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from persisted records. Missing ids and tag arrays are
    /// defaulted during deserialization.
    pub fn from_records(records: Vec<WikiEntry>) -> Self {
        Self {
            entries: records,
            query: String::new(),
        }
    }

    /// The full entry collection in insertion order (newest first).
    pub fn entries(&self) -> &[WikiEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Entries matching the current query: a case-insensitive substring match
    /// against title, summary, and tags. An empty or whitespace-only query
    /// matches everything.
    pub fn visible_entries(&self) -> Vec<&WikiEntry> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| entry.haystack().contains(&needle))
            .collect()
    }

    /// Validates and prepends a new entry, returning its id.
    ///
    /// Title and summary must be non-empty after trimming; tags are optional.
    /// On any validation failure the collection is left unchanged.
    pub fn create_entry(&mut self, new: NewEntry) -> Result<Uuid> {
        let title = require_field("title", &new.title, MAX_TITLE_LENGTH)?;
        let summary = require_field("summary", &new.summary, MAX_BODY_LENGTH)?;
        let tags = parse_tags(&new.tags)?;

        let entry = WikiEntry {
            id: Uuid::new_v4(),
            title,
            summary,
            tags,
        };
        let id = entry.id;
        self.entries.insert(0, entry);

        info!("Created wiki entry {}", id);
        Ok(id)
    }
}
