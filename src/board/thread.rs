//! Thread and reply record types for the discussion board.
//!
//! The serialized shape is the persistence contract: `title` / `author` /
//! `category` / `content` / `createdAt` / `replies` for threads, `author` /
//! `content` for replies. Records written by earlier versions may lack an
//! `id`, a `createdAt`, or a `replies` array; those fields default on load
//! and are normalized by [`super::ForumBoard::from_records`].

use crate::error::ChemboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fixed category label set for discussion threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Organic,
    Inorganic,
    Physical,
    Analytical,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Organic,
        Category::Inorganic,
        Category::Physical,
        Category::Analytical,
    ];

    /// Display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Organic => "Organic",
            Category::Inorganic => "Inorganic",
            Category::Physical => "Physical",
            Category::Analytical => "Analytical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ChemboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Organic" => Ok(Category::Organic),
            "Inorganic" => Ok(Category::Inorganic),
            "Physical" => Ok(Category::Physical),
            "Analytical" => Ok(Category::Analytical),
            other => Err(ChemboardError::validation(format!(
                "unknown category '{}'",
                other
            ))),
        }
    }
}

/// Active category filter: all threads, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Category),
}

impl CategoryFilter {
    /// Whether a thread in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Category(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ChemboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(s.parse()?))
        }
    }
}

/// Thread list sort order over `createdAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => f.write_str("newest"),
            SortOrder::Oldest => f.write_str("oldest"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ChemboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(ChemboardError::validation(format!(
                "unknown sort order '{}'",
                other
            ))),
        }
    }
}

/// A reply attached to exactly one thread, ordered by submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub author: String,
    pub content: String,
}

/// A top-level discussion post with nested replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Stable identifier, assigned at creation and backfilled on load for
    /// records persisted without one.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub content: String,
    /// Creation timestamp in milliseconds since Unix epoch. Zero means the
    /// persisted record had no timestamp; normalized to load time.
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Input for creating a thread. Fields are trimmed and validated by the board.
#[derive(Debug, Clone)]
pub struct NewThread {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub content: String,
}

/// Input for creating a reply. Fields are trimmed and validated by the board.
#[derive(Debug, Clone)]
pub struct NewReply {
    pub author: String,
    pub content: String,
}
