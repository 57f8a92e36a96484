//! # Chemboard - community boards for chemistry-olympiad prep
//!
//! State and rendering support for a small community site: a discussion
//! forum with categorized threads and nested replies, and a wiki of short
//! reference articles with free-text search.
//!
//! ## Design
//!
//! - **Explicit state**: each board is a plain struct owning its collection
//!   and view axes (filter, sort order, search query). Nothing lives in
//!   module-level globals, so the boards are testable in isolation.
//! - **Stable identity**: threads and wiki entries carry a UUID assigned at
//!   creation time; all mutations address content by id, never by position
//!   in the rendered list.
//! - **Soft persistence**: collections are snapshotted to JSON files after
//!   every mutation. Storage failures are logged and absorbed; the
//!   in-memory state remains the source of truth for the session.
//!
//! ## Example
//!
//! ```rust
//! use chemboard::board::{Category, ForumBoard, NewThread};
//!
//! let mut board = ForumBoard::new();
//! board.create_thread(
//!     NewThread {
//!         title: "Hess's law shortcuts".to_string(),
//!         author: "EnthalpyFan".to_string(),
//!         category: Category::Physical,
//!         content: "Which cycle decompositions save the most time?".to_string(),
//!     },
//!     1_700_000_000_000,
//! )?;
//! assert_eq!(board.visible_threads().len(), 1);
//! # Ok::<(), chemboard::ChemboardError>(())
//! ```

pub mod board;
pub mod demo;
pub mod error;
pub mod store;
pub mod timefmt;
pub mod validation;
pub mod wiki;

pub use error::{ChemboardError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key for the thread collection.
pub const THREADS_KEY: &str = "chem-aops-threads";

/// Storage key for the wiki collection.
pub const WIKI_KEY: &str = "chem-aops-wiki";
