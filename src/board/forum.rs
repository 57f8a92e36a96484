//! In-memory state for the discussion board.

use crate::board::thread::{CategoryFilter, NewReply, NewThread, Reply, SortOrder, Thread};
use crate::error::{ChemboardError, Result};
use crate::validation::{require_field, MAX_AUTHOR_LENGTH, MAX_BODY_LENGTH, MAX_TITLE_LENGTH};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Discussion board state: the thread collection plus its view axes.
///
/// Invariant: every thread held here has a nonzero `created_at` and an
/// array-typed `replies` field. Persisted records are normalized once in
/// [`ForumBoard::from_records`], so rendering never has to repair data.
#[derive(Debug, Default)]
pub struct ForumBoard {
    threads: Vec<Thread>,
    filter: CategoryFilter,
    sort: SortOrder,
    /// Transient per-thread reply-panel visibility, keyed by thread id so it
    /// survives re-renders. Never persisted; absent means expanded.
    expanded: HashMap<Uuid, bool>,
}

impl ForumBoard {
    /// Creates an empty board with default view axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from persisted records, backfilling missing timestamps
    /// with `now`. Missing ids and reply arrays are already defaulted during
    /// deserialization.
    pub fn from_records(records: Vec<Thread>, now: u64) -> Self {
        let threads = records
            .into_iter()
            .map(|mut thread| {
                if thread.created_at == 0 {
                    thread.created_at = now;
                }
                thread
            })
            .collect();
        Self {
            threads,
            ..Self::default()
        }
    }

    /// The full thread collection in insertion order (newest first).
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    /// Looks up a thread by id.
    pub fn thread(&self, id: Uuid) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Threads passing the active filter, stable-sorted by creation time
    /// according to the active sort order. An empty result is the caller's
    /// cue to render an empty-state placeholder.
    pub fn visible_threads(&self) -> Vec<&Thread> {
        let mut visible: Vec<&Thread> = self
            .threads
            .iter()
            .filter(|t| self.filter.matches(t.category))
            .collect();
        match self.sort {
            SortOrder::Newest => visible.sort_by_key(|t| std::cmp::Reverse(t.created_at)),
            SortOrder::Oldest => visible.sort_by_key(|t| t.created_at),
        }
        visible
    }

    /// Validates and prepends a new thread, returning its id.
    ///
    /// Title, author, and content must be non-empty after trimming. On any
    /// validation failure the collection is left unchanged.
    pub fn create_thread(&mut self, new: NewThread, now: u64) -> Result<Uuid> {
        let title = require_field("title", &new.title, MAX_TITLE_LENGTH)?;
        let author = require_field("author", &new.author, MAX_AUTHOR_LENGTH)?;
        let content = require_field("content", &new.content, MAX_BODY_LENGTH)?;

        let thread = Thread {
            id: Uuid::new_v4(),
            title,
            author,
            category: new.category,
            content,
            created_at: now,
            replies: Vec::new(),
        };
        let id = thread.id;
        self.threads.insert(0, thread);

        info!("Created thread {} in category {}", id, new.category);
        Ok(id)
    }

    /// Validates and appends a reply to the thread with the given id.
    ///
    /// Author and content must be non-empty after trimming; an unknown id is
    /// a [`ChemboardError::ThreadNotFound`]. Either failure leaves the
    /// collection unchanged.
    pub fn add_reply(&mut self, thread_id: Uuid, new: NewReply) -> Result<()> {
        let author = require_field("author", &new.author, MAX_AUTHOR_LENGTH)?;
        let content = require_field("content", &new.content, MAX_BODY_LENGTH)?;

        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(ChemboardError::ThreadNotFound(thread_id))?;
        thread.replies.push(Reply { author, content });

        debug!(
            thread = %thread_id,
            replies = thread.replies.len(),
            "appended reply"
        );
        Ok(())
    }

    /// Whether the reply panel for a thread is expanded. Expanded by default.
    pub fn replies_expanded(&self, thread_id: Uuid) -> bool {
        self.expanded.get(&thread_id).copied().unwrap_or(true)
    }

    /// Flips the reply panel for a thread, returning the new expanded state.
    pub fn toggle_replies(&mut self, thread_id: Uuid) -> bool {
        let expanded = !self.replies_expanded(thread_id);
        self.expanded.insert(thread_id, expanded);
        expanded
    }
}
