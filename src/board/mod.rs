//! Discussion board with categorized threads and nested replies.
//!
//! The board owns three independent view axes on top of the thread
//! collection: the active category filter, the sort order, and a transient
//! side-table of which reply panels are expanded. Mutations address threads
//! by their stable id, never by render position.

mod forum;
mod thread;

pub use forum::ForumBoard;
pub use thread::{Category, CategoryFilter, NewReply, NewThread, Reply, SortOrder, Thread};
