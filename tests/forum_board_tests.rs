//! Behavioral tests for the discussion board state.
//!
//! These cover the board's three view axes (filter, sort, reply-panel
//! visibility) and the create/reply mutations, including the rejection
//! paths that must leave the collection untouched.

use chemboard::board::{
    Category, CategoryFilter, ForumBoard, NewReply, NewThread, Reply, SortOrder, Thread,
};
use chemboard::ChemboardError;
use uuid::Uuid;

const NOW: u64 = 1_700_000_000_000;

/// Helper to build a thread record directly, bypassing form validation.
fn thread_record(title: &str, category: Category, created_at: u64) -> Thread {
    Thread {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: "Tester".to_string(),
        category,
        content: "body".to_string(),
        created_at,
        replies: Vec::new(),
    }
}

/// Helper to build a valid new-thread submission.
fn new_thread(title: &str, category: Category) -> NewThread {
    NewThread {
        title: title.to_string(),
        author: "Tester".to_string(),
        category,
        content: "body".to_string(),
    }
}

#[test]
fn create_thread_prepends_with_fresh_id_and_empty_replies() {
    let mut board = ForumBoard::new();
    board
        .create_thread(new_thread("first", Category::Organic), NOW)
        .unwrap();
    let id = board
        .create_thread(new_thread("second", Category::Physical), NOW + 1)
        .unwrap();

    let threads = board.threads();
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].title, "second");
    assert_eq!(threads[0].id, id);
    assert!(threads[0].replies.is_empty());
    assert_eq!(threads[0].created_at, NOW + 1);
    assert_ne!(threads[0].id, threads[1].id);
}

#[test]
fn create_thread_trims_fields() {
    let mut board = ForumBoard::new();
    board
        .create_thread(
            NewThread {
                title: "  Hess cycles  ".to_string(),
                author: " EnthalpyFan ".to_string(),
                category: Category::Physical,
                content: " which decompositions? ".to_string(),
            },
            NOW,
        )
        .unwrap();

    let thread = &board.threads()[0];
    assert_eq!(thread.title, "Hess cycles");
    assert_eq!(thread.author, "EnthalpyFan");
    assert_eq!(thread.content, "which decompositions?");
}

#[test]
fn create_thread_with_empty_title_leaves_collection_unchanged() {
    let mut board = ForumBoard::new();
    let result = board.create_thread(
        NewThread {
            title: "   ".to_string(),
            author: "Tester".to_string(),
            category: Category::Organic,
            content: "body".to_string(),
        },
        NOW,
    );

    assert!(matches!(result, Err(ChemboardError::Validation(_))));
    assert!(board.threads().is_empty());
}

#[test]
fn create_thread_with_oversized_title_is_rejected() {
    let mut board = ForumBoard::new();
    let result = board.create_thread(new_thread(&"x".repeat(500), Category::Organic), NOW);
    assert!(matches!(result, Err(ChemboardError::Validation(_))));
    assert!(board.threads().is_empty());
}

#[test]
fn add_reply_appends_as_last_element() {
    let mut board = ForumBoard::new();
    let id = board
        .create_thread(new_thread("titration tips", Category::Analytical), NOW)
        .unwrap();

    board
        .add_reply(
            id,
            NewReply {
                author: "First".to_string(),
                content: "one".to_string(),
            },
        )
        .unwrap();
    board
        .add_reply(
            id,
            NewReply {
                author: "Second".to_string(),
                content: "two".to_string(),
            },
        )
        .unwrap();

    let replies = &board.thread(id).unwrap().replies;
    assert_eq!(replies.len(), 2);
    assert_eq!(
        replies.last().unwrap(),
        &Reply {
            author: "Second".to_string(),
            content: "two".to_string(),
        }
    );
}

#[test]
fn add_reply_with_empty_content_is_rejected() {
    let mut board = ForumBoard::new();
    let id = board
        .create_thread(new_thread("t", Category::Organic), NOW)
        .unwrap();

    let result = board.add_reply(
        id,
        NewReply {
            author: "Someone".to_string(),
            content: "  ".to_string(),
        },
    );

    assert!(matches!(result, Err(ChemboardError::Validation(_))));
    assert!(board.thread(id).unwrap().replies.is_empty());
}

#[test]
fn add_reply_to_unknown_id_is_not_found() {
    let mut board = ForumBoard::new();
    board
        .create_thread(new_thread("t", Category::Organic), NOW)
        .unwrap();

    let stale = Uuid::new_v4();
    let result = board.add_reply(
        stale,
        NewReply {
            author: "Someone".to_string(),
            content: "late reply".to_string(),
        },
    );

    assert!(matches!(result, Err(ChemboardError::ThreadNotFound(id)) if id == stale));
    assert!(board.threads()[0].replies.is_empty());
}

#[test]
fn category_filter_keeps_matching_threads_in_newest_order() {
    let board = ForumBoard::from_records(
        vec![
            thread_record("organic newest", Category::Organic, NOW + 300),
            thread_record("analytical", Category::Analytical, NOW + 200),
            thread_record("organic oldest", Category::Organic, NOW + 100),
        ],
        NOW,
    );

    let mut board = board;
    board.set_filter(CategoryFilter::Category(Category::Organic));

    let visible: Vec<&str> = board
        .visible_threads()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["organic newest", "organic oldest"]);
}

#[test]
fn filter_with_no_matches_yields_empty_list() {
    let mut board = ForumBoard::from_records(
        vec![thread_record("organic", Category::Organic, NOW)],
        NOW,
    );
    board.set_filter(CategoryFilter::Category(Category::Inorganic));
    assert!(board.visible_threads().is_empty());
}

#[test]
fn oldest_sort_reverses_the_ordering() {
    let mut board = ForumBoard::from_records(
        vec![
            thread_record("newest", Category::Organic, NOW + 300),
            thread_record("middle", Category::Physical, NOW + 200),
            thread_record("oldest", Category::Organic, NOW + 100),
        ],
        NOW,
    );

    board.set_sort(SortOrder::Oldest);
    let visible: Vec<&str> = board
        .visible_threads()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["oldest", "middle", "newest"]);

    board.set_sort(SortOrder::Newest);
    let visible: Vec<&str> = board
        .visible_threads()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["newest", "middle", "oldest"]);
}

#[test]
fn records_without_timestamps_are_backfilled_on_load() {
    let board = ForumBoard::from_records(
        vec![thread_record("legacy", Category::Organic, 0)],
        NOW,
    );
    assert_eq!(board.threads()[0].created_at, NOW);
}

#[test]
fn reply_panels_default_to_expanded_and_toggle_independently() {
    let mut board = ForumBoard::new();
    let first = board
        .create_thread(new_thread("first", Category::Organic), NOW)
        .unwrap();
    let second = board
        .create_thread(new_thread("second", Category::Organic), NOW)
        .unwrap();

    assert!(board.replies_expanded(first));
    assert!(board.replies_expanded(second));

    assert!(!board.toggle_replies(first));
    assert!(!board.replies_expanded(first));
    assert!(board.replies_expanded(second));
}

#[test]
fn toggle_state_survives_unrelated_mutations() {
    let mut board = ForumBoard::new();
    let first = board
        .create_thread(new_thread("first", Category::Organic), NOW)
        .unwrap();
    let second = board
        .create_thread(new_thread("second", Category::Analytical), NOW)
        .unwrap();

    board.toggle_replies(first);
    board
        .add_reply(
            second,
            NewReply {
                author: "Someone".to_string(),
                content: "reply".to_string(),
            },
        )
        .unwrap();
    board.set_filter(CategoryFilter::Category(Category::Organic));

    assert!(!board.replies_expanded(first));
}
