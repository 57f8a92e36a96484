//! Tests for the JSON file-backed state store, including its soft-failure
//! contract and compatibility with records persisted by earlier versions.

use chemboard::board::{Category, ForumBoard, NewReply, NewThread, Thread};
use chemboard::store::StateStore;
use chemboard::wiki::WikiEntry;
use chemboard::THREADS_KEY;
use std::fs;
use tempfile::TempDir;

const NOW: u64 = 1_700_000_000_000;

fn temp_store() -> (TempDir, StateStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = StateStore::with_data_dir(dir.path()).expect("Failed to create store");
    (dir, store)
}

fn fallback_threads() -> Vec<Thread> {
    vec![Thread {
        id: uuid::Uuid::new_v4(),
        title: "fallback".to_string(),
        author: "Demo".to_string(),
        category: Category::Organic,
        content: "seed".to_string(),
        created_at: NOW,
        replies: Vec::new(),
    }]
}

#[test]
fn missing_key_yields_fallback() {
    let (_dir, store) = temp_store();
    let loaded = store.load(THREADS_KEY, fallback_threads());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "fallback");
}

#[test]
fn non_array_object_payload_yields_fallback() {
    let (dir, store) = temp_store();
    fs::write(
        dir.path().join(format!("{}.json", THREADS_KEY)),
        r#"{"not": "an array"}"#,
    )
    .unwrap();

    let loaded = store.load(THREADS_KEY, fallback_threads());
    assert_eq!(loaded[0].title, "fallback");
}

#[test]
fn string_payload_yields_fallback() {
    let (dir, store) = temp_store();
    fs::write(
        dir.path().join(format!("{}.json", THREADS_KEY)),
        r#""just a string""#,
    )
    .unwrap();

    let loaded = store.load(THREADS_KEY, fallback_threads());
    assert_eq!(loaded[0].title, "fallback");
}

#[test]
fn corrupt_json_yields_fallback() {
    let (dir, store) = temp_store();
    fs::write(
        dir.path().join(format!("{}.json", THREADS_KEY)),
        "[{ this is not json",
    )
    .unwrap();

    let loaded = store.load(THREADS_KEY, fallback_threads());
    assert_eq!(loaded[0].title, "fallback");
}

#[test]
fn reply_survives_save_and_reload() {
    let (dir, store) = temp_store();

    let mut board = ForumBoard::new();
    let id = board
        .create_thread(
            NewThread {
                title: "persistence check".to_string(),
                author: "Tester".to_string(),
                category: Category::Physical,
                content: "body".to_string(),
            },
            NOW,
        )
        .unwrap();
    board
        .add_reply(
            id,
            NewReply {
                author: "Replier".to_string(),
                content: "still here after reload".to_string(),
            },
        )
        .unwrap();
    store.try_save(THREADS_KEY, board.threads()).unwrap();

    // Fresh store over the same directory simulates a page reload.
    let reopened = StateStore::with_data_dir(dir.path()).unwrap();
    let loaded: Vec<Thread> = reopened.load(THREADS_KEY, Vec::new());
    let board = ForumBoard::from_records(loaded, NOW);

    let thread = board.thread(id).expect("thread survived reload");
    assert_eq!(thread.replies.len(), 1);
    assert_eq!(
        thread.replies.last().unwrap().content,
        "still here after reload"
    );
}

#[test]
fn legacy_records_without_ids_or_replies_load_with_defaults() {
    let (dir, store) = temp_store();

    // Shape written by the original site: camelCase timestamp, no id, and
    // one record with neither replies nor createdAt.
    fs::write(
        dir.path().join(format!("{}.json", THREADS_KEY)),
        r#"[
            {
                "title": "with replies",
                "author": "A",
                "category": "Organic",
                "content": "body",
                "createdAt": 1690000000000,
                "replies": [{"author": "B", "content": "re"}]
            },
            {
                "title": "bare record",
                "author": "C",
                "category": "Analytical",
                "content": "body"
            }
        ]"#,
    )
    .unwrap();

    let loaded: Vec<Thread> = store.load(THREADS_KEY, Vec::new());
    let board = ForumBoard::from_records(loaded, NOW);
    let threads = board.threads();

    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].created_at, 1_690_000_000_000);
    assert_eq!(threads[0].replies.len(), 1);
    assert_eq!(threads[1].created_at, NOW);
    assert!(threads[1].replies.is_empty());
    assert_ne!(threads[0].id, threads[1].id);
}

#[test]
fn wiki_entries_round_trip() {
    let (dir, store) = temp_store();
    let entries = vec![WikiEntry {
        id: uuid::Uuid::new_v4(),
        title: "Buffer capacity".to_string(),
        summary: "derivation".to_string(),
        tags: vec!["acid-base".to_string()],
    }];
    store.try_save("chem-aops-wiki", &entries).unwrap();

    let reopened = StateStore::with_data_dir(dir.path()).unwrap();
    let loaded: Vec<WikiEntry> = reopened.load("chem-aops-wiki", Vec::new());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, entries[0].id);
    assert_eq!(loaded[0].tags, vec!["acid-base"]);
}
