//! Wiki web handlers for the chemboard web interface.

use crate::templates::{render_template, WikiEntryDisplayInfo, WikiTemplate};
use crate::AppState;
use axum::extract::{Form, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use chemboard::wiki::{NewEntry, WikiBoard};
use chemboard::WIKI_KEY;
use serde::Deserialize;

/// Query parameters for the wiki list page
#[derive(Debug, Deserialize)]
pub struct WikiListQuery {
    q: Option<String>,
}

/// Form data for creating a wiki entry
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    title: String,
    summary: String,
    #[serde(default)]
    tags: String,
}

/// Renders the wiki panel from the current board state.
fn render_wiki(wiki: &WikiBoard, error: Option<String>) -> Response {
    let entries = wiki
        .visible_entries()
        .into_iter()
        .map(|entry| WikiEntryDisplayInfo {
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            tags_display: if entry.tags.is_empty() {
                "untagged".to_string()
            } else {
                entry.tags.join(" \u{2022} ")
            },
        })
        .collect();

    let template = WikiTemplate {
        active_page: "wiki".to_string(),
        query: wiki.query().to_string(),
        entries,
        has_error: error.is_some(),
        error,
    };
    render_template(template)
}

/// GET /wiki - entry list, optionally updating the search query.
pub async fn wiki_page(State(state): State<AppState>, Query(query): Query<WikiListQuery>) -> Response {
    let mut wiki = state.wiki.write().await;
    if let Some(q) = query.q {
        wiki.set_query(q);
    }
    render_wiki(&wiki, None)
}

/// POST /wiki/entry - create an entry from the submission form.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Form(form): Form<NewEntryForm>,
) -> Response {
    let mut wiki = state.wiki.write().await;

    let new_entry = NewEntry {
        title: form.title,
        summary: form.summary,
        tags: form.tags,
    };
    match wiki.create_entry(new_entry) {
        Ok(_) => {
            state.store.save(WIKI_KEY, wiki.entries());
            Redirect::to("/wiki").into_response()
        }
        Err(e) => render_wiki(&wiki, Some(e.to_string())),
    }
}
