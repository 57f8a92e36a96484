//! Forum web handlers for the chemboard web interface.
//!
//! Every successful mutation persists the full thread collection and
//! redirects back to the list page; validation failures re-render the page
//! with the message in the error slot.

use crate::templates::{
    render_template, FilterDisplayInfo, ForumTemplate, ReplyDisplayInfo, ThreadDisplayInfo,
};
use crate::AppState;
use axum::extract::{Form, Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use chemboard::board::{Category, CategoryFilter, ForumBoard, NewReply, NewThread, SortOrder};
use chemboard::timefmt::{current_timestamp_millis, format_relative_time};
use chemboard::THREADS_KEY;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

/// Query parameters for the forum list page
#[derive(Debug, Deserialize)]
pub struct ForumListQuery {
    filter: Option<String>,
    sort: Option<String>,
}

/// Form data for creating a thread
#[derive(Debug, Deserialize)]
pub struct NewThreadForm {
    title: String,
    author: String,
    category: String,
    content: String,
}

/// Form data for creating a reply
#[derive(Debug, Deserialize)]
pub struct NewReplyForm {
    author: String,
    content: String,
}

/// Renders the forum panel from the current board state.
fn render_forum(forum: &ForumBoard, error: Option<String>) -> Response {
    let now = current_timestamp_millis();

    let threads = forum
        .visible_threads()
        .into_iter()
        .map(|thread| ThreadDisplayInfo {
            id: thread.id.to_string(),
            title: thread.title.clone(),
            author: thread.author.clone(),
            category: thread.category.to_string(),
            content: thread.content.clone(),
            created_at_display: format_relative_time(Some(thread.created_at), now),
            replies: thread
                .replies
                .iter()
                .map(|reply| ReplyDisplayInfo {
                    author: reply.author.clone(),
                    content: reply.content.clone(),
                })
                .collect(),
            reply_count: thread.replies.len(),
            expanded: forum.replies_expanded(thread.id),
        })
        .collect();

    let mut filters = vec![FilterDisplayInfo {
        label: "All".to_string(),
        is_active: forum.filter() == CategoryFilter::All,
    }];
    filters.extend(Category::ALL.iter().map(|c| FilterDisplayInfo {
        label: c.to_string(),
        is_active: forum.filter() == CategoryFilter::Category(*c),
    }));

    let template = ForumTemplate {
        active_page: "forum".to_string(),
        filters,
        categories: Category::ALL.iter().map(|c| c.to_string()).collect(),
        sort: forum.sort().to_string(),
        threads,
        has_error: error.is_some(),
        error,
    };
    render_template(template)
}

/// GET /forum - thread list, optionally switching filter and sort axes.
pub async fn forum_page(
    State(state): State<AppState>,
    Query(query): Query<ForumListQuery>,
) -> Response {
    let mut forum = state.forum.write().await;

    // Unrecognized filter/sort values leave the current axes untouched.
    if let Some(raw) = query.filter.as_deref() {
        match raw.parse::<CategoryFilter>() {
            Ok(filter) => forum.set_filter(filter),
            Err(e) => warn!("Ignoring filter parameter: {}", e),
        }
    }
    if let Some(raw) = query.sort.as_deref() {
        match raw.parse::<SortOrder>() {
            Ok(sort) => forum.set_sort(sort),
            Err(e) => warn!("Ignoring sort parameter: {}", e),
        }
    }

    render_forum(&forum, None)
}

/// POST /forum/thread - create a thread from the submission form.
pub async fn create_thread_handler(
    State(state): State<AppState>,
    Form(form): Form<NewThreadForm>,
) -> Response {
    let mut forum = state.forum.write().await;

    let category = match form.category.parse::<Category>() {
        Ok(category) => category,
        Err(e) => return render_forum(&forum, Some(e.to_string())),
    };

    let new_thread = NewThread {
        title: form.title,
        author: form.author,
        category,
        content: form.content,
    };
    match forum.create_thread(new_thread, current_timestamp_millis()) {
        Ok(_) => {
            state.store.save(THREADS_KEY, forum.threads());
            Redirect::to("/forum").into_response()
        }
        Err(e) => render_forum(&forum, Some(e.to_string())),
    }
}

/// POST /forum/thread/:thread_id/reply - append a reply to a thread.
pub async fn create_reply_handler(
    State(state): State<AppState>,
    Path(thread_id): Path<Uuid>,
    Form(form): Form<NewReplyForm>,
) -> Response {
    let mut forum = state.forum.write().await;

    let new_reply = NewReply {
        author: form.author,
        content: form.content,
    };
    match forum.add_reply(thread_id, new_reply) {
        Ok(()) => {
            state.store.save(THREADS_KEY, forum.threads());
            Redirect::to("/forum").into_response()
        }
        Err(e) => render_forum(&forum, Some(e.to_string())),
    }
}

/// POST /forum/thread/:thread_id/toggle - flip a reply panel.
pub async fn toggle_replies_handler(
    State(state): State<AppState>,
    Path(thread_id): Path<Uuid>,
) -> Response {
    let mut forum = state.forum.write().await;
    forum.toggle_replies(thread_id);
    Redirect::to("/forum").into_response()
}
