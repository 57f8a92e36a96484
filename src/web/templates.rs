//! Askama templates for the chemboard web interface

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

/// Reply for display
#[derive(Debug, Clone)]
pub struct ReplyDisplayInfo {
    pub author: String,
    pub content: String,
}

/// Thread for display
#[derive(Debug, Clone)]
pub struct ThreadDisplayInfo {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    pub created_at_display: String,
    pub replies: Vec<ReplyDisplayInfo>,
    pub reply_count: usize,
    pub expanded: bool,
}

/// Category filter control for display
#[derive(Debug, Clone)]
pub struct FilterDisplayInfo {
    pub label: String,
    pub is_active: bool,
}

/// Wiki entry for display
#[derive(Debug, Clone)]
pub struct WikiEntryDisplayInfo {
    pub title: String,
    pub summary: String,
    pub tags_display: String,
}

/// Home panel template
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub active_page: String,
}

/// Forum panel template
#[derive(Template)]
#[template(path = "forum.html")]
pub struct ForumTemplate {
    pub active_page: String,
    pub filters: Vec<FilterDisplayInfo>,
    pub categories: Vec<String>,
    pub sort: String,
    pub threads: Vec<ThreadDisplayInfo>,
    pub error: Option<String>,
    pub has_error: bool,
}

/// Wiki panel template
#[derive(Template)]
#[template(path = "wiki.html")]
pub struct WikiTemplate {
    pub active_page: String,
    pub query: String,
    pub entries: Vec<WikiEntryDisplayInfo>,
    pub error: Option<String>,
    pub has_error: bool,
}

/// Renders a template to a response, mapping render failures to a 500.
pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
