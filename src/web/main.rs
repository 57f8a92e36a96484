//! Web server binary for chemboard - forum and wiki boards for a
//! chemistry-olympiad community site.

use axum::routing::{get, post};
use axum::Router;
use chemboard::board::ForumBoard;
use chemboard::demo::{demo_threads, demo_wiki};
use chemboard::store::StateStore;
use chemboard::timefmt::current_timestamp_millis;
use chemboard::wiki::WikiBoard;
use chemboard::{THREADS_KEY, WIKI_KEY};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod forum_handlers;
mod templates;
mod wiki_handlers;

use templates::{render_template, HomeTemplate};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StateStore>,
    pub forum: Arc<RwLock<ForumBoard>>,
    pub wiki: Arc<RwLock<WikiBoard>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"StateStore { ... }")
            .field("forum", &"ForumBoard { ... }")
            .field("wiki", &"WikiBoard { ... }")
            .finish()
    }
}

/// Home panel.
async fn index() -> axum::response::Response {
    render_template(HomeTemplate {
        active_page: "home".to_string(),
    })
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemboard=info,tower_http=debug".into()),
        )
        .init();

    let store = Arc::new(StateStore::new()?);

    // Load persisted collections, seeding demo content on first run.
    let now = current_timestamp_millis();
    let threads = store.load(THREADS_KEY, demo_threads(now));
    let entries = store.load(WIKI_KEY, demo_wiki());
    info!(
        "Loaded {} thread(s) and {} wiki entries",
        threads.len(),
        entries.len()
    );

    let app_state = AppState {
        store,
        forum: Arc::new(RwLock::new(ForumBoard::from_records(threads, now))),
        wiki: Arc::new(RwLock::new(WikiBoard::from_records(entries))),
    };

    // Build our application with routes
    let app = Router::new()
        .route("/", get(index))
        .route("/forum", get(forum_handlers::forum_page))
        .route("/forum/thread", post(forum_handlers::create_thread_handler))
        .route(
            "/forum/thread/:thread_id/reply",
            post(forum_handlers::create_reply_handler),
        )
        .route(
            "/forum/thread/:thread_id/toggle",
            post(forum_handlers::toggle_replies_handler),
        )
        .route("/wiki", get(wiki_handlers::wiki_page))
        .route("/wiki/entry", post(wiki_handlers::create_entry_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(app_state);

    let addr = std::env::var("CHEMBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Chemboard web interface listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
