//! In-process stand-in for the article API, served on an ephemeral port.
//!
//! Runs an axum router on a background thread with its own tokio runtime so
//! both sync (GUI worker) and async (client) tests can talk to it.

use articlepad_core::models::article::{Article, ArticleSummary, ArticleUpdate, HistoryResponse};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;

/// Mutable backing state for the fake API.
#[derive(Debug, Default)]
pub struct FakeApiState {
    pub articles: BTreeMap<i64, Article>,
    /// Every update body received, in arrival order.
    pub updates: Vec<(i64, ArticleUpdate)>,
    /// Every username the history endpoint was queried with.
    pub history_requests: Vec<String>,
    /// Every `(id, username)` pair the delete endpoint received.
    pub deletes: Vec<(i64, String)>,
    /// Image bytes served under `/images/{key}`.
    pub images: HashMap<String, Vec<u8>>,
    pub fail_fetches: bool,
    pub fail_updates: bool,
    pub fail_history: bool,
}

type SharedState = Arc<Mutex<FakeApiState>>;

/// Handle to a running fake API; shuts the server down on drop.
pub struct FakeApi {
    addr: SocketAddr,
    state: SharedState,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

fn lock(state: &SharedState) -> MutexGuard<'_, FakeApiState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

async fn fetch_single_article(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = params.get("id").and_then(|id| id.parse::<i64>().ok()) else {
        return message(StatusCode::BAD_REQUEST, "Missing 'id' parameter");
    };
    let state = lock(&state);
    if state.fail_fetches {
        return message(StatusCode::INTERNAL_SERVER_ERROR, "fetch failed");
    }
    match state.articles.get(&id) {
        Some(article) => Json(article.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "Article not found"),
    }
}

async fn update_article(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
    Json(update): Json<ArticleUpdate>,
) -> Response {
    let Some(id) = params.get("id").and_then(|id| id.parse::<i64>().ok()) else {
        return message(StatusCode::BAD_REQUEST, "Missing 'id' parameter");
    };
    let mut state = lock(&state);
    state.updates.push((id, update.clone()));
    if state.fail_updates {
        return message(StatusCode::BAD_REQUEST, "Error updating article");
    }
    if let Some(article) = state.articles.get_mut(&id) {
        article.article = update.new_article;
        article.title = update.new_title;
        article.entities = update.new_entities;
    }
    message(StatusCode::OK, "Article updated successfully!")
}

async fn fetch_generated_history(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(username) = params.get("username").filter(|name| !name.is_empty()) else {
        return message(StatusCode::BAD_REQUEST, "Username is required");
    };
    let mut state = lock(&state);
    state.history_requests.push(username.clone());
    if state.fail_history {
        return message(StatusCode::NOT_FOUND, "User not found");
    }
    let data = state
        .articles
        .values()
        .rev()
        .map(|article| ArticleSummary {
            id: article.id,
            title: article.title.clone(),
            entities: article.entities.clone(),
            created_time_ts: article.created_time_ts.clone(),
            updated_time_ts: article.updated_time_ts.clone(),
            image_url: article.image_url.clone(),
        })
        .collect();
    Json(HistoryResponse {
        message: Some("Fetched active articles successfully".to_string()),
        data,
    })
    .into_response()
}

async fn delete_article(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = params.get("id").and_then(|id| id.parse::<i64>().ok());
    let username = params.get("username").filter(|name| !name.is_empty());
    let (Some(id), Some(username)) = (id, username) else {
        return message(
            StatusCode::BAD_REQUEST,
            "Missing required parameters. Both 'id' and 'username' are required.",
        );
    };
    let mut state = lock(&state);
    state.deletes.push((id, username.clone()));
    match state.articles.remove(&id) {
        Some(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Article deleted successfully", "article_id": id })),
        )
            .into_response(),
        None => message(
            StatusCode::NOT_FOUND,
            &format!("Article with id {} not found or already deleted", id),
        ),
    }
}

async fn download_article(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = params.get("id").and_then(|id| id.parse::<i64>().ok()) else {
        return message(StatusCode::BAD_REQUEST, "Missing 'id'");
    };
    match lock(&state).articles.get(&id) {
        Some(article) => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"article_{}.txt\"", id),
                ),
            ],
            article.article.clone(),
        )
            .into_response(),
        None => message(StatusCode::NOT_FOUND, "Article not found"),
    }
}

async fn serve_image(State(state): State<SharedState>, Path(path): Path<String>) -> Response {
    match lock(&state).images.get(&path) {
        Some(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "image not found"),
    }
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/fetch-single-article", get(fetch_single_article))
        .route("/update-article", post(update_article))
        .route("/fetch-generated-history", get(fetch_generated_history))
        .route("/delete-article", delete(delete_article))
        .route("/download-article", get(download_article))
        .route("/images/*path", get(serve_image))
        .with_state(state)
}

impl FakeApi {
    /// Start an empty fake API on `127.0.0.1:0`.
    ///
    /// # Panics
    /// Panics if the runtime, socket, or thread cannot be created.
    pub fn start() -> Self {
        Self::with_articles(Vec::new())
    }

    /// Start a fake API pre-populated with `articles`.
    ///
    /// # Panics
    /// Panics if the runtime, socket, or thread cannot be created.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let state: SharedState = Arc::new(Mutex::new(FakeApiState {
            articles: articles
                .into_iter()
                .map(|article| (article.id, article))
                .collect(),
            ..FakeApiState::default()
        }));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let server_state = state.clone();

        let thread = thread::Builder::new()
            .name("articlepad-fake-api".into())
            .spawn(move || {
                let rt = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(1)
                    .enable_all()
                    .build()
                    .expect("fake api runtime");
                let listener = rt
                    .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
                    .expect("bind fake api");
                let addr = listener.local_addr().expect("fake api addr");
                let _ = ready_tx.send(addr);
                let shutdown = async {
                    let _ = shutdown_rx.await;
                };
                let _ = rt.block_on(async move {
                    axum::serve(listener, router(server_state))
                        .with_graceful_shutdown(shutdown)
                        .await
                });
            })
            .expect("spawn fake api thread");

        let addr = ready_rx.recv().expect("fake api ready");
        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// `http://127.0.0.1:{port}`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Lock the backing state for inspection or mutation.
    pub fn state(&self) -> MutexGuard<'_, FakeApiState> {
        lock(&self.state)
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
