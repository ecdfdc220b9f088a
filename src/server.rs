//! HTTP surface: expansion, detection and search over axum.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /health` | `OK` |
//! | `GET /expand?q=` | [`ExpandResponse`] |
//! | `GET /detect?q=` | [`DetectResponse`] |
//! | `GET /topics` | the topic table |
//! | `GET /search?q=&limit=&expand=` | [`SearchResponse`] |

use crate::api::{run_search, DetectResponse, ExpandResponse, SearchResponse};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use truthserum_core::{config::SearchConfig, config::MAX_LIMIT, TopicEntry, TopicTable};
use truthserum_search::{SearchError, SearchRequest, TextStore};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct AppState {
    pub store: Arc<dyn TextStore>,
    pub search: SearchConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn TextStore>, search: SearchConfig) -> Self {
        Self { store, search }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::BadRequest(_)
            | ServerError::Search(SearchError::NoFields | SearchError::InvalidLimit { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Search(_) | ServerError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::warn!(error = %self, "server: request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/expand", get(expand))
        .route("/detect", get(detect))
        .route("/topics", get(topics))
        .route("/search", get(search))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "server: listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}

/// Resolve once `signal` fires. If the handler could not be installed, log it
/// and keep serving; the process can still be stopped from outside.
async fn shutdown_on<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("server: shutting down"),
        Err(err) => {
            tracing::warn!(error = %err, "server: ctrl-c handler unavailable, graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TextParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
    expand: Option<bool>,
}

async fn health() -> &'static str {
    "OK"
}

async fn expand(Query(params): Query<TextParams>) -> Json<ExpandResponse> {
    Json(TopicTable::global().expand(&params.q).into())
}

async fn detect(Query(params): Query<TextParams>) -> Json<DetectResponse> {
    let topic = TopicTable::global().detect(&params.q);
    Json(DetectResponse { query: params.q, topic })
}

async fn topics() -> Json<Vec<TopicEntry>> {
    Json(TopicTable::global().iter().collect())
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ServerError> {
    if params.q.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "query parameter 'q' is required".to_string(),
        ));
    }

    let limit = params.limit.unwrap_or(state.search.limit).clamp(1, MAX_LIMIT);
    let request = SearchRequest::builder(params.q.as_str())
        .fields(state.search.fields.iter().copied())
        .expand(params.expand.unwrap_or(state.search.expand))
        .min_query_len(state.search.min_query_len)
        .limit(limit)
        .build()?;

    let response = match request {
        // The store scan is CPU-bound; keep it off the async workers.
        Some(request) => {
            let store = Arc::clone(&state.store);
            tokio::task::spawn_blocking(move || run_search(store.as_ref(), &request)).await??
        }
        None => SearchResponse::empty(&params.q),
    };
    tracing::debug!(query = %response.query, total = response.total, "server: search");
    Ok(Json(response))
}
