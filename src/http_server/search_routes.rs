//! Title search route.
//!
//! Forwards the query to the classification API and returns the decoded
//! results as a JSON array. The first failing step ends the request with a
//! 500 and the error text as body.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::classify::{decode_search_results, ClassifyClient, SearchResult};
use crate::http_server::errors::AppResult;

/// Search state shared across handlers
pub struct SearchState {
    pub classify: Arc<ClassifyClient>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Title query; an empty string is legal and forwarded as-is
    #[serde(default)]
    pub search: String,
}

/// Create search routes
pub fn search_routes(state: Arc<SearchState>) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .with_state(state)
}

async fn search_handler(
    State(state): State<Arc<SearchState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchResult>>> {
    let body = state.classify.search_by_title(&params.search).await?;
    let results = decode_search_results(&body)?;

    Ok(Json(results))
}
