//! Shelving routes.
//!
//! `/books/add` looks a work up by identifier, decodes it, probes the store,
//! and inserts one row. A failure at any step ends the request immediately:
//! a row is only ever written from a successfully decoded work after a
//! successful liveness probe.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{decode_classified_work, ClassifyClient};
use crate::http_server::errors::AppResult;
use crate::store::BookStore;

/// Book state shared across handlers
pub struct BookState {
    pub classify: Arc<ClassifyClient>,
    pub store: Arc<BookStore>,
}

#[derive(Debug, Deserialize)]
pub struct AddBookParams {
    /// Work identifier; not validated locally, the endpoint decides
    #[serde(default)]
    pub id: String,
}

/// Confirmation returned after a successful shelve
#[derive(Debug, Serialize)]
pub struct AddBookResponse {
    pub pk: i64,
    pub title: String,
    pub author: String,
    pub owi: String,
    pub classification: String,
}

/// Create book routes (nested under `/books`)
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/add", get(add_book_handler))
        .with_state(state)
}

async fn add_book_handler(
    State(state): State<Arc<BookState>>,
    Query(params): Query<AddBookParams>,
) -> AppResult<Json<AddBookResponse>> {
    let body = state.classify.fetch_by_identifier(&params.id).await?;
    let work = decode_classified_work(&body)?;

    state.store.ping()?;
    let pk = state
        .store
        .insert_book(&work.title, &work.author, &work.owi, &work.classification)?;

    debug!(pk, owi = %work.owi, "book shelved");

    Ok(Json(AddBookResponse {
        pk,
        title: work.title,
        author: work.author,
        owi: work.owi,
        classification: work.classification,
    }))
}
