//! Index page route.
//!
//! Renders the landing page with a greeting and the current store status.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::http_server::errors::AppResult;
use crate::store::BookStore;

/// Display name used when no `name` query parameter is given
const DEFAULT_DISPLAY_NAME: &str = "Reader";

/// Page state shared across handlers
pub struct PageState {
    pub store: Arc<BookStore>,
}

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    name: String,
    db_status: bool,
}

/// Create page routes
pub fn page_routes(state: Arc<PageState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .with_state(state)
}

async fn index_handler(
    State(state): State<Arc<PageState>>,
    Query(params): Query<IndexParams>,
) -> AppResult<Html<String>> {
    // An empty name falls back to the default, same as an absent one.
    let name = params
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    let page = IndexTemplate {
        name,
        db_status: state.store.is_reachable(),
    };

    Ok(Html(page.render()?))
}
