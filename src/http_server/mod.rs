//! # HTTP Front Door
//!
//! Axum server exposing the bookshelf routes.
//!
//! # Endpoints
//!
//! - `/` - Index page (rendered HTML)
//! - `/search` - Title search against the classification API (JSON)
//! - `/books/add` - Classify a work by identifier and shelve it
//! - `/health` - Health check

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod page_routes;
pub mod search_routes;
pub mod server;

pub use config::ServerConfig;
pub use errors::{AppError, AppResult};
pub use server::HttpServer;
