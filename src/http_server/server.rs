//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::classify::ClassifyClient;
use crate::store::{BookStore, StoreError};

use super::book_routes::{book_routes, BookState};
use super::config::ServerConfig;
use super::health_routes::health_routes;
use super::page_routes::{page_routes, PageState};
use super::search_routes::{search_routes, SearchState};

/// HTTP server for the bookshelf application
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Result<Self, StoreError> {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServerConfig) -> Result<Self, StoreError> {
        let router = Self::build_router(&config)?;
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig) -> Result<Router, StoreError> {
        let base_url: Url = config
            .classify_base_url
            .parse()
            .expect("Invalid classify base URL");

        // One classify client and one store for the whole process, injected
        // into each route module's state.
        let classify = Arc::new(ClassifyClient::with_base_url(base_url));
        let store = Arc::new(BookStore::open(&config.database_path)?);

        let page_state = Arc::new(PageState {
            store: store.clone(),
        });
        let search_state = Arc::new(SearchState {
            classify: classify.clone(),
        });
        let book_state = Arc::new(BookState { classify, store });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Ok(Router::new()
            // Health check at root level
            .merge(health_routes())
            // Index page
            .merge(page_routes(page_state))
            // Title search
            .merge(search_routes(search_state))
            // Shelving routes under /books
            .nest("/books", book_routes(book_state))
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        println!("Starting bookshelf HTTP server on {}", addr);
        println!("Index page: http://{}/", addr);
        println!("Health check: http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> ServerConfig {
        ServerConfig {
            database_path: ":memory:".to_string(),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::with_config(in_memory_config()).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig {
            port: 3000,
            database_path: ":memory:".to_string(),
            ..ServerConfig::default()
        };
        let server = HttpServer::with_config(config).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::with_config(in_memory_config()).unwrap();
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
