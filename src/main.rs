//! bookshelf entry point
//!
//! Initializes tracing, builds the HTTP server from the default
//! configuration, and serves until the process is stopped. All request
//! handling lives in the `http_server` module.

use tracing_subscriber::EnvFilter;

use bookshelf::http_server::HttpServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let server = match HttpServer::new() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
