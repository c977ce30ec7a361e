//! Static page server.
//!
//! Serves the page's own files from one directory. No other routes.

use crate::config::Config;

use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Router serving `static_dir` (with `index.html` for directory requests).
pub fn router(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:<port>` and serve until Ctrl-C.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        static_dir = %config.static_dir.display(),
        "listening on port {}",
        config.port
    );

    axum::serve(listener, router(&config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
