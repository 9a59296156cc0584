use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::fetch_news))
        .route("/api/news/paginated", get(handlers::fetch_news_paginated))
        .route("/api/news/custom", get(handlers::fetch_news_with_custom_path))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> news_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        news_core::Error::Configuration(format!("Failed to bind {}: {}", addr, e))
    })?;
    info!("🌐 Listening on http://{}", addr);
    axum::serve(listener, create_app(state))
        .await
        .map_err(|e| news_core::Error::External(e.into()))
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use news_core::{Article, Error, Result};
}
