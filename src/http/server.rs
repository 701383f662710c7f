//! HTTP server exposing the recommendation API and the embedded UI

use super::handler::{options_handler, recommend_handler, status_handler};
use crate::config::HttpConfig;
use crate::recommend::Recommender;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(content) => {
            Html(String::from_utf8_lossy(content.data.as_ref()).into_owned()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "index.html not embedded").into_response(),
    }
}

/// HTTP server over a shared recommendation service
pub struct HttpServer {
    recommender: Arc<Recommender>,
    bind: String,
    port: u16,
}

impl HttpServer {
    pub fn new(recommender: Arc<Recommender>, config: &HttpConfig) -> Self {
        Self {
            recommender,
            bind: config.bind.clone(),
            port: config.port,
        }
    }

    /// Build the route table; shared with the handler tests.
    pub fn router(recommender: Arc<Recommender>) -> Router {
        Router::new()
            .route("/", get(static_handler))
            .route("/api/options", get(options_handler))
            .route("/api/recommend", get(recommend_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(recommender)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> std::io::Result<()> {
        let app = Self::router(Arc::clone(&self.recommender));

        let addr = format!("{}:{}", self.bind, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("recommendation API listening on http://{}", addr);

        axum::serve(listener, app).await
    }
}
