//! HTTP handlers for the recommendation API

use crate::recommend::{QueryOptions, Recommender};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Query parameters of `/api/recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub industry: String,
}

/// Handler for the four-way recommendation query
pub async fn recommend_handler(
    State(recommender): State<Arc<Recommender>>,
    Query(params): Query<RecommendParams>,
) -> impl IntoResponse {
    let province = params.province.trim();
    let industry = params.industry.trim();
    if province.is_empty() || industry.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "missing 'province' or 'industry' parameter" })),
        )
            .into_response();
    }

    let set = recommender.recommend(province, industry).await;
    Json(&*set).into_response()
}

/// Handler for dropdown option lists
pub async fn options_handler(
    State(recommender): State<Arc<Recommender>>,
) -> Json<QueryOptions> {
    Json(recommender.options().await)
}

/// Handler for system status
pub async fn status_handler(State(recommender): State<Arc<Recommender>>) -> impl IntoResponse {
    let snapshot = recommender.snapshot().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "snapshot": {
            "id": snapshot.id,
            "created_at": snapshot.created_at,
            "nodes": snapshot.graph.node_count(),
            "edges": snapshot.graph.edge_count(),
            "records": snapshot.records.len(),
        }
    }))
}
