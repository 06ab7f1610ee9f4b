use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::AppState;
use crate::store::SurplusListing;

/// `{"success": true, "data": [...]}`, the shape the feed client expects.
#[derive(Debug, Serialize)]
pub(super) struct FeedEnvelope {
    success: bool,
    data: Vec<SurplusListing>,
}

pub(super) async fn list_restaurants(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_restaurants().await)
}

pub(super) async fn list_surplus(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_surplus().await)
}

/// Serves the surplus listings to the feed client; the location body is ignored.
pub(super) async fn feed_envelope(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.store.list_surplus().await;
    tracing::debug!(count = data.len(), "serving feed envelope");
    Json(FeedEnvelope {
        success: true,
        data,
    })
}
