use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use super::{ApiError, AppState};
use crate::middleware::RequestId;
use crate::store::PostInput;

const POST_NOT_FOUND: &str = "Post not found";

/// Ids that are not whole numbers can never match a post.
///
/// The whole segment must be digits: `3abc` is rejected rather than read as
/// post 3, so a malformed path never edits or deletes a real post.
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

pub(super) async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_posts().await)
}

pub(super) async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<PostInput>,
) -> impl IntoResponse {
    let post = state.store.create_post(input).await;
    tracing::info!(id = post.id, "post created");
    (StatusCode::CREATED, Json(post))
}

pub(super) async fn update_post(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
    Json(input): Json<PostInput>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::not_found(req_id.0, POST_NOT_FOUND));
    };
    match state.store.update_post(id, input).await {
        Some(post) => Ok(Json(post)),
        None => Err(ApiError::not_found(req_id.0, POST_NOT_FOUND)),
    }
}

pub(super) async fn delete_post(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::not_found(req_id.0, POST_NOT_FOUND));
    };
    if state.store.delete_post(id).await {
        tracing::info!(id, "post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(req_id.0, POST_NOT_FOUND))
    }
}
