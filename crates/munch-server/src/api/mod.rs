mod posts;
mod restaurants;
mod users;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};
use crate::store::MockStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MockStore>,
}

/// Error body: `{"error": "<message>", "code": ..., "request_id": ..., "timestamp": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: &'static str,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(request_id: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code,
            request_id: request_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn not_found(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(request_id, "not_found", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    message: &'static str,
    posts: usize,
    users: usize,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/{id}",
            put(posts::update_post).delete(posts::delete_post),
        )
        .route("/users", get(users::list_users))
        .route(
            "/api/restaurants",
            get(restaurants::list_restaurants).post(restaurants::feed_envelope),
        )
        .route("/api/surplus", get(restaurants::list_surplus))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let data = HealthData {
        message: "REST API Server is running!",
        posts: state.store.list_posts().await.len(),
        users: state.store.list_users().await.len(),
    };
    tracing::debug!(request_id = %req_id.0, posts = data.posts, "health check");
    Json(data)
}
