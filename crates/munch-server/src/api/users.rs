use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct UserQuery {
    username: Option<String>,
    password: Option<String>,
}

/// Lists every user, or the one matching both `username` and `password`
/// (an empty list when none does). Supplying only one of the two lists
/// every user.
pub(super) async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> impl IntoResponse {
    let username = query.username.filter(|s| !s.is_empty());
    let password = query.password.filter(|s| !s.is_empty());

    let users = match (username, password) {
        (Some(username), Some(password)) => state
            .store
            .find_user(&username, &password)
            .await
            .into_iter()
            .collect(),
        _ => state.store.list_users().await,
    };
    Json(users)
}
