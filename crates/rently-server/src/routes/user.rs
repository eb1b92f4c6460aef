//! Authenticated-user routes.

use std::sync::Arc;

use axum::extract::{Extension, Json};
use axum::routing::get;
use axum::Router;
use rently_core::models::user::User;
use surrealdb::Connection;

use crate::middleware::AuthSession;
use crate::state::AppState;

pub fn routes<C: Connection>() -> Router<Arc<AppState<C>>> {
    Router::new().route("/user", get(current_user))
}

/// Return the resolved identity for the presented token.
async fn current_user(Extension(session): Extension<AuthSession>) -> Json<User> {
    Json(session.user)
}
