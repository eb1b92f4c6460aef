//! Registration, login, and logout routes.

use std::sync::Arc;

use axum::extract::{Extension, Json, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use rently_auth::{LoginInput, RegisterInput};
use surrealdb::Connection;

use crate::dto::{AuthResponse, MessageResponse};
use crate::error::Result;
use crate::middleware::AuthSession;
use crate::state::AppState;

pub fn public_routes<C: Connection>() -> Router<Arc<AppState<C>>> {
    Router::new()
        .route("/auth/register", post(register::<C>))
        .route("/auth/login", post(login::<C>))
}

pub fn protected_routes<C: Connection>() -> Router<Arc<AppState<C>>> {
    Router::new().route("/auth/logout", post(logout::<C>))
}

/// Register a new account. Created accounts start unverified, which
/// does not limit access.
async fn register<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let output = state.auth.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful",
            user: output.user,
            token: output.token,
        }),
    ))
}

/// Authenticate with email and password.
async fn login<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(input): Json<LoginInput>,
) -> Result<Json<AuthResponse>> {
    let output = state.auth.login(input).await?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        user: output.user,
        token: output.token,
    }))
}

/// Revoke the presented token. Tokens on other devices stay valid.
async fn logout<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<MessageResponse>> {
    state.auth.logout(&session.user, &session.token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully",
    }))
}
