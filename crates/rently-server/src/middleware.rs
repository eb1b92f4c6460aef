//! Bearer-token authentication middleware.
//!
//! Resolves the presented token, runs the account status gate, and
//! passes the identity to handlers as an explicit request extension —
//! never via ambient lookup.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use rently_auth::AuthError;
use rently_core::models::user::User;
use surrealdb::Connection;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, injected into protected requests.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    /// Raw bearer token as presented. Logout revokes exactly this one.
    pub token: String,
}

/// Middleware that requires a valid bearer token and an account the
/// status gate allows. Evaluated on every protected request, because
/// an account can be deactivated after its tokens were issued.
pub async fn require_auth<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request).ok_or(ApiError(AuthError::TokenInvalid))?;

    let user = state.auth.authenticate(&token).await?;

    request.extensions_mut().insert(AuthSession { user, token });
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}
