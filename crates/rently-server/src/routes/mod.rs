//! HTTP route handlers.

pub mod auth;
pub mod user;

use std::sync::Arc;

use axum::{Json, Router, middleware, routing::get};
use surrealdb::Connection;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::dto::HealthResponse;
use crate::middleware::require_auth;
use crate::state::AppState;

/// Health check response.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build the complete router with all routes.
pub fn create_router<C: Connection>(state: Arc<AppState<C>>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .merge(auth::public_routes::<C>());

    // Protected routes (token + account status gate)
    let protected_routes = auth::protected_routes::<C>()
        .merge(user::routes::<C>())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<C>,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
