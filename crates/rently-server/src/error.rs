//! API error type with consistent JSON responses.
//!
//! Each auth failure class maps to exactly one status code. Unexpected
//! failures are logged with full detail and surfaced as an opaque
//! message — no storage or hashing internals ever reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rently_auth::{AuthError, FieldErrors};
use serde::Serialize;

/// Wrapper turning [`AuthError`] into an HTTP response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AuthError);

#[derive(Serialize)]
struct ValidationBody {
    errors: FieldErrors,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct DeactivatedBody {
    error: &'static str,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AuthError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody { errors }),
            )
                .into_response(),

            AuthError::DuplicateEmail => {
                let mut errors = FieldErrors::new();
                errors.insert(
                    "email".into(),
                    vec!["The email has already been taken.".into()],
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationBody { errors }),
                )
                    .into_response()
            }

            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(MessageBody {
                    message: "The provided credentials are incorrect.",
                }),
            )
                .into_response(),

            AuthError::AccountDeactivated => (
                StatusCode::FORBIDDEN,
                Json(DeactivatedBody {
                    error: "Account deactivated",
                    message: "Your account has been deactivated. Please contact support.",
                }),
            )
                .into_response(),

            AuthError::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                Json(MessageBody {
                    message: "Unauthenticated.",
                }),
            )
                .into_response(),

            AuthError::Crypto(msg) => {
                tracing::error!(error = %msg, "Cryptography failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Server error",
                    }),
                )
                    .into_response()
            }

            AuthError::Core(err) => {
                tracing::error!(error = %err, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
