//! Authentication error types.
//!
//! Each variant corresponds to one client-facing failure class, so the
//! transport layer can map errors to status codes without inspecting
//! message strings.

use std::collections::BTreeMap;

use rently_core::error::CoreError;
use thiserror::Error;

/// Per-field validation messages, keyed by input field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Client input malformed, missing, or inconsistent. Recoverable
    /// locally; never logged as an application fault.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The email is already registered. Surfaced distinctly from other
    /// validation failures so clients can prompt for a different email.
    #[error("email has already been taken")]
    DuplicateEmail,

    /// Intentionally uninformative: covers both unknown email and wrong
    /// password, so responses carry no account-enumeration signal.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account exists and the credentials were correct, but the
    /// account has been administratively deactivated.
    #[error("account deactivated")]
    AccountDeactivated,

    /// Token resolution failed: unknown, malformed, or revoked.
    #[error("invalid token")]
    TokenInvalid,

    #[error("cryptography error: {0}")]
    Crypto(String),

    /// Unexpected storage or internal failure. Logged with detail
    /// server-side, surfaced opaquely.
    #[error(transparent)]
    Core(#[from] CoreError),
}
