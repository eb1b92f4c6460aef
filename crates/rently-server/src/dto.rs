//! Response payload shapes.
//!
//! The user object serializes through `rently_core::models::user::User`,
//! whose password hash is marked skip-serialize — no secret field can
//! appear in any response.

use rently_core::models::user::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
