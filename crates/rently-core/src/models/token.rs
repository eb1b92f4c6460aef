//! Access token domain model.
//!
//! Only the SHA-256 hash of a token is ever stored; the raw value exists
//! solely in the response that hands it to the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccessToken {
    pub user_id: Uuid,
    pub token_hash: String,
}
