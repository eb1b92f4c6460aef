//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// Account-level status controlling whether authentication may succeed.
///
/// Distinct from the [`User::verified`] flag, which records
/// identity-document verification and has no access-control effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Active,
    Inactive,
}

/// Defaults bound to every newly created account.
///
/// Kept in one place so row creation cannot drift: the storage layer binds
/// these values explicitly when it creates the row.
pub mod defaults {
    use super::{UserRole, VerificationStatus};

    pub const ROLE: UserRole = UserRole::User;
    pub const VERIFIED: bool = false;
    pub const VERIFICATION_STATUS: VerificationStatus = VerificationStatus::Unverified;
    pub const RATING: f64 = 0.0;
    pub const TOTAL_RATINGS: u32 = 0;
    pub const PROFILE_COMPLETION: u8 = 0;
    pub const IS_ONLINE: bool = false;
    pub const SHOW_EMAIL: bool = true;
    pub const SHOW_CONTACT: bool = true;
    pub const SHOW_SOCIAL_LINK: bool = true;
}

/// Profile completion percentage at or above which a profile counts as
/// complete.
pub const PROFILE_COMPLETE_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2id PHC-format hash. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub verified: bool,
    pub verification_status: VerificationStatus,
    pub rating: f64,
    pub total_ratings: u32,
    pub profile_completion: u8,
    pub is_online: bool,
    pub last_seen: Option<DateTime<Utc>>,
    pub show_email: bool,
    pub show_contact: bool,
    pub show_social_link: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Average rating, or 0 while the user has no ratings.
    pub fn average_rating(&self) -> f64 {
        if self.total_ratings > 0 { self.rating } else { 0.0 }
    }

    pub fn has_complete_profile(&self) -> bool {
        self.profile_completion >= PROFILE_COMPLETE_THRESHOLD
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
}

/// Canonical form of an email address: trimmed and lowercased.
///
/// Applied before every uniqueness check and every lookup, so email
/// comparison is effectively case-insensitive.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
