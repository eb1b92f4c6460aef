//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in
//! `rently-db`; the auth layer depends only on these traits.

use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::{
    token::{AccessToken, CreateAccessToken},
    user::{CreateUser, User, VerificationStatus},
};

pub trait UserRepository: Send + Sync {
    /// Create a user row with every account default populated.
    ///
    /// Trims name and email, lowercases the email, and hashes the
    /// password before persistence. A second row with the same
    /// normalized email must fail with `AlreadyExists`, including under
    /// concurrent creation.
    fn create(&self, input: CreateUser) -> impl Future<Output = CoreResult<User>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = CoreResult<User>> + Send;

    /// Lookup by email; the input is normalized first, so the match is
    /// case-insensitive.
    fn get_by_email(&self, email: &str) -> impl Future<Output = CoreResult<User>> + Send;

    /// Change the account status. Driven by the administrative review
    /// flow, which lives outside this core.
    fn update_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> impl Future<Output = CoreResult<()>> + Send;

    /// Set presence and stamp `last_seen` to now, in both directions.
    fn set_online(&self, id: Uuid, online: bool) -> impl Future<Output = CoreResult<()>> + Send;
}

pub trait TokenRepository: Send + Sync {
    fn create(
        &self,
        input: CreateAccessToken,
    ) -> impl Future<Output = CoreResult<AccessToken>> + Send;

    /// Resolve a stored token by its hash. Unknown hashes are `NotFound`.
    fn get_by_hash(&self, token_hash: &str)
    -> impl Future<Output = CoreResult<AccessToken>> + Send;

    /// Delete a single token by its hash. Idempotent: deleting an
    /// unknown or already-deleted hash is not an error.
    fn delete_by_hash(&self, token_hash: &str) -> impl Future<Output = CoreResult<()>> + Send;
}
