//! Best-effort presence updates.
//!
//! Presence is observability, not a correctness-critical path: a failed
//! update is logged at `warn` and never fails the surrounding login or
//! logout.

use rently_core::repository::UserRepository;
use tracing::warn;
use uuid::Uuid;

/// Record whether a user is online. Stamps `last_seen` in both
/// directions (the repository does this unconditionally).
pub async fn set_online<U: UserRepository>(users: &U, user_id: Uuid, online: bool) {
    if let Err(err) = users.set_online(user_id, online).await {
        warn!(user_id = %user_id, online, error = %err, "presence update failed");
    }
}
