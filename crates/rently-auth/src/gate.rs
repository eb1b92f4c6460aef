//! Account status gate.
//!
//! Layered on top of token resolution and evaluated on every protected
//! request, because an account can be deactivated after its tokens were
//! issued.

use rently_core::models::user::{User, VerificationStatus};

use crate::error::AuthError;

/// Authorize a resolved user for protected access.
///
/// `unverified` accounts retain full access — verification is advisory
/// in this system. `inactive` accounts are denied with a distinct
/// deactivation error so callers can tell a blocked account apart from
/// bad credentials.
pub fn check_account_status(user: &User) -> Result<(), AuthError> {
    match user.verification_status {
        VerificationStatus::Unverified | VerificationStatus::Active => Ok(()),
        VerificationStatus::Inactive => Err(AuthError::AccountDeactivated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rently_core::models::user::defaults;
    use uuid::Uuid;

    fn user_with_status(status: VerificationStatus) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: String::new(),
            role: defaults::ROLE,
            verified: defaults::VERIFIED,
            verification_status: status,
            rating: defaults::RATING,
            total_ratings: defaults::TOTAL_RATINGS,
            profile_completion: defaults::PROFILE_COMPLETION,
            is_online: defaults::IS_ONLINE,
            last_seen: None,
            show_email: defaults::SHOW_EMAIL,
            show_contact: defaults::SHOW_CONTACT,
            show_social_link: defaults::SHOW_SOCIAL_LINK,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unverified_and_active_are_allowed() {
        assert!(check_account_status(&user_with_status(VerificationStatus::Unverified)).is_ok());
        assert!(check_account_status(&user_with_status(VerificationStatus::Active)).is_ok());
    }

    #[test]
    fn inactive_is_denied_distinctly() {
        let err = check_account_status(&user_with_status(VerificationStatus::Inactive)).unwrap_err();
        assert!(matches!(err, AuthError::AccountDeactivated));
    }
}
