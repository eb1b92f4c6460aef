//! Authentication service — registration, login, and logout
//! orchestration.

use rently_core::error::CoreError;
use rently_core::models::token::CreateAccessToken;
use rently_core::models::user::{CreateUser, User};
use rently_core::repository::{TokenRepository, UserRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::validate::{self, LoginInput, RegisterInput};
use crate::{gate, password, presence, token};

/// Successful registration or login result.
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    /// Raw opaque bearer token (returned to the client, never stored).
    pub token: String,
}

/// Authentication service.
///
/// Generic over repository implementations so that the auth layer
/// has no dependency on the database crate.
pub struct AuthService<U: UserRepository, T: TokenRepository> {
    users: U,
    tokens: T,
    config: AuthConfig,
}

impl<U: UserRepository, T: TokenRepository> AuthService<U, T> {
    pub fn new(users: U, tokens: T, config: AuthConfig) -> Self {
        Self {
            users,
            tokens,
            config,
        }
    }

    /// Create an account and issue its first token.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthOutput, AuthError> {
        // 1. Validate — nothing is persisted when any field fails.
        validate::check(&input)?;

        // 2. Create the user with every account default populated. The
        //    storage layer's unique email index decides duplicate races.
        let user = match self
            .users
            .create(CreateUser {
                name: input.name,
                email: input.email,
                password: input.password,
            })
            .await
        {
            Ok(user) => user,
            Err(CoreError::AlreadyExists { .. }) => return Err(AuthError::DuplicateEmail),
            Err(e) => return Err(e.into()),
        };

        // 3. Issue the first token.
        let token = self.issue_token(&user).await?;

        Ok(AuthOutput { user, token })
    }

    /// Authenticate with email + password and issue a token.
    pub async fn login(&self, input: LoginInput) -> Result<AuthOutput, AuthError> {
        // 1. Structural validation only.
        validate::check(&input)?;

        // 2. Look up by normalized email. An unknown email and a wrong
        //    password must be indistinguishable to the caller.
        let user = match self.users.get_by_email(&input.email).await {
            Ok(user) => user,
            Err(CoreError::NotFound { .. }) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        // 3. Verify password.
        let valid = password::verify_password(
            &input.password,
            &user.password_hash,
            self.config.pepper.as_deref(),
        )?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        // 4. Account status gate. Runs strictly after credential
        //    verification so account state is never revealed to a caller
        //    who has not authenticated. No token is issued past this
        //    point for a deactivated account.
        gate::check_account_status(&user)?;

        // 5. Presence, best-effort.
        presence::set_online(&self.users, user.id, true).await;

        // 6. Issue token.
        let token = self.issue_token(&user).await?;

        Ok(AuthOutput { user, token })
    }

    /// Revoke the presented token and mark the user offline.
    ///
    /// Only the presented token is revoked — sessions on other devices
    /// stay valid. For a caller that reached this operation (token
    /// already resolved) there is no client-visible failure mode.
    pub async fn logout(&self, user: &User, raw_token: &str) -> Result<(), AuthError> {
        let hash = token::hash_access_token(raw_token);
        self.tokens.delete_by_hash(&hash).await?;

        presence::set_online(&self.users, user.id, false).await;

        Ok(())
    }

    /// Resolve a bearer token to its user and run the status gate.
    ///
    /// Entry point for request middleware; evaluated on every protected
    /// request because an account can be deactivated after its tokens
    /// were issued.
    pub async fn authenticate(&self, raw_token: &str) -> Result<User, AuthError> {
        let hash = token::hash_access_token(raw_token);

        let stored = match self.tokens.get_by_hash(&hash).await {
            Ok(stored) => stored,
            Err(CoreError::NotFound { .. }) => return Err(AuthError::TokenInvalid),
            Err(e) => return Err(e.into()),
        };

        let user = match self.users.get_by_id(stored.user_id).await {
            Ok(user) => user,
            Err(CoreError::NotFound { .. }) => return Err(AuthError::TokenInvalid),
            Err(e) => return Err(e.into()),
        };

        gate::check_account_status(&user)?;

        Ok(user)
    }

    /// Generate a fresh opaque token and persist its hash. Issuing never
    /// invalidates tokens already held by the user's other devices.
    async fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let raw = token::generate_access_token();
        let token_hash = token::hash_access_token(&raw);

        self.tokens
            .create(CreateAccessToken {
                user_id: user.id,
                token_hash,
            })
            .await?;

        Ok(raw)
    }
}
