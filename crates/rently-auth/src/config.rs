//! Authentication configuration.

/// Configuration for the authentication service.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Optional pepper prepended to passwords before Argon2id
    /// verification. Must match the pepper used during hashing.
    pub pepper: Option<String>,
}
