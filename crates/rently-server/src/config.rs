//! Server configuration loaded from environment variables.

use std::env;

use rently_db::DbConfig;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port.
    pub port: u16,
    /// SurrealDB connection parameters.
    pub db: DbConfig,
    /// Optional pepper for password hashing and verification.
    pub pepper: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, sourcing a
    /// `.env` file first if one is present. Every value has a
    /// local-development default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DbConfig::default();
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            db: DbConfig {
                url: env::var("SURREAL_URL").unwrap_or(defaults.url),
                namespace: env::var("SURREAL_NAMESPACE").unwrap_or(defaults.namespace),
                database: env::var("SURREAL_DATABASE").unwrap_or(defaults.database),
                username: env::var("SURREAL_USERNAME").unwrap_or(defaults.username),
                password: env::var("SURREAL_PASSWORD").unwrap_or(defaults.password),
            },
            pepper: env::var("PASSWORD_PEPPER").ok(),
        }
    }
}
