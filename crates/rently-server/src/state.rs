//! Shared application state.

use rently_auth::AuthService;
use rently_db::repository::{SurrealTokenRepository, SurrealUserRepository};
use surrealdb::Connection;

/// State shared by every request handler.
///
/// Generic over the SurrealDB connection type so the same router runs
/// against a remote database in production and the in-memory engine in
/// tests.
pub struct AppState<C: Connection> {
    pub auth: AuthService<SurrealUserRepository<C>, SurrealTokenRepository<C>>,
}
