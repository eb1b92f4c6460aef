//! SurrealDB repository implementations.

mod token;
mod user;

pub use token::SurrealTokenRepository;
pub use user::SurrealUserRepository;
