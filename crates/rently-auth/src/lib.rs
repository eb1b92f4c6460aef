//! Rently Auth — registration, credential login/logout, opaque bearer
//! tokens, and account-status gating.

pub mod config;
pub mod error;
pub mod gate;
pub mod password;
pub mod presence;
pub mod service;
pub mod token;
pub mod validate;

pub use config::AuthConfig;
pub use error::{AuthError, FieldErrors};
pub use service::{AuthOutput, AuthService};
pub use validate::{LoginInput, RegisterInput};
