//! SurrealDB implementation of [`UserRepository`].
//!
//! Password hashing uses Argon2id with OWASP-recommended parameters
//! (memory: 19 MiB, iterations: 2, parallelism: 1). Salt is randomly
//! generated per hash. An optional pepper (server-side secret) can be
//! provided at construction time.
//!
//! Account creation binds every default from
//! `rently_core::models::user::defaults` in a single `CREATE`, so a
//! partially populated row is never observable.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use chrono::{DateTime, Utc};
use rently_core::error::CoreResult;
use rently_core::models::user::{
    CreateUser, User, UserRole, VerificationStatus, defaults, normalize_email,
};
use rently_core::repository::UserRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    name: String,
    email: String,
    password_hash: String,
    role: String,
    verified: bool,
    verification_status: String,
    rating: f64,
    total_ratings: u32,
    profile_completion: u8,
    is_online: bool,
    last_seen: Option<DateTime<Utc>>,
    show_email: bool,
    show_contact: bool,
    show_social_link: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    verified: bool,
    verification_status: String,
    rating: f64,
    total_ratings: u32,
    profile_completion: u8,
    is_online: bool,
    last_seen: Option<DateTime<Utc>>,
    show_email: bool,
    show_contact: bool,
    show_social_link: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_role(s: &str) -> Result<UserRole, DbError> {
    match s {
        "user" => Ok(UserRole::User),
        "admin" => Ok(UserRole::Admin),
        other => Err(DbError::Decode(format!("unknown user role: {other}"))),
    }
}

fn role_to_string(role: &UserRole) -> &'static str {
    match role {
        UserRole::User => "user",
        UserRole::Admin => "admin",
    }
}

fn parse_status(s: &str) -> Result<VerificationStatus, DbError> {
    match s {
        "unverified" => Ok(VerificationStatus::Unverified),
        "active" => Ok(VerificationStatus::Active),
        "inactive" => Ok(VerificationStatus::Inactive),
        other => Err(DbError::Decode(format!(
            "unknown verification status: {other}"
        ))),
    }
}

fn status_to_string(s: &VerificationStatus) -> &'static str {
    match s {
        VerificationStatus::Unverified => "unverified",
        VerificationStatus::Active => "active",
        VerificationStatus::Inactive => "inactive",
    }
}

impl UserRow {
    fn into_user(self, id: Uuid) -> Result<User, DbError> {
        Ok(User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            verified: self.verified,
            verification_status: parse_status(&self.verification_status)?,
            rating: self.rating,
            total_ratings: self.total_ratings,
            profile_completion: self.profile_completion,
            is_online: self.is_online,
            last_seen: self.last_seen,
            show_email: self.show_email,
            show_contact: self.show_contact,
            show_social_link: self.show_social_link,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            verified: self.verified,
            verification_status: parse_status(&self.verification_status)?,
            rating: self.rating,
            total_ratings: self.total_ratings,
            profile_completion: self.profile_completion,
            is_online: self.is_online,
            last_seen: self.last_seen,
            show_email: self.show_email,
            show_contact: self.show_contact,
            show_social_link: self.show_social_link,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Hash a password with Argon2id using OWASP-recommended parameters.
///
/// If a pepper is provided, it is prepended to the password before
/// hashing. The salt is randomly generated for each call.
fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, DbError> {
    // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| DbError::Crypto(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| DbError::Crypto(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

/// Classify the failure of the `CREATE` statement: a unique email index
/// violation is a duplicate, everything else a plain query failure.
fn classify_create_error(e: surrealdb::Error) -> DbError {
    let msg = e.to_string();
    if msg.contains("idx_user_email") {
        DbError::Duplicate {
            entity: "user".into(),
        }
    } else {
        DbError::Query(msg)
    }
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn create(&self, input: CreateUser) -> CoreResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let name = input.name.trim().to_string();
        let email = normalize_email(&input.email);
        let password_hash = hash_password(&input.password, self.pepper.as_deref())?;

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 name = $name, email = $email, \
                 password_hash = $password_hash, \
                 role = $role, \
                 verified = $verified, \
                 verification_status = $verification_status, \
                 rating = $rating, \
                 total_ratings = $total_ratings, \
                 profile_completion = $profile_completion, \
                 is_online = $is_online, \
                 last_seen = NONE, \
                 show_email = $show_email, \
                 show_contact = $show_contact, \
                 show_social_link = $show_social_link",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", name))
            .bind(("email", email))
            .bind(("password_hash", password_hash))
            .bind(("role", role_to_string(&defaults::ROLE).to_string()))
            .bind(("verified", defaults::VERIFIED))
            .bind((
                "verification_status",
                status_to_string(&defaults::VERIFICATION_STATUS).to_string(),
            ))
            .bind(("rating", defaults::RATING))
            .bind(("total_ratings", defaults::TOTAL_RATINGS))
            .bind(("profile_completion", defaults::PROFILE_COMPLETION))
            .bind(("is_online", defaults::IS_ONLINE))
            .bind(("show_email", defaults::SHOW_EMAIL))
            .bind(("show_contact", defaults::SHOW_CONTACT))
            .bind(("show_social_link", defaults::SHOW_SOCIAL_LINK))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(classify_create_error)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> CoreResult<User> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('user', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id)?)
    }

    async fn get_by_email(&self, email: &str) -> CoreResult<User> {
        let email = normalize_email(email);

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE email = $email",
            )
            .bind(("email", email.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.try_into_user()?)
    }

    async fn update_status(&self, id: Uuid, status: VerificationStatus) -> CoreResult<()> {
        self.db
            .query(
                "UPDATE type::record('user', $id) SET \
                 verification_status = $status, updated_at = time::now()",
            )
            .bind(("id", id.to_string()))
            .bind(("status", status_to_string(&status).to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn set_online(&self, id: Uuid, online: bool) -> CoreResult<()> {
        // last_seen is stamped on both transitions.
        self.db
            .query(
                "UPDATE type::record('user', $id) SET \
                 is_online = $online, last_seen = time::now(), \
                 updated_at = time::now()",
            )
            .bind(("id", id.to_string()))
            .bind(("online", online))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }
}
