//! SurrealDB implementation of [`TokenRepository`].
//!
//! Rows hold only token hashes; revocation is row deletion.

use chrono::{DateTime, Utc};
use rently_core::error::CoreResult;
use rently_core::models::token::{AccessToken, CreateAccessToken};
use rently_core::repository::TokenRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct TokenRow {
    user_id: String,
    token_hash: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct TokenRowWithId {
    record_id: String,
    user_id: String,
    token_hash: String,
    created_at: DateTime<Utc>,
}

fn row_to_token(row: TokenRow, id: Uuid) -> Result<AccessToken, DbError> {
    let user_id = Uuid::parse_str(&row.user_id)
        .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
    Ok(AccessToken {
        id,
        user_id,
        token_hash: row.token_hash,
        created_at: row.created_at,
    })
}

impl TokenRowWithId {
    fn try_into_token(self) -> Result<AccessToken, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(AccessToken {
            id,
            user_id,
            token_hash: self.token_hash,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the access token repository.
#[derive(Clone)]
pub struct SurrealTokenRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealTokenRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> TokenRepository for SurrealTokenRepository<C> {
    async fn create(&self, input: CreateAccessToken) -> CoreResult<AccessToken> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('access_token', $id) SET \
                 user_id = $user_id, \
                 token_hash = $token_hash",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("token_hash", input.token_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<TokenRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "access_token".into(),
            id: id_str,
        })?;

        row_to_token(row, id).map_err(Into::into)
    }

    async fn get_by_hash(&self, token_hash: &str) -> CoreResult<AccessToken> {
        let token_hash_owned = token_hash.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM access_token \
                 WHERE token_hash = $token_hash",
            )
            .bind(("token_hash", token_hash_owned.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TokenRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "access_token".into(),
            id: format!("token_hash={token_hash_owned}"),
        })?;

        row.try_into_token().map_err(Into::into)
    }

    async fn delete_by_hash(&self, token_hash: &str) -> CoreResult<()> {
        // Deleting an unknown hash matches zero rows, which is fine:
        // revocation is idempotent.
        self.db
            .query("DELETE access_token WHERE token_hash = $token_hash")
            .bind(("token_hash", token_hash.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
