use async_trait::async_trait;
use auth::TokenHash;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::StoredToken;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn insert(&self, token: &Token) -> Result<(), TokenError> {
        sqlx::query(
            r#"
            INSERT INTO tokens (hash, user_id, expiry, scope)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.hash.as_bytes())
        .bind(token.user_id.0)
        .bind(token.expiry)
        .bind(token.scope.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_hash(
        &self,
        scope: TokenScope,
        hash: &TokenHash,
    ) -> Result<Option<StoredToken>, TokenError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, expiry
            FROM tokens
            WHERE hash = $1 AND scope = $2
            "#,
        )
        .bind(hash.as_bytes())
        .bind(scope.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        let Some(r) = row else {
            return Ok(None);
        };

        let read = |e: sqlx::Error| TokenError::DatabaseError(e.to_string());

        Ok(Some(StoredToken {
            user_id: UserId(r.try_get("user_id").map_err(read)?),
            expiry: r.try_get("expiry").map_err(read)?,
        }))
    }
}
