use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        let read = |e: sqlx::Error| UserError::DatabaseError(e.to_string());

        Ok(User {
            id: UserId(row.try_get("id").map_err(read)?),
            username: Username::new(row.try_get("username").map_err(read)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(read)?)?,
            password_hash: row.try_get("password_hash").map_err(read)?,
            bio: row.try_get("bio").map_err(read)?,
            created_at: row.try_get("created_at").map_err(read)?,
            updated_at: row.try_get("updated_at").map_err(read)?,
        })
    }

    fn map_write_error(e: sqlx::Error, username: &Username, email: &EmailAddress) -> UserError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                if db_err.constraint() == Some("users_username_key") {
                    return UserError::UsernameAlreadyExists(username.as_str().to_string());
                }
                if db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(email.as_str().to_string());
                }
            }
        }
        UserError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &user.username, &user.email))?;

        let read = |e: sqlx::Error| UserError::DatabaseError(e.to_string());

        Ok(User {
            id: UserId(row.try_get("id").map_err(read)?),
            created_at: row.try_get("created_at").map_err(read)?,
            updated_at: row.try_get("updated_at").map_err(read)?,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            bio: user.bio,
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, bio, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, bio, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn update(&self, mut user: User) -> Result<User, UserError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, bio = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING updated_at
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &user.username, &user.email))?;

        let row = row.ok_or_else(|| UserError::NotFound(user.id.to_string()))?;

        user.updated_at = row
            .try_get("updated_at")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(user)
    }
}
