use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenRepository;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Issues authentication tokens against stored credentials and resolves
/// presented tokens back to users.
pub struct TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    authenticator: Arc<Authenticator>,
}

impl<UR, TR> TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    /// Create a new token service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - Credential store
    /// * `tokens` - Token digest store
    /// * `authenticator` - Password verification and token generation
    pub fn new(users: Arc<UR>, tokens: Arc<TR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            tokens,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR, TR> TokenServicePort for TokenService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    async fn create_token(&self, username: &str, password: &str) -> Result<Token, TokenError> {
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.users.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            return Err(self.authenticator.reject_unknown_user(password).into());
        };

        let issued = self
            .authenticator
            .authenticate(password, &user.password_hash)?;

        let token = Token::new(issued, user.id, TokenScope::Authentication);
        self.tokens.insert(&token).await?;

        tracing::info!(
            user_id = %user.id,
            scope = %token.scope,
            expiry = %token.expiry,
            "Token issued"
        );

        Ok(token)
    }

    async fn authenticate_token(&self, plaintext: &str) -> Result<User, TokenError> {
        let hash = self.authenticator.digest(plaintext);

        let stored = self
            .tokens
            .find_by_hash(TokenScope::Authentication, &hash)
            .await?
            .ok_or(TokenError::NotFound)?;

        if stored.is_expired_at(Utc::now()) {
            return Err(TokenError::Expired);
        }

        self.users
            .find_by_id(stored.user_id)
            .await?
            .ok_or(TokenError::OwnerNotFound(stored.user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenHash;
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::token::models::StoredToken;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
        }
    }

    mock! {
        pub TestTokenRepository {}

        #[async_trait]
        impl TokenRepository for TestTokenRepository {
            async fn insert(&self, token: &Token) -> Result<(), TokenError>;
            async fn find_by_hash(&self, scope: TokenScope, hash: &TokenHash) -> Result<Option<StoredToken>, TokenError>;
        }
    }

    fn user_with_password(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId(42),
            username: Username::new("lifter".to_string()).unwrap(),
            email: EmailAddress::new("lifter@example.com".to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            bio: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        users: MockTestUserRepository,
        tokens: MockTestTokenRepository,
    ) -> TokenService<MockTestUserRepository, MockTestTokenRepository> {
        TokenService::new(
            Arc::new(users),
            Arc::new(tokens),
            Arc::new(Authenticator::new(Duration::hours(24))),
        )
    }

    #[tokio::test]
    async fn test_create_token_stores_only_digest() {
        let user = user_with_password(&Authenticator::default(), "squat-rack");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|u| u.as_str() == "lifter")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut tokens = MockTestTokenRepository::new();
        tokens
            .expect_insert()
            .withf(|token| {
                token.user_id == UserId(42)
                    && token.scope == TokenScope::Authentication
                    && token.hash == TokenHash::from_plaintext(&token.plaintext)
            })
            .times(1)
            .returning(|_| Ok(()));

        let token = service(users, tokens)
            .create_token("lifter", "squat-rack")
            .await
            .unwrap();

        assert_eq!(token.plaintext.len(), 43);
        assert!(token.expiry > Utc::now() + Duration::hours(23));
    }

    #[tokio::test]
    async fn test_create_token_wrong_password() {
        let user = user_with_password(&Authenticator::default(), "squat-rack");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut tokens = MockTestTokenRepository::new();
        tokens.expect_insert().times(0);

        let result = service(users, tokens)
            .create_token("lifter", "bench-press")
            .await;
        assert!(matches!(result, Err(TokenError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_create_token_unknown_user() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let mut tokens = MockTestTokenRepository::new();
        tokens.expect_insert().times(0);

        let result = service(users, tokens).create_token("ghost", "secret").await;
        assert!(matches!(result, Err(TokenError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_create_token_unparseable_username_skips_lookup() {
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_username().times(0);

        let mut tokens = MockTestTokenRepository::new();
        tokens.expect_insert().times(0);

        let result = service(users, tokens)
            .create_token(&"x".repeat(51), "secret")
            .await;
        assert!(matches!(result, Err(TokenError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_create_token_corrupt_stored_hash_is_internal() {
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(User {
                id: UserId(1),
                username: Username::new("broken".to_string()).unwrap(),
                email: EmailAddress::new("broken@example.com".to_string()).unwrap(),
                password_hash: "garbage".to_string(),
                bio: String::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        });

        let tokens = MockTestTokenRepository::new();

        let result = service(users, tokens).create_token("broken", "secret").await;
        assert!(matches!(result, Err(TokenError::Password(_))));
    }

    #[tokio::test]
    async fn test_authenticate_token_resolves_owner() {
        let user = user_with_password(&Authenticator::default(), "squat-rack");

        let mut tokens = MockTestTokenRepository::new();
        tokens
            .expect_find_by_hash()
            .withf(|scope, hash| {
                *scope == TokenScope::Authentication
                    && *hash == TokenHash::from_plaintext("presented-token")
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(StoredToken {
                    user_id: UserId(42),
                    expiry: Utc::now() + Duration::hours(1),
                }))
            });

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_id()
            .withf(|id| *id == UserId(42))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let resolved = service(users, tokens)
            .authenticate_token("presented-token")
            .await
            .unwrap();
        assert_eq!(resolved.id, UserId(42));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_expired_even_when_digest_matches() {
        let mut tokens = MockTestTokenRepository::new();
        tokens
            .expect_find_by_hash()
            .withf(|_, hash| *hash == TokenHash::from_plaintext("stale-token"))
            .times(1)
            .returning(|_, _| {
                Ok(Some(StoredToken {
                    user_id: UserId(42),
                    expiry: Utc::now() - Duration::minutes(1),
                }))
            });

        let mut users = MockTestUserRepository::new();
        users.expect_find_by_id().times(0);

        let result = service(users, tokens)
            .authenticate_token("stale-token")
            .await;
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[tokio::test]
    async fn test_authenticate_token_unknown_digest() {
        let mut tokens = MockTestTokenRepository::new();
        tokens
            .expect_find_by_hash()
            .times(1)
            .returning(|_, _| Ok(None));

        let users = MockTestUserRepository::new();

        let result = service(users, tokens).authenticate_token("made-up").await;
        assert!(matches!(result, Err(TokenError::NotFound)));
    }
}
