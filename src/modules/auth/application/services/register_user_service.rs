use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::credentials::{
    normalize_email, normalize_username, validate_password,
};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserInput, RegisterUserOutput, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, TokenProvider, UserQuery, UserRepository,
};

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        // 1️⃣ Validate and normalize
        let username = normalize_username(&input.username)?;
        let email = normalize_email(&input.email)?;
        validate_password(&input.password)?;

        // 2️⃣ Reject duplicates
        if self.query.find_by_username(&username).await?.is_some()
            || self.query.find_by_email(&email).await?.is_some()
        {
            return Err(RegisterUserError::UserAlreadyExists);
        }

        // 3️⃣ Hash and persist
        let password_hash = self.password_hasher.hash_password(&input.password).await?;

        let account = self
            .repository
            .create_user(NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        // 4️⃣ Issue a session token
        let token = self
            .token_provider
            .generate_access_token(account.id.value(), account.role)
            .map_err(RegisterUserError::TokenGenerationFailed)?;

        info!(user_id = %account.id, username = %account.username, "User registered");

        Ok(RegisterUserOutput {
            user: account.profile(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::credentials::CredentialError;
    use crate::auth::application::domain::entities::{UserAccount, UserId};
    use crate::auth::application::ports::outgoing::{
        ProfileChanges, UserQueryError, UserRepositoryError,
    };
    use crate::tests::support::auth_helper::{jwt_service, token_provider};
    use crate::tests::support::fixtures::account;
    use crate::tests::support::in_memory_store::InMemoryUserStore;
    use crate::tests::support::stubs::FakePasswordHasher;

    fn service(store: &InMemoryUserStore) -> RegisterUserService<InMemoryUserStore, InMemoryUserStore> {
        RegisterUserService::new(
            store.clone(),
            store.clone(),
            Arc::new(FakePasswordHasher),
            token_provider(),
        )
    }

    fn input(username: &str, email: &str, password: &str) -> RegisterUserInput {
        RegisterUserInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success_starts_with_zero_stats() {
        let store = InMemoryUserStore::default();

        let output = service(&store)
            .execute(input(" GreenFan ", "Green@Example.com", "SecurePass123"))
            .await
            .unwrap();

        assert_eq!(output.user.username, "greenfan");
        assert_eq!(output.user.email, "green@example.com");
        assert_eq!(output.user.points, 0);
        assert_eq!(output.user.total_items_recycled, 0);
        assert_eq!(output.user.co2_saved, 0.0);

        let claims = jwt_service().verify_token(&output.token).unwrap();
        assert_eq!(claims.sub, output.user.id);

        let stored = store.snapshot(UserId::from(output.user.id)).unwrap();
        assert_eq!(stored.password_hash, "hashed::SecurePass123");
    }

    #[tokio::test]
    async fn test_register_duplicate_username_is_conflict() {
        let store = InMemoryUserStore::default();
        store.seed(account("greenfan"));

        let result = service(&store)
            .execute(input("GREENFAN", "other@example.com", "SecurePass123"))
            .await;

        assert!(matches!(result, Err(RegisterUserError::UserAlreadyExists)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict() {
        let store = InMemoryUserStore::default();
        store.seed(account("greenfan"));

        let result = service(&store)
            .execute(input("newcomer", "GreenFan@example.com", "SecurePass123"))
            .await;

        assert!(matches!(result, Err(RegisterUserError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input_before_storage() {
        let store = InMemoryUserStore::default();

        let short_password = service(&store)
            .execute(input("greenfan", "green@example.com", "short"))
            .await;
        assert!(matches!(
            short_password,
            Err(RegisterUserError::InvalidInput(CredentialError::PasswordLength))
        ));

        let bad_email = service(&store)
            .execute(input("greenfan", "green-at-example", "SecurePass123"))
            .await;
        assert!(matches!(
            bad_email,
            Err(RegisterUserError::InvalidInput(CredentialError::InvalidEmailFormat))
        ));

        assert_eq!(store.len(), 0);
    }

    struct RacingRepository;

    #[async_trait]
    impl UserRepository for RacingRepository {
        async fn create_user(&self, _user: NewUser) -> Result<UserAccount, UserRepositoryError> {
            Err(UserRepositoryError::UserAlreadyExists)
        }

        async fn update_profile(
            &self,
            _user_id: UserId,
            _changes: ProfileChanges,
        ) -> Result<UserAccount, UserRepositoryError> {
            unimplemented!("not used in RegisterUserService tests")
        }
    }

    #[tokio::test]
    async fn test_unique_violation_on_insert_maps_to_conflict() {
        let service = RegisterUserService::new(
            InMemoryUserStore::default(),
            RacingRepository,
            Arc::new(FakePasswordHasher),
            token_provider(),
        );

        let result = service
            .execute(input("greenfan", "green@example.com", "SecurePass123"))
            .await;

        assert!(matches!(result, Err(RegisterUserError::UserAlreadyExists)));
    }

    struct FailingQuery;

    #[async_trait]
    impl UserQuery for FailingQuery {
        async fn find_by_id(&self, _: UserId) -> Result<Option<UserAccount>, UserQueryError> {
            unimplemented!("not used in RegisterUserService tests")
        }
        async fn find_by_email(&self, _: &str) -> Result<Option<UserAccount>, UserQueryError> {
            Err(UserQueryError::DatabaseError("db down".to_string()))
        }
        async fn find_by_username(&self, _: &str) -> Result<Option<UserAccount>, UserQueryError> {
            Err(UserQueryError::DatabaseError("db down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let service = RegisterUserService::new(
            FailingQuery,
            InMemoryUserStore::default(),
            Arc::new(FakePasswordHasher),
            token_provider(),
        );

        let result = service
            .execute(input("greenfan", "green@example.com", "SecurePass123"))
            .await;

        assert!(matches!(result, Err(RegisterUserError::QueryError(_))));
    }
}
