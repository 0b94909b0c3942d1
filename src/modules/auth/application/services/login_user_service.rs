use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginUserOutput, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

/// Argon2id hash of no real password, verified against when the email is unknown
/// so both failure paths pay for one hash computation.
pub(crate) const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=4096,t=3,p=1$NJZ61tHJK/bKdOZsd4Zi2A$vEGZA8dQskINX8CHfokVsemhwZli8Ldg3ni+pxVCtL8";

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserOutput, LoginError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let user = match self.query.find_by_email(request.email()).await? {
            Some(user) => user,
            None => {
                let _ = self
                    .password_hasher
                    .verify_password(request.password(), UNKNOWN_USER_HASH)
                    .await;
                warn!("Login attempt for unknown email");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await?;

        if !is_valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id.value(), user.role)
            .map_err(LoginError::TokenGenerationFailed)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginUserOutput {
            user: user.profile(),
            token,
        })
    }
}
