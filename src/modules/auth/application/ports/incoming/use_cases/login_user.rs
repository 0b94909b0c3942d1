use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::auth::application::domain::credentials::{normalize_email, CredentialError};
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{HashError, TokenError, UserQueryError};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - normalized
    password: String, // Private - non-empty
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("{0}")]
    InvalidEmail(CredentialError),

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = normalize_email(&email).map_err(LoginRequestError::InvalidEmail)?;

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginUserOutput {
    pub user: UserProfile,
    pub token: String,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserOutput, LoginError>;
}
