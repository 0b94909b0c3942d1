use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_JWT_ISSUER: &str = "RecycLog";

pub fn jwt_service() -> JwtTokenService {
    let config = JwtConfig::new(
        TEST_JWT_SECRET.to_string(),
        TEST_JWT_ISSUER.to_string(),
        3600,
    )
    .expect("test JWT config is valid");
    JwtTokenService::new(config)
}

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}

/// `Authorization` header carrying a fresh token for `user_id`.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = jwt_service()
        .generate_access_token(user_id, UserRole::User)
        .expect("token generation should not fail in tests");
    ("Authorization", format!("Bearer {token}"))
}
