use async_trait::async_trait;
use tracing::debug;

use super::{Argon2Hasher, BcryptHasher};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// New hashes are argon2id; bcrypt hashes carried over from older accounts still verify.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    primary: Argon2Hasher,
    legacy: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(primary: Argon2Hasher) -> Self {
        Self {
            primary,
            legacy: BcryptHasher,
        }
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.primary.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::is_bcrypt_hash(hash) {
            debug!("Verifying legacy bcrypt hash");
            return self.legacy.verify_password(password, hash).await;
        }
        self.primary.verify_password(password, hash).await
    }
}
