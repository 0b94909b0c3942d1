use crate::config::ConfigError;

/// HS256 needs at least 32 bytes of key material.
pub const MIN_SECRET_LEN: usize = 32;
/// Sessions never outlive a day.
pub const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"***")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, ConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                message: format!("must be at least {MIN_SECRET_LEN} characters long for HS256"),
            });
        }

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                message: format!("must be between 1 and {MAX_ACCESS_EXPIRY_SECS} seconds"),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
