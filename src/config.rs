use std::{env, fmt::Display, str::FromStr};

use tracing::info;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::leaderboard::application::domain::entities::LeaderboardLimits;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
    pub leaderboard: LeaderboardLimits,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source { lookup };

        let environment = source.or_default("RUST_ENV", "development".to_string());
        let host = source.or_default("HOST", "127.0.0.1".to_string());
        let port = source.parse_or("PORT", 8000u16)?;
        let cors_origin = source.or_default("CORS_ORIGIN", "*".to_string());

        let database = DatabaseConfig {
            url: source.required("DATABASE_URL")?,
            max_connections: source.parse_or("DB_MAX_CONNECTIONS", 20u32)?,
            min_connections: source.parse_or("DB_MIN_CONNECTIONS", 2u32)?,
            connect_timeout_secs: source.parse_or("DB_CONNECT_TIMEOUT_SECS", 5u64)?,
            run_migrations: source.parse_or("RUN_MIGRATIONS", false)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                message: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let jwt = JwtConfig::new(
            source.required("JWT_SECRET")?,
            source.or_default("JWT_ISSUER", "RecycLog".to_string()),
            source.parse_or("JWT_ACCESS_EXPIRY", 86_400i64)?,
        )?;

        let argon2 = Argon2Config {
            memory_kib: source.parse_or("ARGON2_MEMORY_KIB", 4 * 1024u32)?,
            iterations: source.parse_or("ARGON2_ITERATIONS", 3u32)?,
            parallelism: source.parse_or("ARGON2_PARALLELISM", 1u32)?,
        };

        let leaderboard = LeaderboardLimits::new(
            source.parse_or("LEADERBOARD_DEFAULT_LIMIT", 20u64)?,
            source.parse_or("LEADERBOARD_MAX_LIMIT", 100u64)?,
        )
        .map_err(|message| ConfigError::Invalid {
            key: "LEADERBOARD_DEFAULT_LIMIT",
            message,
        })?;

        Ok(Self {
            environment,
            host,
            port,
            cors_origin,
            database,
            jwt,
            argon2,
            leaderboard,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

struct Source<F> {
    lookup: F,
}

impl<F> Source<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    fn or_default(&self, key: &'static str, default: String) -> String {
        self.get(key).unwrap_or(default)
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        match self.get(key) {
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                message: e.to_string(),
            }),
            None => {
                info!("{key} not set, using default: {default}");
                Ok(default)
            }
        }
    }
}
