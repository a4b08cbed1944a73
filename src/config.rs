use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_TTL_HOURS: i64 = 24;
const DEFAULT_LOG_DIR: &str = "logs";

pub struct Config {
    pub database_url: String,

    /// HS256 signing secret for issued bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in hours.
    pub jwt_ttl_hours: i64,

    pub port: u16,
    /// Directory receiving the database query log file.
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_ttl_hours: optional_parsed("JWT_TTL_HOURS", DEFAULT_JWT_TTL_HOURS)?,
            port: optional_parsed("APP_PORT", DEFAULT_PORT)?,
            log_dir: std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string()),
        })
    }
}

/// Reads an optional environment variable, falling back to a default when
/// unset and failing when set to an unparseable value.
fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), value)),
        Err(_) => Ok(default),
    }
}
