/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * `main` loads a `.env` file first (via `dotenv`), so either source works
 * for local development.
 *
 * # Variables
 *
 * - `SERVER_HOST` - bind address (default `0.0.0.0`)
 * - `SERVER_PORT` - bind port (default `4000`)
 * - `DATABASE_URL` - PostgreSQL connection string; when unset the server
 *   keeps documents in memory
 * - `JWT_SECRET` - token signing secret (required)
 * - `TOKEN_TTL_SECS` - token lifetime (default 36000, at most one year)
 * - `BCRYPT_COST` - password hashing cost (default `bcrypt::DEFAULT_COST`)
 *
 * The configuration is read once at startup; handlers never touch the
 * environment.
 */

use thiserror::Error;

use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let port = parse_or(get("SERVER_PORT"), "SERVER_PORT", DEFAULT_PORT)?;
        let token_ttl_secs = parse_or(get("TOKEN_TTL_SECS"), "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&token_ttl_secs) {
            return Err(ConfigError::OutOfRange {
                name: "TOKEN_TTL_SECS",
                value: token_ttl_secs,
                min: 1,
                max: MAX_TOKEN_TTL_SECS,
            });
        }
        let bcrypt_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", bcrypt::DEFAULT_COST)?
            .clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST);

        Ok(Self {
            host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            token_ttl_secs,
            bcrypt_cost,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}
