/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (after `.env` has been read by the binary).
 *
 * # Variables
 *
 * | Variable         | Default   | Notes                                  |
 * |------------------|-----------|----------------------------------------|
 * | `JWT_SECRET`     | required  | shared HS256 signing secret            |
 * | `TOKEN_TTL_DAYS` | `7`       | session token validity                 |
 * | `DATABASE_URL`   | unset     | unset runs on the in-memory store      |
 * | `SERVER_HOST`    | `0.0.0.0` |                                        |
 * | `SERVER_PORT`    | `3000`    |                                        |
 * | `BCRYPT_COST`    | `10`      | 4..=31                                 |
 * | `CORS_ORIGIN`    | unset     | single allowed origin                  |
 * | `SEED_DEMO_DATA` | `false`   | load demo users and boards on startup  |
 */

use std::net::SocketAddr;

use thiserror::Error;

use crate::backend::auth::passwords::DEFAULT_BCRYPT_COST;
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_DAYS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("invalid listen address {0}")]
    Address(String),
}

/// Runtime configuration of the HTTP server
#[derive(Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub cors_origin: Option<String>,
    pub seed_demo_data: bool,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_days", &self.token_ttl_days)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

impl ServerConfig {
    pub fn builder(jwt_secret: impl Into<String>) -> ServerConfigBuilder {
        ServerConfigBuilder::new(jwt_secret)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let mut builder = ServerConfigBuilder::new(secret);

        if let Some(value) = get("TOKEN_TTL_DAYS") {
            builder = builder.token_ttl_days(parse("TOKEN_TTL_DAYS", &value)?);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(host) = get("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(value) = get("SERVER_PORT") {
            builder = builder.port(parse("SERVER_PORT", &value)?);
        }
        builder = builder.bcrypt_cost(bcrypt_cost_from_lookup(&lookup)?);
        if let Some(origin) = get("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Some(value) = get("SEED_DEMO_DATA") {
            builder = builder.seed_demo_data(parse_flag("SEED_DEMO_DATA", &value)?);
        }

        builder.build()
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }
}

/// `BCRYPT_COST` on its own, for tools that do not need a JWT secret
pub fn bcrypt_cost_from_lookup<F>(lookup: F) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cost = match lookup("BCRYPT_COST").filter(|v| !v.trim().is_empty()) {
        Some(value) => parse("BCRYPT_COST", &value)?,
        None => DEFAULT_BCRYPT_COST,
    };
    check_bcrypt_cost(cost)
}

// bcrypt rejects costs outside this range
fn check_bcrypt_cost(cost: u32) -> Result<u32, ConfigError> {
    if (4..=31).contains(&cost) {
        Ok(cost)
    } else {
        Err(ConfigError::Invalid {
            name: "BCRYPT_COST",
            value: cost.to_string(),
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
    }
}

/// Builder for [`ServerConfig`]
#[derive(Debug, Clone)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            config: ServerConfig {
                jwt_secret: jwt_secret.into(),
                token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
                database_url: None,
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                bcrypt_cost: DEFAULT_BCRYPT_COST,
                cors_origin: None,
                seed_demo_data: false,
            },
        }
    }

    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.config.token_ttl_days = days;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.cors_origin = Some(origin.into());
        self
    }

    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.config.seed_demo_data = seed;
        self
    }

    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = self.config;

        if config.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if config.token_ttl_days <= 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_TTL_DAYS",
                value: config.token_ttl_days.to_string(),
            });
        }
        check_bcrypt_cost(config.bcrypt_cost)?;

        Ok(config)
    }
}
