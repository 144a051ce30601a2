/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. `main` calls `dotenv` first, so a `.env` file in the working
 * directory is honoured.
 *
 * # Variables
 *
 * | Variable        | Default              | Notes                               |
 * |-----------------|----------------------|-------------------------------------|
 * | `JWT_SECRET`    | -                    | required, non-empty                 |
 * | `STORE_BACKEND` | `postgres`           | `postgres` or `memory`              |
 * | `DATABASE_URL`  | -                    | takes precedence over `DB_*`        |
 * | `DB_HOST`       | `localhost`          |                                     |
 * | `DB_PORT`       | `5432`               |                                     |
 * | `DB_USER`       | `postgres`           |                                     |
 * | `DB_PASSWORD`   | empty                |                                     |
 * | `DB_NAME`       | `postgres`           |                                     |
 * | `SERVER_PORT`   | `8080`               |                                     |
 * | `BCRYPT_COST`   | `bcrypt::DEFAULT_COST` | 4..=31                            |
 * | `STATIC_DIR`    | `./html`             | served at `/`                       |
 * | `RESUME_PATH`   | `files/resume.pdf`   | served at `/resume`                 |
 *
 * # Error Handling
 *
 * Unlike optional services, every setting here is required for the server
 * to work, so invalid values are returned as `ConfigError` and startup
 * aborts.
 */

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

use crate::backend::auth::passwords::{MAX_COST, MIN_COST};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET` is unset or empty
    #[error("JWT_SECRET environment variable must be set")]
    MissingSecret,

    /// A variable has a value that cannot be used
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    /// `DATABASE_URL` could not be parsed
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Where the data lives
#[derive(Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL, reached with these connection settings
    Postgres(DatabaseSettings),
    /// Process memory; nothing survives a restart
    Memory,
}

/// PostgreSQL connection settings
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseSettings {
    /// A full `postgres://` URL
    Url(String),
    /// Individual connection parameters, always without TLS
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

impl DatabaseSettings {
    /// Build `sqlx` connection options
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            Self::Url(url) => PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl),
            Self::Parts {
                host,
                port,
                user,
                password,
                name,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(name)
                .ssl_mode(PgSslMode::Disable)),
        }
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(_) => f.write_str("Url(<redacted>)"),
            Self::Parts {
                host, port, user, name, ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

impl std::fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres(settings) => f.debug_tuple("Postgres").field(settings).finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// Static files served alongside the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Directory served for `/` and other unmatched GET paths
    pub static_dir: PathBuf,
    /// PDF served at `/resume`
    pub resume_path: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./html"),
            resume_path: PathBuf::from("files/resume.pdf"),
        }
    }
}

/// Complete server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub store: StoreBackend,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub assets: AssetPaths,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("store", &self.store)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("assets", &self.assets)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;

        let store = match get("STORE_BACKEND").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres(database_settings(&get)?),
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let port = parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_PORT)?;

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let defaults = AssetPaths::default();
        let assets = AssetPaths {
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            resume_path: get("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_path),
        };

        Ok(Self {
            jwt_secret,
            store,
            port,
            bcrypt_cost,
            assets,
        })
    }
}

fn database_settings<G>(get: &G) -> Result<DatabaseSettings, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("DATABASE_URL") {
        return Ok(DatabaseSettings::Url(url));
    }

    Ok(DatabaseSettings::Parts {
        host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
        port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
        user: get("DB_USER").unwrap_or_else(|| "postgres".to_string()),
        password: get("DB_PASSWORD").unwrap_or_default(),
        name: get("DB_NAME").unwrap_or_else(|| "postgres".to_string()),
    })
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_secret_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingSecret)));
        assert!(matches!(
            load(&[("JWT_SECRET", "")]),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", "s")]).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.assets, AssetPaths::default());
        assert_eq!(
            config.store,
            StoreBackend::Postgres(DatabaseSettings::Parts {
                host: "localhost".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: String::new(),
                name: "postgres".to_string(),
            })
        );
    }

    #[test]
    fn test_database_url_wins_over_parts() {
        let config = load(&[
            ("JWT_SECRET", "s"),
            ("DATABASE_URL", "postgres://u:p@db:5432/app"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();

        assert_eq!(
            config.store,
            StoreBackend::Postgres(DatabaseSettings::Url(
                "postgres://u:p@db:5432/app".to_string()
            ))
        );
    }

    #[test]
    fn test_memory_backend() {
        let config = load(&[("JWT_SECRET", "s"), ("STORE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("JWT_SECRET", "s"), ("STORE_BACKEND", "sqlite")]),
            Err(ConfigError::Invalid { key: "STORE_BACKEND", .. })
        ));
        assert!(matches!(
            load(&[("JWT_SECRET", "s"), ("SERVER_PORT", "http")]),
            Err(ConfigError::Invalid { key: "SERVER_PORT", .. })
        ));
        assert!(matches!(
            load(&[("JWT_SECRET", "s"), ("BCRYPT_COST", "40")]),
            Err(ConfigError::Invalid { key: "BCRYPT_COST", .. })
        ));
        assert!(matches!(
            load(&[("JWT_SECRET", "s"), ("DB_PORT", "-1")]),
            Err(ConfigError::Invalid { key: "DB_PORT", .. })
        ));
    }

    #[test]
    fn test_parts_build_connect_options() {
        let settings = DatabaseSettings::Parts {
            host: "db".to_string(),
            port: 6543,
            user: "app".to_string(),
            password: "pw".to_string(),
            name: "board".to_string(),
        };
        let options = settings.connect_options().unwrap();

        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("board"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = load(&[
            ("JWT_SECRET", "top-secret"),
            ("DATABASE_URL", "postgres://u:hunter2@db/app"),
        ])
        .unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("hunter2"));
    }
}
