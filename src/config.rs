//! Environment configuration. Database parts accept an `APP_ENV`-suffixed
//! variant (`DB_HOST_DEV`) that wins over the plain name (`DB_HOST`).

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        name: String,
    },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub schema: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub create_if_missing: bool,
    pub sync_schema: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Load `.env.<APP_ENV>` then `.env`; variables already set are kept.
pub fn load_dotenv() {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".into());
    dotenvy::from_filename(format!(".env.{}", env)).ok();
    dotenvy::dotenv().ok();
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("APP_ENV")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "dev".into());
        let suffix = env.to_uppercase();
        let scoped = |key: &str| lookup(&format!("{}_{}", key, suffix)).or_else(|| lookup(key));

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 3000)?,
        };

        let target = match scoped("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                host: scoped("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: match scoped("DB_PORT") {
                    Some(v) => parse_value("DB_PORT", &v)?,
                    None => 5432,
                },
                user: scoped("DB_USER").ok_or_else(|| ConfigError::Missing("DB_USER".into()))?,
                password: scoped("DB_PASSWORD"),
                name: scoped("DB_NAME").ok_or_else(|| ConfigError::Missing("DB_NAME".into()))?,
            },
        };

        let database = DatabaseConfig {
            target,
            schema: lookup("DB_SCHEMA")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "public".into()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            create_if_missing: parse_or(&lookup, "DB_CREATE_IF_MISSING", true)?,
            sync_schema: parse_or(&lookup, "DB_SYNC_SCHEMA", true)?,
        };

        let cors = CorsConfig {
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        Ok(AppConfig {
            env,
            server,
            database,
            cors,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.target {
            DatabaseTarget::Url(url) => PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL".into(),
                value: e.to_string(),
            }),
            DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name);
                if let Some(password) = password {
                    options = options.password(password);
                }
                Ok(options)
            }
        }
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
