use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, DEFAULT_SESSION_EXPIRY};
use crate::modules::summary::adapter::outgoing::gemini_summary_generator::{
    DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "data/portfolio.json";
const DEFAULT_ISSUER: &str = "portfolio_backend";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where the portfolio document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Parent row plus one table per list.
    Normalized { database_url: String },
    /// One JSONB column.
    Document { database_url: String },
    JsonFile { path: PathBuf },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normalized { .. } => "normalized",
            Self::Document { .. } => "document",
            Self::JsonFile { .. } => "json_file",
        }
    }

    pub fn database_url(&self) -> Option<&str> {
        match self {
            Self::Normalized { database_url } | Self::Document { database_url } => {
                Some(database_url)
            }
            Self::JsonFile { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_env: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.rust_env == "production"
    }
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Argon2 PHC string.
    pub password_hash: String,
    pub jwt: JwtConfig,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub inbox: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageBackend,
    pub run_migrations: bool,
    pub admin: AdminConfig,
    /// `None` leaves summary generation disabled.
    pub gemini: Option<GeminiConfig>,
    /// `None` routes contact messages to the log.
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            rust_env: get("RUST_ENV").unwrap_or_else(|| "development".to_string()),
        };

        let storage = match get("PORTFOLIO_STORAGE").as_deref() {
            None | Some("normalized") => StorageBackend::Normalized {
                database_url: require("DATABASE_URL")?,
            },
            Some("document") => StorageBackend::Document {
                database_url: require("DATABASE_URL")?,
            },
            Some("json_file") => StorageBackend::JsonFile {
                path: PathBuf::from(
                    get("PORTFOLIO_DATA_FILE").unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
                ),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PORTFOLIO_STORAGE",
                    reason: format!(
                        "`{}` is not one of normalized, document, json_file",
                        other
                    ),
                })
            }
        };

        let run_migrations = parse_bool("RUN_MIGRATIONS", get("RUN_MIGRATIONS"), false)?;

        let secret_key = require("SESSION_SECRET")?;
        if secret_key.len() < JwtConfig::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "SESSION_SECRET",
                reason: format!("must be at least {} characters", JwtConfig::MIN_SECRET_LEN),
            });
        }
        let session_expiry = parse_or(
            "SESSION_EXPIRY_SECONDS",
            get("SESSION_EXPIRY_SECONDS"),
            DEFAULT_SESSION_EXPIRY,
        )?;
        if session_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_EXPIRY_SECONDS",
                reason: "must be positive".to_string(),
            });
        }

        let admin = AdminConfig {
            password_hash: require("ADMIN_PASSWORD_HASH")?,
            jwt: JwtConfig {
                secret_key,
                issuer: get("SESSION_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
                session_expiry,
            },
            cookie_secure: parse_bool(
                "SESSION_COOKIE_SECURE",
                get("SESSION_COOKIE_SECURE"),
                server.is_production(),
            )?,
        };

        let gemini = get("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_url: get("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
        });

        // Setting the server opts into SMTP; the rest then become required.
        let smtp = match get("SMTP_SERVER") {
            None => None,
            Some(server) => Some(SmtpConfig {
                server,
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
                from_email: require("CONTACT_FROM_EMAIL")?,
                inbox: require("CONTACT_INBOX")?,
            }),
        };

        Ok(Self {
            server,
            storage,
            run_migrations,
            admin,
            gemini,
            smtp,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            reason: format!("`{}` is not a boolean", other),
        }),
    }
}
