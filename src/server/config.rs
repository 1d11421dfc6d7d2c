use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_UPLOAD_DIR: &str = "static/images";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_SESSION_INACTIVITY_MINUTES: i64 = 30;

/// Credentials for the account created on startup when it does not exist yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminCredentials {
    pub user_name: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Directory uploaded images are written to.
    pub upload_dir: PathBuf,
    pub upload_max_bytes: usize,

    pub session_inactivity_minutes: i64,
    pub session_secure_cookie: bool,

    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
            (Some(user_name), Some(password)) => Some(AdminCredentials {
                user_name,
                password,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteAdminCredentials.into()),
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            upload_dir: var("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            upload_max_bytes: parse_var("UPLOAD_MAX_BYTES", var("UPLOAD_MAX_BYTES"))?
                .unwrap_or(DEFAULT_UPLOAD_MAX_BYTES),
            session_inactivity_minutes: parse_inactivity_minutes(var(
                "SESSION_INACTIVITY_MINUTES",
            ))?,
            session_secure_cookie: parse_var(
                "SESSION_SECURE_COOKIE",
                var("SESSION_SECURE_COOKIE"),
            )?
            .unwrap_or(false),
            admin,
        })
    }
}

/// The inactivity window must be at least one minute.
fn parse_inactivity_minutes(value: Option<String>) -> Result<i64, ConfigError> {
    const NAME: &str = "SESSION_INACTIVITY_MINUTES";

    match parse_var::<i64>(NAME, value.clone())? {
        None => Ok(DEFAULT_SESSION_INACTIVITY_MINUTES),
        Some(minutes) if minutes >= 1 => Ok(minutes),
        Some(_) => Err(ConfigError::InvalidEnvVar {
            name: NAME.to_string(),
            value: value.unwrap_or_default(),
            reason: "must be at least 1".to_string(),
        }),
    }
}

fn parse_var<T>(name: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
