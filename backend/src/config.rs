//! Runtime configuration, read once from the environment at startup.
//!
//! Missing variables fall back to defaults and the fallback is logged, so a
//! misconfigured deployment is visible in the first lines of output.

use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    /// Destination of the new-lead notification. Absent means the
    /// notification endpoint answers with a configuration error.
    pub slack_webhook_url: Option<String>,
    /// Emails allowed into the admin dashboard. Empty allows every
    /// authenticated account.
    pub admin_emails: Vec<String>,
    pub bootstrap_admin: Option<(String, String)>,
    pub session_ttl_hours: i64,
    pub secure_cookies: bool,
}

/// Upper bound on `SESSION_TTL_HOURS`: one year.
const MAX_SESSION_TTL_HOURS: i64 = 24 * 366;

#[derive(Debug, thiserror::Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    key: &'static str,
    message: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let bootstrap_admin = match (
            optional("ADMIN_BOOTSTRAP_EMAIL"),
            optional("ADMIN_BOOTSTRAP_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            _ => {
                warn!("ADMIN_BOOTSTRAP_EMAIL and ADMIN_BOOTSTRAP_PASSWORD must be set together, ignoring");
                None
            }
        };

        Ok(Self {
            host: try_load("HOST", "127.0.0.1")?,
            port: try_load("PORT", "8080")?,
            database_path: try_load("DATABASE_PATH", "leads.sqlite")?,
            slack_webhook_url: optional("SLACK_WEBHOOK_URL"),
            admin_emails: parse_admin_emails(&optional("ADMIN_EMAILS").unwrap_or_default()),
            bootstrap_admin,
            session_ttl_hours: check_session_ttl(try_load("SESSION_TTL_HOURS", "12")?)?,
            secure_cookies: try_load("SECURE_COOKIES", "false")?,
        })
    }
}

/// Splits the comma-separated allow-list, dropping blanks.
pub fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sessions must outlive their creation and stay within chrono's range.
fn check_session_ttl(hours: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError {
            key: "SESSION_TTL_HOURS",
            message: format!("{hours} is outside 1..={MAX_SESSION_TTL_HOURS}"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = optional(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| ConfigError {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
impl Config {
    /// Configuration for handler tests: no webhook, empty allow-list.
    pub fn for_tests(database_path: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_path: database_path.to_string(),
            slack_webhook_url: None,
            admin_emails: Vec::new(),
            bootstrap_admin: None,
            session_ttl_hours: 12,
            secure_cookies: false,
        }
    }
}
