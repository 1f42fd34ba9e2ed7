//! # Datastore
//!
//! SQLite-backed stand-in for the hosted database/auth service. The rest of
//! the server only talks to it through the operations on `Store`:
//!
//! - `applications`: insert, list, delete and the delivered toggle on the
//!   `consultation_applications` table.
//! - `accounts`: admin credentials (argon2id PHC strings).
//! - `sessions`: opaque session tokens with an expiry.
//!
//! The schema carries the same row rules the hosted service enforced with its
//! policies: a lead cannot exist without a region or without consent.
//!
//! Every call opens its own connection. Handlers go through `Store::run`,
//! which moves the call onto actix's blocking pool.

mod accounts;
mod applications;
mod sessions;

pub use accounts::normalize_email;

use actix_web::web;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS consultation_applications (
    id                 TEXT PRIMARY KEY,
    name               TEXT NOT NULL,
    contact            TEXT NOT NULL,
    region             TEXT NOT NULL CHECK (region IN ('서울', '경기인천', '그 외지역')),
    privacy_consent    INTEGER NOT NULL CHECK (privacy_consent = 1),
    checkbox_selection TEXT NOT NULL DEFAULT '[]',
    referrer_url       TEXT,
    utm_source         TEXT,
    utm_medium         TEXT,
    utm_campaign       TEXT,
    source             TEXT,
    delivered_at       TEXT,
    delivered_to       TEXT,
    created_at         TEXT NOT NULL,
    updated_at         TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_applications_created_at
    ON consultation_applications (created_at DESC);

CREATE TABLE IF NOT EXISTS admin_users (
    email         TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admin_sessions (
    token      TEXT PRIMARY KEY,
    email      TEXT NOT NULL REFERENCES admin_users (email) ON DELETE CASCADE,
    created_at TEXT NOT NULL,
    expires_at TEXT NOT NULL
);
";

/// Errors surfaced by the datastore. The message is passed to callers
/// verbatim, without classification.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Encoding(#[from] serde_json::Error),
    #[error("password hashing failed: {0}")]
    Credentials(String),
    #[error("datastore worker failed: {0}")]
    Blocking(String),
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens (creating if needed) the database file and applies the schema.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.connect()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Runs a datastore call on the blocking thread pool.
    pub async fn run<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        web::block(move || call(&store))
            .await
            .map_err(|e| StoreError::Blocking(e.to_string()))?
    }
}

/// Fixed-width RFC 3339 so stored timestamps sort lexicographically.
fn to_sql_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn from_sql_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
