use super::accounts::normalize_email;
use super::{to_sql_timestamp, Store, StoreError};
use chrono::{Duration, Utc};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

impl Store {
    /// Opens a session for an already verified account and returns its token.
    ///
    /// Expired sessions are swept on the way.
    pub fn create_session(&self, email: &str, ttl: Duration) -> Result<String, StoreError> {
        let conn = self.connect()?;
        let now = Utc::now();
        let token = Uuid::new_v4().simple().to_string();

        conn.execute(
            "DELETE FROM admin_sessions WHERE expires_at <= ?1",
            params![to_sql_timestamp(&now)],
        )?;
        conn.execute(
            "INSERT INTO admin_sessions (token, email, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &token,
                normalize_email(email),
                to_sql_timestamp(&now),
                to_sql_timestamp(&(now + ttl)),
            ],
        )?;
        Ok(token)
    }

    /// The email behind a live session, or `None` for unknown or expired tokens.
    pub fn session_email(&self, token: &str) -> Result<Option<String>, StoreError> {
        let conn = self.connect()?;
        let email = conn
            .query_row(
                "SELECT email FROM admin_sessions WHERE token = ?1 AND expires_at > ?2",
                params![token, to_sql_timestamp(&Utc::now())],
                |row| row.get(0),
            )
            .optional()?;
        Ok(email)
    }

    pub fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM admin_sessions WHERE token = ?1", params![token])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_store;
    use chrono::Duration;

    #[test]
    fn session_lifecycle() {
        let (_dir, store) = temp_store();
        store.upsert_admin("admin@example.com", "pw").unwrap();

        let token = store
            .create_session("admin@example.com", Duration::hours(1))
            .unwrap();
        assert_eq!(
            store.session_email(&token).unwrap().as_deref(),
            Some("admin@example.com")
        );

        store.delete_session(&token).unwrap();
        assert_eq!(store.session_email(&token).unwrap(), None);
    }

    #[test]
    fn expired_sessions_are_ignored() {
        let (_dir, store) = temp_store();
        store.upsert_admin("admin@example.com", "pw").unwrap();

        let token = store
            .create_session("admin@example.com", Duration::seconds(-1))
            .unwrap();
        assert_eq!(store.session_email(&token).unwrap(), None);
        assert_eq!(store.session_email("unknown").unwrap(), None);
    }

    #[test]
    fn sessions_require_an_account() {
        let (_dir, store) = temp_store();
        assert!(store
            .create_session("ghost@example.com", Duration::hours(1))
            .is_err());
    }
}
