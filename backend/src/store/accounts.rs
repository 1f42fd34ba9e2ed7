use super::{to_sql_timestamp, Store, StoreError};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

/// Emails are compared case-insensitively, as the hosted auth service did.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Argon2id PHC string; the salt travels inside it.
fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Credentials(e.to_string()))
}

fn password_matches(stored: &str, password: &str) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(stored).map_err(|e| StoreError::Credentials(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

impl Store {
    /// Creates the admin account or replaces its password.
    pub fn upsert_admin(&self, email: &str, password: &str) -> Result<(), StoreError> {
        let hash = hash_password(password)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO admin_users (email, password_hash, created_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (email) DO UPDATE SET password_hash = excluded.password_hash",
            params![normalize_email(email), hash, to_sql_timestamp(&Utc::now())],
        )?;
        Ok(())
    }

    /// Checks a login attempt. Unknown emails and wrong passwords are
    /// indistinguishable to the caller.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let stored: Option<String> = conn
            .query_row(
                "SELECT password_hash FROM admin_users WHERE email = ?1",
                params![normalize_email(email)],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            Some(hash) => password_matches(&hash, password),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_store;
    use rusqlite::Connection;

    #[test]
    fn verifies_only_the_current_password() {
        let (_dir, store) = temp_store();
        store.upsert_admin("Admin@Example.com ", "first").unwrap();

        assert!(store.verify_credentials("admin@example.com", "first").unwrap());
        assert!(!store.verify_credentials("admin@example.com", "wrong").unwrap());
        assert!(!store.verify_credentials("nobody@example.com", "first").unwrap());

        store.upsert_admin("admin@example.com", "second").unwrap();
        assert!(!store.verify_credentials("admin@example.com", "first").unwrap());
        assert!(store.verify_credentials("ADMIN@example.com", "second").unwrap());
    }

    #[test]
    fn stores_an_argon2id_phc_string() {
        let (dir, store) = temp_store();
        store.upsert_admin("admin@example.com", "secret").unwrap();
        store.upsert_admin("other@example.com", "secret").unwrap();

        let conn = Connection::open(dir.path().join("leads.sqlite")).unwrap();
        let hashes: Vec<String> = conn
            .prepare("SELECT password_hash FROM admin_users ORDER BY email")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(hashes.len(), 2);
        for hash in &hashes {
            assert!(hash.starts_with("$argon2id$"), "{hash}");
            assert!(!hash.contains("secret"));
        }
        assert_ne!(hashes[0], hashes[1], "each hash carries its own salt");
    }
}
