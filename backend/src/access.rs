//! Admin sessions and the allow-list check.
//!
//! Access to the dashboard is decided in two steps: a live session cookie
//! identifies the account, then `AdminPolicy` decides whether that account
//! may see leads. An empty allow-list lets every authenticated account in;
//! that mode is meant for local development only and is warned about at
//! startup.

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::normalize_email;
use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::HttpRequest;

pub const SESSION_COOKIE: &str = "lead_session";

#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    allowed: Vec<String>,
}

impl AdminPolicy {
    pub fn new(emails: &[String]) -> Self {
        Self {
            allowed: emails.iter().map(|e| normalize_email(e)).collect(),
        }
    }

    pub fn allows_everyone(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_authorized(&self, email: &str) -> bool {
        let email = normalize_email(email);
        if email.is_empty() {
            return false;
        }
        self.allows_everyone() || self.allowed.contains(&email)
    }
}

/// Who is behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    /// Signed in, but not on the allow-list.
    Unauthorized(String),
    Admin(String),
}

fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|token| !token.is_empty())
}

/// The email of the live session on this request, if any.
pub async fn current_session(
    req: &HttpRequest,
    state: &AppState,
) -> Result<Option<String>, ApiError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };
    Ok(state
        .store
        .run(move |store| store.session_email(&token))
        .await?)
}

pub async fn resolve(req: &HttpRequest, state: &AppState) -> Result<Access, ApiError> {
    Ok(match current_session(req, state).await? {
        None => Access::Anonymous,
        Some(email) if state.policy.is_authorized(&email) => Access::Admin(email),
        Some(email) => Access::Unauthorized(email),
    })
}

/// Gate for the admin API: 401 without a session, 403 off the allow-list.
pub async fn require_admin(req: &HttpRequest, state: &AppState) -> Result<String, ApiError> {
    match resolve(req, state).await? {
        Access::Admin(email) => Ok(email),
        Access::Unauthorized(email) => {
            log::warn!("Rejected admin access for {email}: not on the allow-list");
            Err(ApiError::Forbidden)
        }
        Access::Anonymous => Err(ApiError::Unauthenticated),
    }
}

pub fn session_cookie(token: String, secure: bool, ttl: chrono::Duration) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allow_list_admits_any_identity() {
        let policy = AdminPolicy::new(&[]);
        assert!(policy.allows_everyone());
        assert!(policy.is_authorized("anyone@example.com"));
        assert!(!policy.is_authorized(""));
    }

    #[test]
    fn allow_list_is_case_insensitive() {
        let policy = AdminPolicy::new(&["Boss@Example.com".to_string()]);
        assert!(policy.is_authorized("boss@example.com"));
        assert!(policy.is_authorized(" BOSS@example.com"));
        assert!(!policy.is_authorized("staff@example.com"));
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("t".into(), true, chrono::Duration::hours(1));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(1)));
    }
}
