//! # Admin Authentication Module
//!
//! Session-based sign-in for staff. A successful login sets the
//! `lead_session` cookie; the allow-list is checked later, when the
//! dashboard or the admin API is used.
//!
//! ## Registered Routes:
//!
//! *   **`POST /login`**: verifies `{email, password}` and opens a session.
//! *   **`GET /me`**: the email behind the current session, `401` without one.
//! *   **`POST /logout`**: closes the session and expires the cookie.

mod login;
mod logout;
mod me;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/me", get().to(me::process))
        .route("/logout", post().to(logout::process))
}
