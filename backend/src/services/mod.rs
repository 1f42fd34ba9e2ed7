//! HTTP surface of the server.
//!
//! - `applications`: the public lead submission endpoint.
//! - `notify`: the new-lead chat notification.
//! - `auth`: admin login, current session and logout.
//! - `admin`: the lead listing and its mutations.
//!
//! Anything that is not an API route is answered by `pages`, which serves
//! the embedded single-page app and gates the dashboard page.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod notify;

use crate::error::json_config;
use crate::pages;
use crate::state::AppState;
use actix_web::web;

/// Registers every route and the shared state on an `App`.
pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(state))
        .service(applications::configure_routes())
        .service(notify::configure_routes())
        .service(auth::configure_routes())
        .service(admin::configure_routes())
        .route("/admin/dashboard", web::get().to(pages::admin_dashboard))
        .default_service(web::route().to(pages::serve_embedded));
}
