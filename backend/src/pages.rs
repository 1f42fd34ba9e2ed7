//! Browser-facing pages.
//!
//! The single-page app is compiled into the binary from `static/dist` (see
//! `build.rs`). Unknown paths fall back to `index.html` so client-side routes
//! such as `/admin/login` load the app. Unknown paths under `/api` are API
//! misses and get a JSON `404` instead.
//!
//! `/admin/dashboard` is gated before the app is served: without a session
//! the browser is sent to the login page, and an account off the allow-list
//! is sent there with `?error=unauthorized`.

use crate::access::{resolve, Access};
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use include_dir::{include_dir, Dir};
use log::warn;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub const LOGIN_PATH: &str = "/admin/login";
pub const UNAUTHORIZED_LOGIN_PATH: &str = "/admin/login?error=unauthorized";
const API_PREFIX: &str = "api";

fn is_api_path(path: &str) -> bool {
    path == API_PREFIX
        || path
            .strip_prefix(API_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn index() -> HttpResponse {
    match STATIC_DIR.get_file("index.html") {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if is_api_path(path) {
        return ApiError::NotFound.error_response();
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => index(),
    }
}

pub async fn admin_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    Ok(match resolve(&req, &state).await? {
        Access::Anonymous => redirect(LOGIN_PATH),
        Access::Unauthorized(email) => {
            warn!("Redirecting {email} away from the dashboard: not on the allow-list");
            redirect(UNAUTHORIZED_LOGIN_PATH)
        }
        Access::Admin(_) => index(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services;
    use crate::services::admin::test_support::signed_in;
    use crate::state::test_support::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn location(resp: &actix_web::dev::ServiceResponse) -> Option<&str> {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[actix_web::test]
    async fn anonymous_visitors_are_sent_to_login() {
        let (_dir, state) = test_state(|_| {});
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get().uri("/admin/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), Some(LOGIN_PATH));
    }

    #[actix_web::test]
    async fn accounts_off_the_allow_list_are_sent_to_login_with_flag() {
        let (_dir, state) =
            test_state(|c| c.admin_emails = vec!["boss@example.com".to_string()]);
        let cookie = signed_in(&state, "staff@example.com");
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/admin/dashboard")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), Some(UNAUTHORIZED_LOGIN_PATH));
    }

    #[actix_web::test]
    async fn listed_admins_get_the_app() {
        let (_dir, state) =
            test_state(|c| c.admin_emails = vec!["boss@example.com".to_string()]);
        let cookie = signed_in(&state, "boss@example.com");
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/admin/dashboard")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn empty_allow_list_admits_any_signed_in_account() {
        let (_dir, state) = test_state(|_| {});
        let cookie = signed_in(&state, "anyone@example.com");
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/admin/dashboard")
            .cookie(cookie)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let (_dir, state) = test_state(|_| {});
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get().uri("/admin/login").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[actix_web::test]
    async fn unknown_api_paths_get_a_json_404() {
        let (_dir, state) = test_state(|_| {});
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        for uri in ["/api", "/api/unknown", "/api/admin/nothing/here"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "요청한 API를 찾을 수 없습니다.");
        }

        let req = test::TestRequest::get().uri("/apiary").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
