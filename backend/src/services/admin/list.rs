use crate::access::require_admin;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req, &state).await?;
    let applications = state
        .store
        .run(|store| store.list_applications())
        .await?;
    Ok(HttpResponse::Ok().json(applications))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::signed_in;
    use crate::services;
    use crate::state::test_support::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::application::{Application, NewApplication, Region};
    use common::requests::ErrorResponse;

    fn lead(name: &str) -> NewApplication {
        NewApplication {
            name: name.to_string(),
            contact: "010-1234-5678".to_string(),
            region: Region::Other,
            privacy_consent: true,
            checkbox_selection: Vec::new(),
            referrer_url: None,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            source: None,
        }
    }

    #[actix_web::test]
    async fn admin_sees_all_rows_newest_first() {
        let (_dir, state) = test_state(|_| {});
        for name in ["older", "newer"] {
            state.store.insert_application(&lead(name)).unwrap();
        }
        let cookie = signed_in(&state, "admin@example.com");
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/applications")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let rows: Vec<Application> = test::read_body_json(resp).await;
        let names: Vec<_> = rows.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["newer", "older"]);
    }

    #[actix_web::test]
    async fn listing_requires_session() {
        let (_dir, state) = test_state(|_| {});
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/applications")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.error, "로그인이 필요합니다.");
    }

    #[actix_web::test]
    async fn listing_requires_allow_list_membership() {
        let (_dir, state) =
            test_state(|c| c.admin_emails = vec!["boss@example.com".to_string()]);
        let cookie = signed_in(&state, "staff@example.com");
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/applications")
            .cookie(cookie)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }
}
