//! # Slack Notification Service
//!
//! Stateless forwarder for `POST /api/slack`.
//!
//! ## Workflow:
//!
//! 1.  **Configuration check**: without `SLACK_WEBHOOK_URL` the request fails
//!     with a configuration error before anything is sent.
//! 2.  **Message assembly**: `build_message` renders the lead into a fixed
//!     Block Kit layout: header, divider, a two-column field section (name,
//!     contact, region, source), divider, and a context line with the
//!     registration time in KST.
//! 3.  **Delivery**: one JSON POST. Any non-2xx answer is logged with its
//!     body and its status is forwarded to the caller. Nothing is retried.

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use common::display::format_notification_timestamp;
use common::requests::{NotifyRequest, SuccessResponse};
use log::{error, info};
use serde_json::{json, Value};

const MISSING_WEBHOOK: &str = "Slack webhook URL이 설정되지 않았습니다.";

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Renders the notification payload for one lead.
pub fn build_message(lead: &NotifyRequest, registered_at: &DateTime<Utc>) -> Value {
    let field = |label: &str, value: &str| {
        json!({ "type": "mrkdwn", "text": format!("*{label}:*\n{value}") })
    };

    json!({
        "text": "🎉 새로운 지원자가 등록되었습니다!",
        "blocks": [
            {
                "type": "header",
                "text": { "type": "plain_text", "text": "🎉 새로운 지원자 등록", "emoji": true }
            },
            { "type": "divider" },
            {
                "type": "section",
                "fields": [
                    field("이름", or_placeholder(&lead.name, "")),
                    field("연락처", or_placeholder(&lead.contact, "")),
                    field("지역", or_placeholder(&lead.region, "미선택")),
                    field("유입 경로", or_placeholder(&lead.source, "직접 접속")),
                ]
            },
            { "type": "divider" },
            {
                "type": "context",
                "elements": [
                    {
                        "type": "mrkdwn",
                        "text": format!("등록 시간: {}", format_notification_timestamp(registered_at))
                    }
                ]
            }
        ]
    })
}

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<NotifyRequest>,
) -> Result<HttpResponse, ApiError> {
    let Some(webhook_url) = state.config.slack_webhook_url.as_deref() else {
        error!("SLACK_WEBHOOK_URL is not configured");
        return Err(ApiError::Configuration(MISSING_WEBHOOK.to_string()));
    };

    let message = build_message(&payload, &Utc::now());
    let response = state
        .http
        .post(webhook_url)
        .json(&message)
        .send()
        .await
        .map_err(|e| {
            error!("Slack webhook request failed: {e}");
            ApiError::Transport(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Slack webhook rejected notification ({status}): {body}");
        return Err(ApiError::Webhook {
            status: status.as_u16(),
        });
    }

    info!("Slack notification sent");
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services;
    use crate::state::test_support::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::TimeZone;
    use common::requests::ErrorResponse;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lead() -> NotifyRequest {
        NotifyRequest {
            name: Some("홍길동".into()),
            contact: Some("010-1234-5678".into()),
            region: Some("서울".into()),
            source: Some("인스타".into()),
        }
    }

    #[::core::prelude::v1::test]
    fn message_has_fixed_layout() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 6, 4, 5).unwrap();
        let message = build_message(&lead(), &at);

        let blocks = message["blocks"].as_array().unwrap();
        let kinds: Vec<_> = blocks.iter().map(|b| b["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["header", "divider", "section", "divider", "context"]);

        let fields = blocks[2]["fields"].as_array().unwrap();
        assert_eq!(fields[0]["text"], "*이름:*\n홍길동");
        assert_eq!(fields[1]["text"], "*연락처:*\n010-1234-5678");
        assert_eq!(fields[2]["text"], "*지역:*\n서울");
        assert_eq!(fields[3]["text"], "*유입 경로:*\n인스타");
        assert_eq!(
            blocks[4]["elements"][0]["text"],
            "등록 시간: 2025. 1. 5. 오후 3:04:05"
        );
    }

    #[::core::prelude::v1::test]
    fn missing_region_and_source_use_placeholders() {
        let lead = NotifyRequest {
            region: Some(String::new()),
            source: None,
            ..lead()
        };
        let message = build_message(&lead, &Utc::now());
        let fields = &message["blocks"][2]["fields"];
        assert_eq!(fields[2]["text"], "*지역:*\n미선택");
        assert_eq!(fields[3]["text"], "*유입 경로:*\n직접 접속");
    }

    #[actix_web::test]
    async fn missing_webhook_is_a_configuration_error() {
        let (_dir, state) = test_state(|_| {});
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::post()
            .uri("/api/slack")
            .set_json(lead())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.error, MISSING_WEBHOOK);
    }

    #[actix_web::test]
    async fn delivers_to_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(json!({ "text": "🎉 새로운 지원자가 등록되었습니다!" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/hook", server.uri());
        let (_dir, state) = test_state(|c| c.slack_webhook_url = Some(url));
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::post()
            .uri("/api/slack")
            .set_json(lead())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let ok: SuccessResponse = test::read_body_json(resp).await;
        assert!(ok.success);
    }

    #[actix_web::test]
    async fn webhook_rejection_status_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .mount(&server)
            .await;

        let url = server.uri();
        let (_dir, state) = test_state(|c| c.slack_webhook_url = Some(url));
        let app =
            test::init_service(App::new().configure(|cfg| services::configure(cfg, state))).await;

        let req = test::TestRequest::post()
            .uri("/api/slack")
            .set_json(lead())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.error, "Slack 알림 전송 실패");
    }
}
