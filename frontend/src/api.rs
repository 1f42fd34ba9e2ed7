//! Thin client over the backend JSON API.
//!
//! Every call resolves to `Result<T, ApiFailure>`. A failure carries the
//! HTTP status (0 for transport errors) and the `error` text the server sent,
//! so callers can show it verbatim.

use common::model::application::{Application, NewApplication};
use common::requests::{
    DeliveryRequest, ErrorResponse, LoginRequest, NotifyRequest, SessionInfo, SuccessResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const GENERIC_FAILURE: &str = "신청에 실패했습니다. 다시 시도해주세요.";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
}

impl ApiFailure {
    fn transport(err: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: err.to_string(),
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.status == 401
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }
}

async fn failure(response: Response) -> ApiFailure {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => GENERIC_FAILURE.to_string(),
    };
    ApiFailure { status, message }
}

async fn send<T: DeserializeOwned>(request: Result<Request, gloo_net::Error>) -> Result<T, ApiFailure> {
    let response = request
        .map_err(ApiFailure::transport)?
        .send()
        .await
        .map_err(ApiFailure::transport)?;

    if !response.ok() {
        return Err(failure(response).await);
    }
    response.json::<T>().await.map_err(ApiFailure::transport)
}

fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, gloo_net::Error> {
    builder.json(body)
}

/// Inserts a lead. Returns the new row id.
pub async fn submit_application(payload: &NewApplication) -> Result<String, ApiFailure> {
    let created: SuccessResponse =
        send(with_json(Request::post("/api/applications"), payload)).await?;
    Ok(created.id.unwrap_or_default())
}

pub async fn notify_new_lead(payload: &NotifyRequest) -> Result<(), ApiFailure> {
    send::<SuccessResponse>(with_json(Request::post("/api/slack"), payload))
        .await
        .map(|_| ())
}

pub async fn login(email: String, password: String) -> Result<SessionInfo, ApiFailure> {
    send(with_json(
        Request::post("/api/auth/login"),
        &LoginRequest { email, password },
    ))
    .await
}

pub async fn current_session() -> Result<SessionInfo, ApiFailure> {
    send(Request::get("/api/auth/me").build()).await
}

pub async fn logout() -> Result<(), ApiFailure> {
    send::<SuccessResponse>(Request::post("/api/auth/logout").build())
        .await
        .map(|_| ())
}

pub async fn list_applications() -> Result<Vec<Application>, ApiFailure> {
    send(Request::get("/api/admin/applications").build()).await
}

pub async fn delete_application(id: &str) -> Result<(), ApiFailure> {
    send::<SuccessResponse>(Request::delete(&format!("/api/admin/applications/{id}")).build())
        .await
        .map(|_| ())
}

pub async fn set_delivered(id: &str, delivered: bool) -> Result<(), ApiFailure> {
    send::<serde::de::IgnoredAny>(with_json(
        Request::patch(&format!("/api/admin/applications/{id}/delivered")),
        &DeliveryRequest { delivered },
    ))
    .await
    .map(|_| ())
}
