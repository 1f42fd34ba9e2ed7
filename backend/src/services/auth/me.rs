use crate::access::current_session;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::SessionInfo;

/// Current-user lookup. Only authentication is checked here; the allow-list
/// applies to the dashboard and the admin API.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let email = current_session(&req, &state)
        .await?
        .ok_or(ApiError::Unauthenticated)?;
    Ok(HttpResponse::Ok().json(SessionInfo { email }))
}
