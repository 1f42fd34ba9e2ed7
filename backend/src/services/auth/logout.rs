use crate::access::{removal_cookie, SESSION_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::SuccessResponse;
use log::info;

/// Signs out. Succeeds even without a session so the browser can always
/// clear its cookie.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        let token = cookie.value().to_string();
        state
            .store
            .run(move |store| store.delete_session(&token))
            .await?;
        info!("Admin session closed");
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(SuccessResponse::ok()))
}
