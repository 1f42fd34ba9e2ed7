use crate::access::session_cookie;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::normalize_email;
use actix_web::{web, HttpResponse};
use chrono::Duration;
use common::requests::{LoginRequest, SessionInfo};
use log::{info, warn};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let LoginRequest { email, password } = payload.into_inner();
    let email = normalize_email(&email);
    let ttl = Duration::hours(state.config.session_ttl_hours);

    let attempt = email.clone();
    let token = state
        .store
        .run(move |store| {
            if !store.verify_credentials(&attempt, &password)? {
                return Ok(None);
            }
            store.create_session(&attempt, ttl).map(Some)
        })
        .await?;

    let Some(token) = token else {
        warn!("Failed admin login for {email}");
        return Err(ApiError::InvalidCredentials);
    };

    info!("Admin {email} signed in");
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, state.config.secure_cookies, ttl))
        .json(SessionInfo { email }))
}
