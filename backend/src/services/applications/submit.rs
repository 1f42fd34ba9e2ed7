//! # Lead Submission Service
//!
//! `POST /api/applications`. The browser has already validated the form; the
//! same checks run here again because the datastore must never hold a lead
//! without consent, a region, or a well-formed phone number.
//!
//! There is no idempotency key: two identical submissions create two rows.

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::form::validate_new_application;
use common::model::application::NewApplication;
use common::requests::SuccessResponse;
use log::{error, info, warn};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<NewApplication>,
) -> Result<HttpResponse, ApiError> {
    let new = payload.into_inner();
    if let Err(e) = validate_new_application(&new) {
        warn!("Rejected application: {e}");
        return Err(e.into());
    }

    let app = state
        .store
        .run(move |store| store.insert_application(&new))
        .await
        .map_err(|e| {
            error!("Failed to store application: {e}");
            e
        })?;

    info!(
        "Stored application {} (region: {}, source: {})",
        app.id,
        app.region,
        app.source.as_deref().unwrap_or("direct")
    );
    Ok(HttpResponse::Created().json(SuccessResponse::created(app.id)))
}
