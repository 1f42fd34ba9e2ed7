use crate::access::require_admin;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use common::requests::{DeliveryRequest, SuccessResponse};
use log::info;

/// Sets or clears the delivered marker and answers with the updated row.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<DeliveryRequest>,
) -> Result<HttpResponse, ApiError> {
    let admin = require_admin(&req, &state).await?;
    let id = id.into_inner();
    let delivered = payload.delivered;
    let delivered_at = delivered.then(Utc::now);

    let target = id.clone();
    let updated = state
        .store
        .run(move |store| store.set_delivered(&target, delivered_at))
        .await?;

    info!("Admin {admin} marked application {id} delivered={delivered}");
    Ok(match updated {
        Some(app) => HttpResponse::Ok().json(app),
        None => HttpResponse::Ok().json(SuccessResponse::ok()),
    })
}
