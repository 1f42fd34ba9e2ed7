use crate::access::require_admin;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::SuccessResponse;
use log::info;

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let admin = require_admin(&req, &state).await?;
    let id = id.into_inner();

    let target = id.clone();
    let removed = state
        .store
        .run(move |store| store.delete_application(&target))
        .await?;

    info!("Admin {admin} deleted application {id} (matched: {removed})");
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
