use crate::ingest::ingest_scan;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct IdmRequest {
    /// IDm read from the card by the reader client.
    #[schema(example = "0123456789ABCDEF", value_type = String)]
    pub idm: Option<String>,
}

/// Scan ingestion endpoint for the card reader client
#[utoipa::path(
    post,
    path = "/api/idm",
    request_body = IdmRequest,
    responses(
        (status = 200, description = "Scan logged", body = Object, example = json!({
            "success": true,
            "message": "IDm received and logged."
        })),
        (status = 400, description = "Missing or empty IDm", body = Object, example = json!({
            "success": false,
            "message": "Invalid IDm received."
        })),
        (status = 500, description = "Durable write failed, scan not recorded")
    ),
    tag = "Scan"
)]
pub async fn receive_idm(
    state: web::Data<AppState>,
    payload: web::Json<IdmRequest>,
) -> actix_web::Result<impl Responder> {
    // Presence check only: any non-empty string is a valid IDm here.
    let idm = match payload.idm.as_deref() {
        Some(idm) if !idm.is_empty() => idm,
        _ => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Invalid IDm received."
            })));
        }
    };

    match ingest_scan(&state, idm) {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "IDm received and logged."
        }))),
        Err(e) => {
            error!(error = %e, idm, "scan ingestion failed");
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to persist scan log."
            })))
        }
    }
}
