use crate::state::AppState;
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde_json::json;
use tracing::{error, info};

/// Polling endpoint for the GAS consumer
#[utoipa::path(
    get,
    path = "/api/gas-polling",
    responses(
        (status = 200, description = "Unsynced scans, now marked synced; or nothing pending", body = Object, example = json!({
            "success": true,
            "syncedLogs": [{
                "idm": "0123456789ABCDEF",
                "employeeId": "E001",
                "name": "山田 太郎",
                "mode": "出勤",
                "timestamp": "2026/08/30 09:12:45",
                "isSyncedWithGas": true
            }]
        })),
        (status = 500, description = "Durable write failed, sync flags unchanged")
    ),
    tag = "Sync"
)]
pub async fn gas_polling(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let mut log = state
        .log
        .lock()
        .map_err(|_| ErrorInternalServerError("state lock poisoned"))?;

    match log.drain_unsynced() {
        Ok(synced) if synced.is_empty() => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "No unsynced logs to send."
        }))),
        Ok(synced) => {
            info!(count = synced.len(), "delivered unsynced logs to GAS poller");
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "syncedLogs": synced
            })))
        }
        Err(e) => {
            error!(error = %e, "sync drain failed");
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to persist sync state."
            })))
        }
    }
}
