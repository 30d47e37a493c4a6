use crate::state::AppState;
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde_json::json;

/// Status endpoint for the local display
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Current mode and today's scan log", body = Object, example = json!({
            "mode": "出勤",
            "logs": [{
                "idm": "0123456789ABCDEF",
                "employeeId": "E001",
                "name": "山田 太郎",
                "mode": "出勤",
                "timestamp": "2026/08/30 09:12:45",
                "isSyncedWithGas": false
            }]
        }))
    ),
    tag = "Status"
)]
pub async fn status(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let mode = *state
        .mode
        .lock()
        .map_err(|_| ErrorInternalServerError("state lock poisoned"))?;
    let logs = state
        .log
        .lock()
        .map_err(|_| ErrorInternalServerError("state lock poisoned"))?
        .list_all();

    // Read-only: no sync flag is touched on this path.
    Ok(HttpResponse::Ok().json(json!({
        "mode": mode,
        "logs": logs
    })))
}
