use crate::model::mode::Mode;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ModeRequest {
    /// Requested mode label, exactly "出勤" or "退勤".
    #[schema(example = "退勤", value_type = String)]
    pub mode: Option<String>,
}

/// Mode switch endpoint for the UI
#[utoipa::path(
    post,
    path = "/api/mode",
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Mode switched", body = Object, example = json!({
            "success": true,
            "newMode": "退勤"
        })),
        (status = 400, description = "Unrecognized mode label", body = Object, example = json!({
            "success": false,
            "message": "Invalid mode."
        }))
    ),
    tag = "Mode"
)]
pub async fn switch_mode(
    state: web::Data<AppState>,
    payload: web::Json<ModeRequest>,
) -> actix_web::Result<impl Responder> {
    let requested = payload.mode.as_deref().unwrap_or_default();
    let Ok(new_mode) = Mode::from_str(requested) else {
        // Active mode stays untouched on a bad label.
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Invalid mode."
        })));
    };

    let mut mode = state
        .mode
        .lock()
        .map_err(|_| ErrorInternalServerError("state lock poisoned"))?;
    *mode = new_mode;
    info!("Mode switched to: {}", new_mode);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "newMode": new_mode
    })))
}
