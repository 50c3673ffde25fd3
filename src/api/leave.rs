use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::error::StoreError;
use crate::model::leave::LeaveStatusUpdate;
use crate::store::LeaveStore;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveStatus {
    #[schema(example = "L1")]
    pub id: Option<String>,
    #[schema(example = "approved")]
    pub status: Option<String>,
    #[schema(example = "paid")]
    pub payment_status: Option<String>,
    #[schema(example = "hr.manager")]
    pub approved_by: Option<String>,
}

/// Leave status update endpoint
#[utoipa::path(
    put,
    path = "/api/leaves/status",
    request_body = UpdateLeaveStatus,
    responses(
        (status = 200, description = "Leave status updated", body = Object, example = json!({
            "success": true
        })),
        (status = 400, description = "Missing id or status", body = Object, example = json!({
            "success": false,
            "error": "id and status are required"
        })),
        (status = 500, description = "Spreadsheet not configured or store error")
    ),
    tag = "Leave"
)]
pub async fn update_status(
    config: web::Data<Config>,
    store: web::Data<dyn LeaveStore>,
    payload: web::Json<UpdateLeaveStatus>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let id = payload.id.as_deref().unwrap_or("").trim();
    let status = payload.status.as_deref().unwrap_or("").trim();

    if id.is_empty() || status.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "id and status are required"
        })));
    }

    let Some(sheet) = config.spreadsheet_id.as_deref() else {
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": "Attendance spreadsheet ID is not configured"
        })));
    };

    let update = LeaveStatusUpdate {
        id: id.to_string(),
        status: status.to_string(),
        payment_status: payload.payment_status,
        approved_by: payload.approved_by,
    };

    match store.update_leave_status(sheet, &update).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true }))),

        Err(e) => {
            tracing::error!(error = %e, leave_id = %update.id, "Failed to update leave status");
            // This endpoint passes the store's own message through to the
            // caller; other handlers keep it server-side only.
            let message = match e {
                StoreError::Backend(message) => message,
                _ => "Failed to update leave status".to_string(),
            };
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": message
            })))
        }
    }
}
