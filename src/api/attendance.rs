use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::store::{AttendanceStatusStore, AttendanceStore};

#[derive(Deserialize, ToSchema)]
pub struct MonthRequest {
    #[schema(example = 2025)]
    pub year: Option<i32>,
    #[schema(example = 3)]
    pub month: Option<u32>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    #[schema(example = "Jane Doe")]
    pub employee_name: Option<String>,
    #[schema(example = "2025-03-01", format = "date", value_type = String)]
    pub date: Option<NaiveDate>,
}

/// Monthly attendance endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/month",
    request_body = MonthRequest,
    responses(
        (status = 200, description = "Attendance rows for the month", body = Vec<crate::model::attendance::AttendanceRecord>),
        (status = 400, description = "Missing year or month", body = Object, example = json!({
            "error": "Year and month are required"
        })),
        (status = 500, description = "Spreadsheet not configured or store error")
    ),
    tag = "Attendance"
)]
pub async fn fetch_monthly(
    config: web::Data<Config>,
    store: web::Data<dyn AttendanceStore>,
    payload: web::Json<MonthRequest>,
) -> actix_web::Result<impl Responder> {
    let (Some(year), Some(month)) = (payload.year, payload.month) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Year and month are required"
        })));
    };

    let Some(sheet) = config.spreadsheet_id.as_deref() else {
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Attendance spreadsheet ID is not configured"
        })));
    };

    match store.month_attendance(sheet, year, month).await {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),

        Err(e) => {
            tracing::error!(error = %e, year, month, "Failed to fetch monthly attendance");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch attendance data"
            })))
        }
    }
}

/// Attendance status endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/status",
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status for the employee and day", body = crate::model::attendance::AttendanceStatus),
        (status = 400, description = "Missing employeeName or date", body = Object, example = json!({
            "error": "Employee name and date are required"
        })),
        (status = 500, description = "Store error")
    ),
    tag = "Attendance"
)]
pub async fn check_status(
    store: web::Data<dyn AttendanceStatusStore>,
    payload: web::Json<StatusRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_name = payload.employee_name.as_deref().unwrap_or("").trim();
    let Some(date) = payload.date.filter(|_| !employee_name.is_empty()) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Employee name and date are required"
        })));
    };

    match store.attendance_status(employee_name, date).await {
        Ok(status) => Ok(HttpResponse::Ok().json(status)),

        Err(e) => {
            tracing::error!(error = %e, employee_name, "Failed to fetch attendance status");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch attendance status"
            })))
        }
    }
}
