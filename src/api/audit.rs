use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use utoipa::IntoParams;

use crate::config::Config;
use crate::model::audit::{AuditLogEntry, EntityType};
use crate::store::{AuditLogStore, DateRange};

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AuditRangeQuery {
    /// Inclusive lower bound on the entry date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date
    pub end_date: Option<NaiveDate>,
}

fn logs_response(logs: Vec<AuditLogEntry>) -> HttpResponse {
    let total = logs.len();
    HttpResponse::Ok().json(serde_json::json!({
        "logs": logs,
        "total": total
    }))
}

fn config_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": "Attendance spreadsheet ID is not configured"
    }))
}

/// Audit trail of one employee
#[utoipa::path(
    get,
    path = "/api/audit/employee/{employeeId}",
    params(
        ("employeeId" = String, Path, description = "Employee to audit"),
        AuditRangeQuery
    ),
    responses(
        (status = 200, description = "Matching audit entries", body = Object, example = json!({
            "logs": [],
            "total": 0
        })),
        (status = 500, description = "Spreadsheet not configured or store error")
    ),
    tag = "Audit"
)]
pub async fn by_employee(
    config: web::Data<Config>,
    store: web::Data<dyn AuditLogStore>,
    path: web::Path<String>,
    query: web::Query<AuditRangeQuery>,
) -> actix_web::Result<impl Responder> {
    if config.spreadsheet_id.is_none() {
        return Ok(config_error());
    }

    let employee_id = path.into_inner();
    let range = DateRange {
        start: query.start_date,
        end: query.end_date,
    };

    match store.logs_for_employee(&employee_id, range).await {
        Ok(logs) => Ok(logs_response(logs)),

        Err(e) => {
            tracing::error!(error = %e, employee_id = %employee_id, "Failed to fetch employee audit logs");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch audit logs"
            })))
        }
    }
}

/// Audit trail of one entity
#[utoipa::path(
    get,
    path = "/api/audit/logs/{entityType}/{entityId}",
    params(
        ("entityType" = EntityType, Path, description = "Kind of the audited entity"),
        ("entityId" = String, Path, description = "Id of the audited entity")
    ),
    responses(
        (status = 200, description = "Matching audit entries", body = Object, example = json!({
            "logs": [],
            "total": 0
        })),
        (status = 400, description = "Unknown entity type"),
        (status = 500, description = "Spreadsheet not configured or store error")
    ),
    tag = "Audit"
)]
pub async fn by_entity(
    config: web::Data<Config>,
    store: web::Data<dyn AuditLogStore>,
    path: web::Path<(String, String)>,
) -> actix_web::Result<impl Responder> {
    // Parsed by hand: a Path<EntityType> extractor would turn an unknown
    // kind into a 404 instead of a validation failure.
    let (entity_type, entity_id) = path.into_inner();
    let Ok(entity_type) = EntityType::from_str(&entity_type) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Unknown entity type"
        })));
    };

    if config.spreadsheet_id.is_none() {
        return Ok(config_error());
    }

    match store.logs_for_entity(entity_type, &entity_id).await {
        Ok(logs) => Ok(logs_response(logs)),

        Err(e) => {
            tracing::error!(error = %e, %entity_type, entity_id = %entity_id, "Failed to fetch entity audit logs");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to fetch audit logs"
            })))
        }
    }
}
