use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::store::NotificationStore;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllRead {
    #[schema(example = "u1")]
    pub user_id: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountQuery {
    /// Owner of the notifications to count
    pub user_id: Option<String>,
}

/// Mark-one-read endpoint
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Reported read", body = Object, example = json!({
            "success": true,
            "message": "Notification marked as read"
        })),
        (status = 500, description = "Store error")
    ),
    tag = "Notifications"
)]
pub async fn mark_read(
    store: web::Data<dyn NotificationStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match store.mark_read(&id).await {
        // Success is reported even when the id does not exist; existing
        // clients rely on this.
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Notification marked as read"
        }))),

        Err(e) => {
            tracing::error!(error = %e, id = %id, "Failed to mark notification as read");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to mark notification as read"
            })))
        }
    }
}

/// Mark-all-read endpoint
#[utoipa::path(
    put,
    path = "/api/notifications/mark-all-read",
    request_body = MarkAllRead,
    responses(
        (status = 200, description = "Unread notifications flipped", body = Object, example = json!({
            "success": true,
            "message": "All notifications marked as read",
            "count": 3
        })),
        (status = 400, description = "Missing userId"),
        (status = 500, description = "Store error")
    ),
    tag = "Notifications"
)]
pub async fn mark_all_read(
    store: web::Data<dyn NotificationStore>,
    payload: web::Json<MarkAllRead>,
) -> actix_web::Result<impl Responder> {
    let user_id = payload.user_id.as_deref().unwrap_or("").trim();
    if user_id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "userId is required"
        })));
    }

    match store.mark_all_read(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "All notifications marked as read",
            "count": count
        }))),

        Err(e) => {
            tracing::error!(error = %e, user_id, "Failed to mark all notifications as read");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to mark notifications as read"
            })))
        }
    }
}

/// Unread-count endpoint
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    params(UnreadCountQuery),
    responses(
        (status = 200, description = "Unread notifications for the user", body = Object, example = json!({
            "count": 2
        })),
        (status = 400, description = "Missing userId"),
        (status = 500, description = "Store error")
    ),
    tag = "Notifications"
)]
pub async fn unread_count(
    store: web::Data<dyn NotificationStore>,
    query: web::Query<UnreadCountQuery>,
) -> actix_web::Result<impl Responder> {
    let user_id = query.user_id.as_deref().unwrap_or("").trim();
    if user_id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "userId is required"
        })));
    }

    match store.unread_count(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count }))),

        Err(e) => {
            tracing::error!(error = %e, user_id, "Failed to count unread notifications");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to count unread notifications"
            })))
        }
    }
}
