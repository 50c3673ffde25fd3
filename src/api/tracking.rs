use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::location::LocationUpdate;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[schema(example = "u1")]
    pub user_id: Option<String>,
    #[schema(example = 23.7808)]
    pub latitude: Option<f64>,
    #[schema(example = 90.4194)]
    pub longitude: Option<f64>,
    #[schema(example = 12.5)]
    pub accuracy: Option<f64>,
    #[schema(example = 340.0)]
    pub distance: Option<f64>,
    #[schema(example = "2025-03-01T09:00:00Z", format = "date-time", value_type = String)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Location update endpoint
#[utoipa::path(
    post,
    path = "/api/tracking/location",
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Update received", body = Object, example = json!({
            "success": true,
            "message": "Location update received"
        })),
        (status = 400, description = "Missing userId, latitude or longitude")
    ),
    tag = "Tracking"
)]
pub async fn report_location(
    payload: web::Json<LocationRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let user_id = payload.user_id.as_deref().unwrap_or("").trim();

    // Presence checks only. Zero is a legitimate coordinate, so the check is
    // on the field being there, not on its value.
    let (Some(latitude), Some(longitude)) = (payload.latitude, payload.longitude) else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "userId, latitude and longitude are required"
        })));
    };
    if user_id.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "userId, latitude and longitude are required"
        })));
    }

    let update = LocationUpdate {
        user_id: user_id.to_string(),
        latitude,
        longitude,
        accuracy: payload.accuracy,
        distance: payload.distance,
        timestamp: payload.timestamp,
    };

    // Updates are not persisted anywhere yet, only logged.
    tracing::info!(
        user_id = %update.user_id,
        latitude = update.latitude,
        longitude = update.longitude,
        accuracy = update.accuracy,
        distance = update.distance,
        "Location update received"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Location update received"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    async fn post(body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(App::new().service(
            web::scope("/tracking")
                .service(web::resource("/location").route(web::post().to(report_location))),
        ))
        .await;

        let req = test::TestRequest::post()
            .uri("/tracking/location")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn full_update_is_accepted() {
        let resp = post(serde_json::json!({
            "userId": "u1",
            "latitude": 23.7808,
            "longitude": 90.4194,
            "accuracy": 12.5,
            "distance": 340.0,
            "timestamp": "2025-03-01T09:00:00Z"
        }))
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn zero_coordinates_are_valid() {
        let resp = post(serde_json::json!({
            "userId": "u1",
            "latitude": 0,
            "longitude": 0
        }))
        .await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn missing_required_fields_are_rejected() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({"userId": "u1", "latitude": 1.0}),
            serde_json::json!({"userId": "u1", "longitude": 1.0}),
            serde_json::json!({"latitude": 1.0, "longitude": 1.0}),
            serde_json::json!({"userId": "", "latitude": 1.0, "longitude": 1.0}),
        ] {
            let resp = post(body).await;
            assert_eq!(resp.status(), 400);
        }
    }
}
