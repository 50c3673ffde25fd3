use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A validated device location ping. Not persisted yet; the tracking handler
/// only logs these.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = 23.7808)]
    pub latitude: f64,
    #[schema(example = 90.4194)]
    pub longitude: f64,
    #[schema(example = 12.5)]
    pub accuracy: Option<f64>,
    #[schema(example = 340.0)]
    pub distance: Option<f64>,
    #[schema(example = "2025-03-01T09:00:00Z", format = "date-time", value_type = String)]
    pub timestamp: Option<DateTime<Utc>>,
}
