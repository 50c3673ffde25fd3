use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Closed set of entity kinds an audit entry can reference. Path extraction
/// rejects anything outside this set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityType {
    Employee,
    Attendance,
    Leave,
    Notification,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub entity_type: EntityType,
    #[schema(example = "L1")]
    pub entity_id: String,
    #[schema(example = "E1000")]
    pub employee_id: String,
    #[schema(example = "update")]
    pub action: String,
    #[schema(example = "2025-03-01T09:00:00Z", format = "date-time", value_type = String)]
    pub timestamp: DateTime<Utc>,
}
