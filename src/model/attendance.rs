use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One attendance row from the tabular store. The date is kept as the raw
/// cell text so the record list goes back to the caller unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "2025-03-01")]
    pub date: String,
    #[schema(example = "present")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatus {
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "2025-03-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// None when the document store has no record for that employee and day
    #[schema(example = "present", value_type = String)]
    pub status: Option<String>,
}
