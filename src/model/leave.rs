use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validated leave-status mutation handed to the tabular store.
///
/// Optional fields that are `None` leave the corresponding cells untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusUpdate {
    #[schema(example = "L1")]
    pub id: String,
    #[schema(example = "approved")]
    pub status: String,
    #[schema(example = "paid")]
    pub payment_status: Option<String>,
    #[schema(example = "hr.manager")]
    pub approved_by: Option<String>,
}
