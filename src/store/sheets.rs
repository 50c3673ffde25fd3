//! Tabular store client (Google Sheets v4 values API).

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::StoreError;
use crate::model::attendance::AttendanceRecord;
use crate::model::leave::LeaveStatusUpdate;
use crate::store::{AttendanceStore, LeaveStore};
use async_trait::async_trait;

/// Tab holding leave requests: A=id, B=status, C=paymentStatus, D=approvedBy.
const LEAVES_RANGE: &str = "Leaves!A2:D";

pub struct SheetsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn values_url(&self, sheet: &str, range: &str) -> String {
        format!(
            "{base}/v4/spreadsheets/{sheet}/values/{range}",
            base = self.base_url
        )
    }

    async fn read_range(&self, sheet: &str, range: &str) -> Result<ValueRange, StoreError> {
        let response = self
            .http
            .get(self.values_url(sheet, range))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(response.json::<ValueRange>().await?)
    }

    async fn write_range(&self, sheet: &str, range: &str, row: Value) -> Result<(), StoreError> {
        let response = self
            .http
            .put(self.values_url(sheet, range))
            .query(&[
                ("key", self.api_key.as_str()),
                ("valueInputOption", "RAW"),
            ])
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(())
    }
}

#[async_trait]
impl AttendanceStore for SheetsClient {
    async fn month_attendance(
        &self,
        sheet: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        // One tab per month: "2025-03!A2:C" with name, date, status columns
        let range = format!("{year}-{month:02}!A2:C");
        let value_range = self.read_range(sheet, &range).await?;

        let records = value_range
            .values
            .into_iter()
            .filter(|row| row.len() >= 3)
            .map(|mut row| AttendanceRecord {
                status: row.remove(2),
                date: row.remove(1),
                employee_name: row.remove(0),
            })
            .collect();

        Ok(records)
    }
}

#[async_trait]
impl LeaveStore for SheetsClient {
    async fn update_leave_status(
        &self,
        sheet: &str,
        update: &LeaveStatusUpdate,
    ) -> Result<(), StoreError> {
        let value_range = self.read_range(sheet, LEAVES_RANGE).await?;

        let row_index = value_range
            .values
            .iter()
            .position(|row| row.first().map(String::as_str) == Some(update.id.as_str()))
            .ok_or_else(|| {
                StoreError::backend(format!("Leave request {} not found", update.id))
            })?;

        // Data rows start at sheet row 2; null cells are skipped by the API
        // so absent optional fields keep their current values.
        let sheet_row = row_index + 2;
        let range = format!("Leaves!B{sheet_row}:D{sheet_row}");
        let row = json!([update.status, update.payment_status, update.approved_by]);

        self.write_range(sheet, &range, row).await
    }
}

/// Map a non-2xx Google API response to a backend error, surfacing the
/// `error.message` field when the body carries one.
pub(crate) async fn backend_error(response: reqwest::Response) -> StoreError {
    let status = response.status();

    match response.json::<Value>().await {
        Ok(body) => match body["error"]["message"].as_str() {
            Some(message) => StoreError::backend(message),
            None => StoreError::backend(format!("store responded with {status}")),
        },
        Err(_) => StoreError::backend(format!("store responded with {status}")),
    }
}
