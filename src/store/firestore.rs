//! Document store client (Firestore v1 REST API).

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::error::StoreError;
use crate::model::attendance::AttendanceStatus;
use crate::model::audit::{AuditLogEntry, EntityType};
use crate::store::sheets::backend_error;
use crate::store::{AttendanceStatusStore, AuditLogStore, DateRange, NotificationStore};

pub struct FirestoreClient {
    http: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(base_url: &str, project_id: &str, api_key: &str) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn documents_root(&self) -> String {
        format!(
            "projects/{project}/databases/(default)/documents",
            project = self.project_id
        )
    }

    /// Run a structured query and return the matched documents.
    async fn run_query(&self, query: Value) -> Result<Vec<Value>, StoreError> {
        let url = format!(
            "{base}/{root}:runQuery",
            base = self.base_url,
            root = self.documents_root()
        );

        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        // runQuery streams an array of result entries; entries without a
        // "document" key (read time markers) carry no data.
        let entries = response.json::<Vec<Value>>().await?;
        Ok(entries
            .into_iter()
            .filter_map(|mut entry| {
                let document = entry["document"].take();
                document.is_object().then_some(document)
            })
            .collect())
    }

    /// Set `read = true` on one notification document. `name` is either a
    /// full resource path or a bare document id.
    async fn set_read(&self, name: &str) -> Result<StatusCode, StoreError> {
        let path = if name.contains('/') {
            name.to_string()
        } else {
            format!("{root}/notifications/{name}", root = self.documents_root())
        };

        let response = self
            .http
            .patch(format!("{base}/{path}", base = self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("updateMask.fieldPaths", "read"),
            ])
            .json(&json!({ "fields": { "read": { "booleanValue": true } } }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(backend_error(response).await);
        }

        Ok(status)
    }

    fn unread_query(&self, user_id: &str) -> Value {
        json!({
            "from": [{ "collectionId": "notifications" }],
            "where": {
                "compositeFilter": {
                    "op": "AND",
                    "filters": [
                        field_equals("userId", json!({ "stringValue": user_id })),
                        field_equals("read", json!({ "booleanValue": false })),
                    ]
                }
            }
        })
    }
}

#[async_trait]
impl AttendanceStatusStore for FirestoreClient {
    async fn attendance_status(
        &self,
        employee_name: &str,
        date: NaiveDate,
    ) -> Result<AttendanceStatus, StoreError> {
        let date_text = date.format("%Y-%m-%d").to_string();
        let query = json!({
            "from": [{ "collectionId": "attendance" }],
            "where": {
                "compositeFilter": {
                    "op": "AND",
                    "filters": [
                        field_equals("employeeName", json!({ "stringValue": employee_name })),
                        field_equals("date", json!({ "stringValue": date_text })),
                    ]
                }
            },
            "limit": 1
        });

        let documents = self.run_query(query).await?;
        let status = documents
            .first()
            .and_then(|doc| string_field(doc, "status"));

        Ok(AttendanceStatus {
            employee_name: employee_name.to_string(),
            date,
            status,
        })
    }
}

#[async_trait]
impl NotificationStore for FirestoreClient {
    async fn mark_read(&self, id: &str) -> Result<(), StoreError> {
        // A 404 is deliberately not surfaced: marking a missing
        // notification as read is a no-op for the caller.
        self.set_read(id).await.map(|_| ())
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError> {
        let documents = self.run_query(self.unread_query(user_id)).await?;

        let mut updated = 0;
        for document in &documents {
            let Some(name) = document["name"].as_str() else {
                continue;
            };
            if self.set_read(name).await?.is_success() {
                updated += 1;
            }
        }

        Ok(updated)
    }

    async fn unread_count(&self, user_id: &str) -> Result<u64, StoreError> {
        let documents = self.run_query(self.unread_query(user_id)).await?;
        Ok(documents.len() as u64)
    }
}

#[async_trait]
impl AuditLogStore for FirestoreClient {
    async fn logs_for_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<Vec<AuditLogEntry>, StoreError> {
        let mut filters = vec![field_equals(
            "employeeId",
            json!({ "stringValue": employee_id }),
        )];
        filters.extend(day_range_filters(range));

        let query = json!({
            "from": [{ "collectionId": "audit_logs" }],
            "where": { "compositeFilter": { "op": "AND", "filters": filters } },
            "orderBy": [{ "field": { "fieldPath": "timestamp" }, "direction": "DESCENDING" }]
        });

        let documents = self.run_query(query).await?;
        Ok(documents.iter().filter_map(parse_audit_entry).collect())
    }

    async fn logs_for_entity(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, StoreError> {
        let query = json!({
            "from": [{ "collectionId": "audit_logs" }],
            "where": {
                "compositeFilter": {
                    "op": "AND",
                    "filters": [
                        field_equals("entityType", json!({ "stringValue": entity_type.to_string() })),
                        field_equals("entityId", json!({ "stringValue": entity_id })),
                    ]
                }
            },
            "orderBy": [{ "field": { "fieldPath": "timestamp" }, "direction": "DESCENDING" }]
        });

        let documents = self.run_query(query).await?;
        Ok(documents.iter().filter_map(parse_audit_entry).collect())
    }
}

/// Timestamp filters for an inclusive day range. The upper bound is a
/// strict `LESS_THAN` on the start of the next day so entries anywhere in
/// the last second of the final day still match.
fn day_range_filters(range: DateRange) -> Vec<Value> {
    let mut filters = Vec::new();

    if let Some(start) = range.start {
        filters.push(field_filter(
            "timestamp",
            "GREATER_THAN_OR_EQUAL",
            json!({ "timestampValue": format!("{start}T00:00:00Z") }),
        ));
    }
    if let Some(next_day) = range.end.and_then(|end| end.succ_opt()) {
        filters.push(field_filter(
            "timestamp",
            "LESS_THAN",
            json!({ "timestampValue": format!("{next_day}T00:00:00Z") }),
        ));
    }

    filters
}

fn field_equals(path: &str, value: Value) -> Value {
    field_filter(path, "EQUAL", value)
}

fn field_filter(path: &str, op: &str, value: Value) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": path },
            "op": op,
            "value": value
        }
    })
}

fn string_field(document: &Value, name: &str) -> Option<String> {
    document["fields"][name]["stringValue"]
        .as_str()
        .map(str::to_string)
}

/// Malformed audit documents are dropped rather than failing the query.
fn parse_audit_entry(document: &Value) -> Option<AuditLogEntry> {
    let entity_type = EntityType::from_str(&string_field(document, "entityType")?).ok()?;
    let timestamp = document["fields"]["timestamp"]["timestampValue"]
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())?
        .with_timezone(&Utc);

    Some(AuditLogEntry {
        entity_type,
        entity_id: string_field(document, "entityId")?,
        employee_id: string_field(document, "employeeId")?,
        action: string_field(document, "action").unwrap_or_default(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn day_range_upper_bound_covers_the_whole_final_day() {
        let filters = day_range_filters(DateRange {
            start: Some(date(2025, 3, 1)),
            end: Some(date(2025, 3, 5)),
        });

        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0]["fieldFilter"]["op"], "GREATER_THAN_OR_EQUAL");
        assert_eq!(
            filters[0]["fieldFilter"]["value"]["timestampValue"],
            "2025-03-01T00:00:00Z"
        );
        // Strict bound on the next day, so 2025-03-05T23:59:59.900Z matches
        assert_eq!(filters[1]["fieldFilter"]["op"], "LESS_THAN");
        assert_eq!(
            filters[1]["fieldFilter"]["value"]["timestampValue"],
            "2025-03-06T00:00:00Z"
        );
    }

    #[test]
    fn day_range_end_rolls_over_month_and_year() {
        let filters = day_range_filters(DateRange {
            start: None,
            end: Some(date(2025, 12, 31)),
        });

        assert_eq!(filters.len(), 1);
        assert_eq!(
            filters[0]["fieldFilter"]["value"]["timestampValue"],
            "2026-01-01T00:00:00Z"
        );
    }

    #[test]
    fn unbounded_range_adds_no_filters() {
        assert!(day_range_filters(DateRange::default()).is_empty());
    }
}

