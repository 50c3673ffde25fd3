//! Narrow interfaces over the external stores.
//!
//! Handlers only ever see these traits, so the request-handling contract can
//! be exercised with the in-memory implementation instead of live services.
//! `SheetsClient` covers the tabular traits, `FirestoreClient` the document
//! traits, and `MemoryStore` all of them.

pub mod firestore;
#[cfg(test)]
pub mod memory;
pub mod sheets;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::audit::{AuditLogEntry, EntityType};
use crate::model::leave::LeaveStatusUpdate;

/// Inclusive date-range filter for audit queries; `None` means unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Monthly attendance rows, backed by the tabular store.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn month_attendance(
        &self,
        sheet: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;
}

/// Per-day attendance status of one employee, backed by the document store.
#[async_trait]
pub trait AttendanceStatusStore: Send + Sync {
    async fn attendance_status(
        &self,
        employee_name: &str,
        date: NaiveDate,
    ) -> Result<AttendanceStatus, StoreError>;
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn update_leave_status(
        &self,
        sheet: &str,
        update: &LeaveStatusUpdate,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Flip a single notification to read. A missing id is not an error.
    async fn mark_read(&self, id: &str) -> Result<(), StoreError>;

    /// Flip every unread notification for the user; returns how many changed.
    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn unread_count(&self, user_id: &str) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait AuditLogStore: Send + Sync {
    async fn logs_for_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<Vec<AuditLogEntry>, StoreError>;

    async fn logs_for_entity(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, StoreError>;
}
