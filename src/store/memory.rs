//! In-memory implementation of every store trait.
//!
//! Backs the handler tests so the request-handling contract can be checked
//! without live Sheets/Firestore services. Counts external calls so tests
//! can assert that rejected requests never reach a store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::audit::{AuditLogEntry, EntityType};
use crate::model::leave::LeaveStatusUpdate;
use crate::model::notification::Notification;
use crate::store::{
    AttendanceStatusStore, AttendanceStore, AuditLogStore, DateRange, LeaveStore,
    NotificationStore,
};

#[derive(Debug, Clone, Default)]
pub struct LeaveRecord {
    pub status: String,
    pub payment_status: Option<String>,
    pub approved_by: Option<String>,
}

#[derive(Default)]
pub struct MemoryStore {
    calls: AtomicUsize,
    failure: Mutex<Option<String>>,
    attendance: Mutex<HashMap<(i32, u32), Vec<AttendanceRecord>>>,
    statuses: Mutex<HashMap<(String, NaiveDate), String>>,
    leaves: Mutex<HashMap<String, LeaveRecord>>,
    notifications: Mutex<Vec<Notification>>,
    audit: Mutex<Vec<AuditLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many store calls the handlers have made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with the given backend message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn seed_attendance(&self, year: i32, month: u32, records: Vec<AttendanceRecord>) {
        self.attendance.lock().unwrap().insert((year, month), records);
    }

    pub fn seed_status(&self, employee_name: &str, date: NaiveDate, status: &str) {
        self.statuses
            .lock()
            .unwrap()
            .insert((employee_name.to_string(), date), status.to_string());
    }

    pub fn seed_leave(&self, id: &str, record: LeaveRecord) {
        self.leaves.lock().unwrap().insert(id.to_string(), record);
    }

    pub fn leave(&self, id: &str) -> Option<LeaveRecord> {
        self.leaves.lock().unwrap().get(id).cloned()
    }

    pub fn seed_notification(&self, id: &str, user_id: &str, read: bool) {
        self.notifications.lock().unwrap().push(Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            read,
        });
    }

    pub fn notification(&self, id: &str) -> Option<Notification> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    pub fn seed_audit_entry(&self, entry: AuditLogEntry) {
        self.audit.lock().unwrap().push(entry);
    }

    fn begin_call(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::backend(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn month_attendance(
        &self,
        _sheet: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.begin_call()?;
        Ok(self
            .attendance
            .lock()
            .unwrap()
            .get(&(year, month))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl AttendanceStatusStore for MemoryStore {
    async fn attendance_status(
        &self,
        employee_name: &str,
        date: NaiveDate,
    ) -> Result<AttendanceStatus, StoreError> {
        self.begin_call()?;
        let status = self
            .statuses
            .lock()
            .unwrap()
            .get(&(employee_name.to_string(), date))
            .cloned();

        Ok(AttendanceStatus {
            employee_name: employee_name.to_string(),
            date,
            status,
        })
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn update_leave_status(
        &self,
        _sheet: &str,
        update: &LeaveStatusUpdate,
    ) -> Result<(), StoreError> {
        self.begin_call()?;
        let mut leaves = self.leaves.lock().unwrap();
        let record = leaves
            .get_mut(&update.id)
            .ok_or_else(|| StoreError::backend(format!("Leave request {} not found", update.id)))?;

        record.status = update.status.clone();
        if update.payment_status.is_some() {
            record.payment_status = update.payment_status.clone();
        }
        if update.approved_by.is_some() {
            record.approved_by = update.approved_by.clone();
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn mark_read(&self, id: &str) -> Result<(), StoreError> {
        self.begin_call()?;
        if let Some(notification) = self
            .notifications
            .lock()
            .unwrap()
            .iter_mut()
            .find(|n| n.id == id)
        {
            notification.read = true;
        }
        // Unknown ids fall through: same permissive contract as production
        Ok(())
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64, StoreError> {
        self.begin_call()?;
        let mut updated = 0;
        for notification in self.notifications.lock().unwrap().iter_mut() {
            if notification.user_id == user_id && !notification.read {
                notification.read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn unread_count(&self, user_id: &str) -> Result<u64, StoreError> {
        self.begin_call()?;
        let count = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl AuditLogStore for MemoryStore {
    async fn logs_for_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<Vec<AuditLogEntry>, StoreError> {
        self.begin_call()?;
        let logs = self
            .audit
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.employee_id == employee_id)
            .filter(|entry| {
                let day = entry.timestamp.date_naive();
                range.start.is_none_or(|start| day >= start)
                    && range.end.is_none_or(|end| day <= end)
            })
            .cloned()
            .collect();
        Ok(logs)
    }

    async fn logs_for_entity(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, StoreError> {
        self.begin_call()?;
        let logs = self
            .audit
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.entity_type == entity_type && entry.entity_id == entity_id)
            .cloned()
            .collect();
        Ok(logs)
    }
}
