use crate::api::attendance::{MonthRequest, StatusRequest};
use crate::api::leave::UpdateLeaveStatus;
use crate::api::notification::MarkAllRead;
use crate::api::tracking::LocationRequest;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::audit::{AuditLogEntry, EntityType};
use crate::model::leave::LeaveStatusUpdate;
use crate::model::location::LocationUpdate;
use crate::model::notification::Notification;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "StaffHub API",
        version = "1.0.0",
        description = r#"
## Employee attendance, leave and notification backend

Thin request-handling layer over the organisation's Google Sheets and
Firestore data. Every endpoint validates its input, performs exactly one
store call and maps the outcome to a JSON response.

### Resources
- **Attendance** — monthly records and per-day status lookups
- **Leave** — status updates on leave requests
- **Notifications** — read flags and unread counts
- **Audit** — read-only change trails by employee or entity
- **Tracking** — device location pings (received and logged)
"#,
    ),
    paths(
        crate::api::attendance::fetch_monthly,
        crate::api::attendance::check_status,

        crate::api::leave::update_status,

        crate::api::notification::mark_read,
        crate::api::notification::mark_all_read,
        crate::api::notification::unread_count,

        crate::api::audit::by_employee,
        crate::api::audit::by_entity,

        crate::api::tracking::report_location
    ),
    components(
        schemas(
            MonthRequest,
            StatusRequest,
            AttendanceRecord,
            AttendanceStatus,
            UpdateLeaveStatus,
            LeaveStatusUpdate,
            MarkAllRead,
            Notification,
            AuditLogEntry,
            EntityType,
            LocationRequest,
            LocationUpdate
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance lookup APIs"),
        (name = "Leave", description = "Leave status APIs"),
        (name = "Notifications", description = "Notification read-state APIs"),
        (name = "Audit", description = "Audit trail APIs"),
        (name = "Tracking", description = "Location tracking APIs"),
    )
)]
pub struct ApiDoc;
