//! Types and pure logic shared by the schedule front end and the mock API.
//!
//! Everything here is free of I/O and of the system clock: "today" is always
//! passed in, so every function can be tested with fixed dates.

use serde::{Deserialize, Serialize};

pub mod animal;
pub mod notification;
pub mod schedule;
pub mod schedule_view;
pub mod treatment;

pub use animal::{AnimalRef, AnimalSummary, HealthStatus, UpdateHealthStatusRequest};
pub use notification::{MarkAllReadResponse, Notification, NotificationAction, NotificationState};
pub use schedule::{
    apply_filter, bucket_counts, classify, parse_calendar_date, reference_date, Bucket,
    BucketCounts, ScheduleFilter, ScheduleRecord, ScheduleStatus, UnknownFilter,
};
pub use schedule_view::{LoadState, ScheduleView, ScheduleViewAction};
pub use treatment::{
    build_treatment_request, plan_treatment_submission, validate_treatment_form,
    RecordTreatmentRequest, TreatmentForm, TreatmentFormValidation, TreatmentRecord,
    TreatmentSubmission, TreatmentValidationError,
};

/// Log line forwarded by the front end to `POST /logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
