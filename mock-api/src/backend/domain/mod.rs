//! # Domain Module
//!
//! Services holding the rules the real livestock API enforces and the front
//! end relies on:
//!
//! - **schedule_service**: assigned schedules, detail with populated animal
//! - **treatment_service**: recording a treatment closes its schedule
//! - **livestock_service**: animal health status
//! - **notification_service**: notification read state
//!
//! Each service is generic over the storage traits it needs.

pub mod livestock_service;
pub mod notification_service;
pub mod schedule_service;
pub mod treatment_service;

pub use livestock_service::LivestockService;
pub use notification_service::NotificationService;
pub use schedule_service::ScheduleService;
pub use treatment_service::TreatmentService;
