//! # Storage Traits
//!
//! Abstractions the domain services are written against. The mock API only
//! ships an in-memory implementation, but services never name it directly.

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    AnimalSummary, HealthStatus, Notification, NotificationAction, ScheduleRecord, ScheduleStatus,
    TreatmentRecord,
};

#[async_trait]
pub trait ScheduleStorage: Send + Sync {
    /// All schedules in insertion order
    async fn list_schedules(&self) -> Result<Vec<ScheduleRecord>>;

    async fn get_schedule(&self, schedule_id: &str) -> Result<Option<ScheduleRecord>>;

    /// Returns false when no schedule has this id
    async fn update_schedule_status(&self, schedule_id: &str, status: ScheduleStatus) -> Result<bool>;
}

#[async_trait]
pub trait AnimalStorage: Send + Sync {
    async fn get_animal(&self, animal_id: &str) -> Result<Option<AnimalSummary>>;

    /// Returns the updated animal, or `None` when it does not exist
    async fn update_health_status(
        &self,
        animal_id: &str,
        health_status: HealthStatus,
    ) -> Result<Option<AnimalSummary>>;
}

#[async_trait]
pub trait TreatmentStorage: Send + Sync {
    async fn store_treatment(&self, treatment: &TreatmentRecord) -> Result<()>;

    async fn list_treatments_for_schedule(&self, schedule_id: &str) -> Result<Vec<TreatmentRecord>>;
}

#[async_trait]
pub trait NotificationStorage: Send + Sync {
    async fn list_notifications(&self) -> Result<Vec<Notification>>;

    /// Apply a read-state action atomically; returns how many notifications
    /// went from unread to read (or were removed while unread)
    async fn apply_notification_action(&self, action: NotificationAction) -> Result<usize>;
}
