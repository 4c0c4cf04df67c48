use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::{
    AnimalSummary, HealthStatus, Notification, NotificationAction, NotificationState,
    ScheduleRecord, ScheduleStatus, TreatmentRecord,
};

use super::traits::{AnimalStorage, NotificationStorage, ScheduleStorage, TreatmentStorage};

#[derive(Debug, Default)]
struct StoreData {
    schedules: Vec<ScheduleRecord>,
    animals: HashMap<String, AnimalSummary>,
    treatments: Vec<TreatmentRecord>,
    notifications: NotificationState,
}

/// Process-local store shared by every handler. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_animal(&self, animal: AnimalSummary) {
        let mut data = self.inner.write().await;
        data.animals.insert(animal.id.clone(), animal);
    }

    pub async fn insert_schedule(&self, schedule: ScheduleRecord) {
        self.inner.write().await.schedules.push(schedule);
    }

    pub async fn replace_notifications(&self, notifications: Vec<Notification>) {
        let mut data = self.inner.write().await;
        data.notifications.reduce(NotificationAction::Loaded(notifications));
    }
}

#[async_trait]
impl ScheduleStorage for InMemoryStore {
    async fn list_schedules(&self) -> Result<Vec<ScheduleRecord>> {
        Ok(self.inner.read().await.schedules.clone())
    }

    async fn get_schedule(&self, schedule_id: &str) -> Result<Option<ScheduleRecord>> {
        let data = self.inner.read().await;
        Ok(data.schedules.iter().find(|s| s.id == schedule_id).cloned())
    }

    async fn update_schedule_status(&self, schedule_id: &str, status: ScheduleStatus) -> Result<bool> {
        let mut data = self.inner.write().await;
        match data.schedules.iter_mut().find(|s| s.id == schedule_id) {
            Some(schedule) => {
                schedule.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl AnimalStorage for InMemoryStore {
    async fn get_animal(&self, animal_id: &str) -> Result<Option<AnimalSummary>> {
        Ok(self.inner.read().await.animals.get(animal_id).cloned())
    }

    async fn update_health_status(
        &self,
        animal_id: &str,
        health_status: HealthStatus,
    ) -> Result<Option<AnimalSummary>> {
        let mut data = self.inner.write().await;
        Ok(data.animals.get_mut(animal_id).map(|animal| {
            animal.health_status = Some(health_status);
            animal.clone()
        }))
    }
}

#[async_trait]
impl TreatmentStorage for InMemoryStore {
    async fn store_treatment(&self, treatment: &TreatmentRecord) -> Result<()> {
        self.inner.write().await.treatments.push(treatment.clone());
        Ok(())
    }

    async fn list_treatments_for_schedule(&self, schedule_id: &str) -> Result<Vec<TreatmentRecord>> {
        let data = self.inner.read().await;
        Ok(data
            .treatments
            .iter()
            .filter(|t| t.schedule_id == schedule_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl NotificationStorage for InMemoryStore {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.inner.read().await.notifications.items().to_vec())
    }

    async fn apply_notification_action(&self, action: NotificationAction) -> Result<usize> {
        let mut data = self.inner.write().await;
        let unread_before = data.notifications.unread_count();
        data.notifications.reduce(action);
        Ok(unread_before.saturating_sub(data.notifications.unread_count()))
    }
}
