//! Read side of treatment schedules.

use std::sync::Arc;

use shared::{AnimalRef, ScheduleRecord};
use tracing::{debug, warn};

use crate::backend::error::ApiError;
use crate::backend::storage::{AnimalStorage, ScheduleStorage};

pub struct ScheduleService<S> {
    store: Arc<S>,
}

impl<S> Clone for ScheduleService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ScheduleStorage + AnimalStorage> ScheduleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Schedules assigned to the current user, animal left as a bare id
    pub async fn list_assigned(&self) -> Result<Vec<ScheduleRecord>, ApiError> {
        let schedules = self.store.list_schedules().await?;
        debug!(count = schedules.len(), "listed assigned schedules");
        Ok(schedules)
    }

    /// One schedule with its animal populated
    pub async fn get_with_animal(&self, schedule_id: &str) -> Result<ScheduleRecord, ApiError> {
        let mut schedule = self
            .store
            .get_schedule(schedule_id)
            .await?
            .ok_or_else(|| ApiError::ScheduleNotFound(schedule_id.to_string()))?;

        let animal_id = schedule.animal_id.id().to_string();
        match self.store.get_animal(&animal_id).await? {
            Some(animal) => schedule.animal_id = AnimalRef::Populated(animal),
            None => warn!(%schedule_id, %animal_id, "schedule references an unknown animal"),
        }
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seeded_store;
    use chrono::NaiveDate;

    async fn service() -> ScheduleService<crate::backend::storage::InMemoryStore> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        ScheduleService::new(Arc::new(seeded_store(today).await))
    }

    #[tokio::test]
    async fn test_list_keeps_bare_animal_ids() {
        let schedules = service().await.list_assigned().await.unwrap();
        assert!(!schedules.is_empty());
        assert!(schedules.iter().all(|s| s.animal_id.summary().is_none()));
    }

    #[tokio::test]
    async fn test_detail_populates_animal() {
        let schedule = service().await.get_with_animal("sch-002").await.unwrap();
        let animal = schedule.animal_id.summary().expect("animal populated");
        assert_eq!(animal.name.as_deref(), Some("Bessie"));
    }

    #[tokio::test]
    async fn test_detail_of_unknown_schedule() {
        let err = service().await.get_with_animal("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::ScheduleNotFound(id) if id == "missing"));
    }
}
