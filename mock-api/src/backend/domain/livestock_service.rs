use std::sync::Arc;

use shared::{AnimalSummary, HealthStatus};
use tracing::info;

use crate::backend::error::ApiError;
use crate::backend::storage::AnimalStorage;

pub struct LivestockService<S> {
    store: Arc<S>,
}

impl<S> Clone for LivestockService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AnimalStorage> LivestockService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn update_health_status(
        &self,
        animal_id: &str,
        health_status: HealthStatus,
    ) -> Result<AnimalSummary, ApiError> {
        if health_status == HealthStatus::Unknown {
            return Err(ApiError::Validation("healthStatus is not recognised".to_string()));
        }

        let animal = self
            .store
            .update_health_status(animal_id, health_status)
            .await?
            .ok_or_else(|| ApiError::AnimalNotFound(animal_id.to_string()))?;

        info!(%animal_id, health_status = health_status.as_str(), "updated health status");
        Ok(animal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seeded_store;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_update_health_status() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let store = Arc::new(seeded_store(today).await);
        let service = LivestockService::new(store.clone());

        let animal = service
            .update_health_status("cow-102", HealthStatus::Recovering)
            .await
            .unwrap();
        assert_eq!(animal.health_status, Some(HealthStatus::Recovering));
        assert_eq!(
            store.get_animal("cow-102").await.unwrap().unwrap().health_status,
            Some(HealthStatus::Recovering)
        );

        assert!(matches!(
            service.update_health_status("ghost", HealthStatus::Sick).await,
            Err(ApiError::AnimalNotFound(_))
        ));
        assert!(matches!(
            service.update_health_status("cow-102", HealthStatus::Unknown).await,
            Err(ApiError::Validation(_))
        ));
    }
}
