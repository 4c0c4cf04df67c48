use std::sync::Arc;

use shared::{Notification, NotificationAction};
use tracing::debug;

use crate::backend::error::ApiError;
use crate::backend::storage::NotificationStorage;

pub struct NotificationService<S> {
    store: Arc<S>,
}

impl<S> Clone for NotificationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: NotificationStorage> NotificationService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        Ok(self.store.list_notifications().await?)
    }

    /// Marks one notification read and returns it. Already-read is not an error.
    pub async fn mark_read(&self, notification_id: &str) -> Result<Notification, ApiError> {
        self.store
            .apply_notification_action(NotificationAction::MarkRead(notification_id.to_string()))
            .await?;

        self.store
            .list_notifications()
            .await?
            .into_iter()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| ApiError::NotificationNotFound(notification_id.to_string()))
    }

    /// Returns how many notifications changed
    pub async fn mark_all_read(&self) -> Result<usize, ApiError> {
        let updated = self
            .store
            .apply_notification_action(NotificationAction::MarkAllRead)
            .await?;
        debug!(updated, "marked all notifications read");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seeded_store;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_mark_read_and_mark_all() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let service = NotificationService::new(Arc::new(seeded_store(today).await));

        let marked = service.mark_read("ntf-1").await.unwrap();
        assert!(marked.read);

        assert!(matches!(
            service.mark_read("ntf-404").await,
            Err(ApiError::NotificationNotFound(_))
        ));

        assert_eq!(service.mark_all_read().await.unwrap(), 1);
        assert_eq!(service.mark_all_read().await.unwrap(), 0);
        assert!(service.list().await.unwrap().iter().all(|n| n.read));
    }
}
