use super::{Error, NewNotification, Notification, NotificationsRepository};
use axum::async_trait;
use bson::oid::ObjectId;
use tokio::sync::Mutex;

///
/// Repository that keeps notifications in process memory.
///
/// Notifications are kept in a single Vec in insertion order,
/// every operation holds the lock for its whole duration.
///
#[derive(Default)]
pub struct InMemoryNotificationsRepository {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationsRepository for InMemoryNotificationsRepository {
    async fn save(&self, notification: NewNotification) -> Result<Notification, Error> {
        let notification = notification.into_notification(ObjectId::new());

        self.notifications.lock().await.push(notification.clone());

        Ok(notification)
    }

    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>, Error> {
        let notifications = self
            .notifications
            .lock()
            .await
            .iter()
            .filter(|notification| notification.to_user == user_id)
            .cloned()
            .collect();

        Ok(notifications)
    }

    async fn delete_if_owned_by(&self, id: ObjectId, user_id: &str) -> Result<bool, Error> {
        let mut notifications = self.notifications.lock().await;

        let position = notifications
            .iter()
            .position(|notification| notification.id == id && notification.to_user == user_id);

        match position {
            Some(position) => {
                notifications.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all_by_recipient(&self, user_id: &str) -> Result<u64, Error> {
        let mut notifications = self.notifications.lock().await;

        let count_before = notifications.len();
        notifications.retain(|notification| notification.to_user != user_id);

        Ok((count_before - notifications.len()) as u64)
    }
}
