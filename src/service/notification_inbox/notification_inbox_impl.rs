use super::NotificationInbox;
use crate::{
    dto::output, error::Error, identity::IdentityContext, repository::NotificationsRepository,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct NotificationInboxImpl {
    identity: Arc<dyn IdentityContext>,
    repository: Arc<dyn NotificationsRepository>,
}

impl NotificationInboxImpl {
    pub fn new(
        identity: Arc<dyn IdentityContext>,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        Self {
            identity,
            repository,
        }
    }
}

#[async_trait]
impl NotificationInbox for NotificationInboxImpl {
    async fn list_notifications(&self) -> Result<Vec<output::Notification>, Error> {
        let Some(user_id) = self.identity.current_user_id() else {
            tracing::debug!("nobody logged in, inbox is empty");
            return Ok(Vec::new());
        };

        tracing::info!(user_id, "finding notifications");

        let notifications = self.repository.find_by_recipient(&user_id).await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(notifications)
    }

    async fn clear_notification(&self, id: ObjectId) -> Result<bool, Error> {
        let Some(user_id) = self.identity.current_user_id() else {
            tracing::debug!(%id, "nobody logged in, nothing to clear");
            return Ok(false);
        };

        tracing::info!(%id, user_id, "clearing notification");

        let cleared = self.repository.delete_if_owned_by(id, &user_id).await?;

        match cleared {
            true => tracing::info!("cleared notification"),
            false => tracing::info!("notification not cleared"),
        }

        Ok(cleared)
    }

    async fn clear_all_notifications(&self) -> Result<(), Error> {
        let Some(user_id) = self.identity.current_user_id() else {
            tracing::debug!("nobody logged in, nothing to clear");
            return Ok(());
        };

        tracing::info!(user_id, "clearing all notifications");

        let count = self.repository.delete_all_by_recipient(&user_id).await?;
        tracing::info!(count, "cleared notifications");

        Ok(())
    }
}
