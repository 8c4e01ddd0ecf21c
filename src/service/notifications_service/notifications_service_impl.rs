use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{NewNotification, NotificationsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        Self { config, repository }
    }

    fn validate_save_notification(
        &self,
        from_user: &str,
        notification: &input::Notification,
    ) -> Result<(), Error> {
        if from_user.trim().is_empty() {
            return Err(Error::Validation("from_user cannot be empty"));
        }
        if notification.to_user.trim().is_empty() {
            return Err(Error::Validation("to_user cannot be empty"));
        }

        self.validate_field_not_too_long("title", &notification.title)?;
        self.validate_field_not_too_long("event", &notification.event)?;
        self.validate_field_not_too_long("ref", &notification.reference)?;
        self.validate_field_not_too_long("url", &notification.url)?;

        Ok(())
    }

    fn validate_field_not_too_long(&self, field: &'static str, value: &str) -> Result<(), Error> {
        if value.len() > self.config.max_field_len {
            return Err(Error::ValidationFieldTooLong {
                field,
                len: value.len(),
                max_len: self.config.max_field_len,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn save_notification(
        &self,
        from_user: String,
        notification: input::Notification,
    ) -> Result<output::Notification, Error> {
        tracing::info!(
            from_user,
            to_user = notification.to_user.as_str(),
            "creating notification"
        );
        tracing::trace!(?notification);

        self.validate_save_notification(&from_user, &notification)?;

        let input::Notification {
            to_user,
            title,
            event,
            event_date,
            reference,
            url,
        } = notification;

        let notification = self
            .repository
            .save(NewNotification {
                to_user,
                from_user,
                title,
                event,
                event_date: event_date.unwrap_or_else(OffsetDateTime::now_utc),
                reference,
                url,
            })
            .await?;

        let id = notification.id.to_hex();
        tracing::info!(id, "created notification");

        Ok(notification.into())
    }
}
