use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Save new notification sent by from_user.
    ///
    /// ### Returns
    /// Saved notification with its id
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - from_user is empty
    ///     - to_user is empty
    /// - [Error::ValidationFieldTooLong] when any text field is too long
    ///
    async fn save_notification(
        &self,
        from_user: String,
        notification: input::Notification,
    ) -> Result<output::Notification, Error>;
}
