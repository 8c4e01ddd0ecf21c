use crate::{dto::output, error::Error};
use axum::async_trait;
use bson::oid::ObjectId;

///
/// Pending notifications of the user that is currently acting.
///
/// Only the recipient of a notification is able to clear it.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationInbox: Send + Sync {
    ///
    /// Find all notifications addressed to the current user.
    ///
    /// ### Returns
    /// Vec of notifications, oldest first.
    /// Empty when nobody is logged in.
    ///
    async fn list_notifications(&self) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Delete notification addressed to the current user.
    ///
    /// ### Returns
    /// true when notification was deleted. false when
    ///     - notification with id does not exist
    ///     - notification is addressed to another user
    ///     - nobody is logged in
    ///
    async fn clear_notification(&self, id: ObjectId) -> Result<bool, Error>;

    ///
    /// Delete all notifications addressed to the current user.
    /// Does nothing when nobody is logged in.
    ///
    async fn clear_all_notifications(&self) -> Result<(), Error>;
}
