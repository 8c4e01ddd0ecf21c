use super::{Error, NewNotification, Notification};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Persists new notification.
    ///
    /// ### Returns
    /// Persisted notification with assigned id
    ///
    async fn save(&self, notification: NewNotification) -> Result<Notification, Error>;

    ///
    /// Finds all notifications addressed to the user.
    ///
    /// ### Returns
    /// Vec of notifications, oldest first
    ///
    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>, Error>;

    ///
    /// Deletes notification only if it is addressed to the user.
    /// Ownership check and removal are a single operation.
    ///
    /// ### Returns
    /// true when notification was deleted. false when
    ///     - notification with id does not exist
    ///     - notification is addressed to another user
    ///
    async fn delete_if_owned_by(&self, id: ObjectId, user_id: &str) -> Result<bool, Error>;

    ///
    /// Deletes all notifications addressed to the user.
    ///
    /// ### Returns
    /// Number of deleted notifications
    ///
    async fn delete_all_by_recipient(&self, user_id: &str) -> Result<u64, Error>;
}
