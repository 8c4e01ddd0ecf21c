use crate::repository::entity::NotificationFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

///
/// Notification that has already been persisted
/// and therefore has an id assigned by the store.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ObjectId,
    pub to_user: String,
    pub from_user: String,
    pub title: String,
    pub event: String,
    pub event_date: OffsetDateTime,
    pub reference: String,
    pub url: String,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            to_user: value.to_user,
            from_user: value.from_user,
            title: value.title,
            event: value.event,
            event_date: value.event_date.into(),
            reference: value.reference,
            url: value.url,
        }
    }
}
