use super::Notification;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub to_user: String,
    pub from_user: String,
    pub title: String,
    pub event: String,
    pub event_date: OffsetDateTime,
    pub reference: String,
    pub url: String,
}

impl NewNotification {
    pub fn into_notification(self, id: ObjectId) -> Notification {
        Notification {
            id,
            to_user: self.to_user,
            from_user: self.from_user,
            title: self.title,
            event: self.event,
            event_date: self.event_date,
            reference: self.reference,
            url: self.url,
        }
    }
}
