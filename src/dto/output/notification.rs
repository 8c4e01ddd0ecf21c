use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub to_user: String,
    pub from_user: String,
    pub title: String,
    pub event: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    #[serde(rename = "ref")]
    pub reference: String,
    pub url: String,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        Self {
            id: value.id.to_hex(),
            to_user: value.to_user,
            from_user: value.from_user,
            title: value.title,
            event: value.event,
            event_date: value.event_date,
            reference: value.reference,
            url: value.url,
        }
    }
}
