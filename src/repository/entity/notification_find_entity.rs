use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,

    pub to_user: String,
    pub from_user: String,

    pub title: String,
    pub event: String,
    pub event_date: DateTime,
    #[serde(rename = "ref")]
    pub reference: String,
    pub url: String,
}
