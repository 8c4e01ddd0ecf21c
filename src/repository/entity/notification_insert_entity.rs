use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub to_user: &'a str,
    pub from_user: &'a str,

    pub title: &'a str,
    pub event: &'a str,
    pub event_date: DateTime,
    #[serde(rename = "ref")]
    pub reference: &'a str,
    pub url: &'a str,
}
