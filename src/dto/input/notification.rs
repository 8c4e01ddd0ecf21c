use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct Notification {
    pub to_user: String,
    pub title: String,
    pub event: String,
    /// When missing, time of creation is used
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub event_date: Option<OffsetDateTime>,
    #[serde(rename = "ref")]
    pub reference: String,
    pub url: String,
}
