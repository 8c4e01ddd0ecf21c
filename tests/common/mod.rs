#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use bullhorn_inbox::{
    application::{create_application, ApplicationMiddleware, ApplicationState},
    repository::{InMemoryNotificationsRepository, NewNotification},
    service::notifications_service::NotificationsServiceConfig,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use serde_json::{json, Value};
use std::sync::Arc;
use time::OffsetDateTime;

pub const JWT_SECRET: &[u8] = b"bullhorn inbox test secret";
pub const MAX_FIELD_LEN: usize = 64;
pub const MAX_HTTP_CONTENT_LEN: usize = 1024;

const FAR_FUTURE: i64 = 253402210800;

pub fn create_test_application(enabled: bool) -> Router {
    let repository = Arc::new(InMemoryNotificationsRepository::new());
    let state = ApplicationState::new(
        repository,
        NotificationsServiceConfig {
            max_field_len: MAX_FIELD_LEN,
        },
    );
    let middleware = ApplicationMiddleware::new(
        DecodingKey::from_secret(JWT_SECRET),
        vec![Algorithm::HS256],
        MAX_HTTP_CONTENT_LEN,
    );

    create_application(state, middleware, enabled)
}

pub fn create_producer_jwt(user_id: &str) -> String {
    encode_jwt(user_id, &["bullhorn_produce_notifications"])
}

pub fn create_consumer_jwt(user_id: &str) -> String {
    encode_jwt(user_id, &[])
}

fn encode_jwt(user_id: &str, roles: &[&str]) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({
            "sub": user_id,
            "exp": FAR_FUTURE,
            "realm_access": { "roles": roles },
        }),
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .unwrap()
}

pub fn request(method: Method, uri: &str, jwt: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(jwt) = jwt {
        builder = builder.header(AUTHORIZATION, format!("Bearer {jwt}"));
    }

    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn response_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&body).unwrap()
}

pub fn notification_json(to_user: &str, title: &str) -> Value {
    json!({
        "to_user": to_user,
        "title": title,
        "event": "notification.event",
        "event_date": "1971-02-07T12:00:00Z",
        "ref": "/notification/one",
        "url": "/portal/site/bogus/tool/xyz",
    })
}

pub fn new_notification(to_user: &str, from_user: &str, title: &str) -> NewNotification {
    NewNotification {
        to_user: to_user.to_string(),
        from_user: from_user.to_string(),
        title: title.to_string(),
        event: "notification.event".to_string(),
        event_date: OffsetDateTime::now_utc(),
        reference: "/notification/one".to_string(),
        url: "/portal/site/bogus/tool/xyz".to_string(),
    }
}
