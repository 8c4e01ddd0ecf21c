mod common;
use common::*;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_LENGTH, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bson::oid::ObjectId;
use serde_json::Value;
use tower::ServiceExt;

async fn produce_notification(application: &Router, to_user: &str, title: &str) -> String {
    let producer = create_producer_jwt("instructor");

    let response = application
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/notifications",
            Some(&producer),
            Some(notification_json(to_user, title)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response_body = response_json(response).await;
    response_body.get("id").unwrap().as_str().unwrap().to_string()
}

async fn list_notifications(application: &Router, user_id: &str) -> Vec<Value> {
    let jwt = create_consumer_jwt(user_id);

    let response = application
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/v1/notifications",
            Some(&jwt),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    match response_json(response).await {
        Value::Array(notifications) => notifications,
        other => panic!("expected array, got {other}"),
    }
}

async fn clear_notification(application: &Router, user_id: &str, id: &str) -> StatusCode {
    let jwt = create_consumer_jwt(user_id);

    application
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/api/v1/notifications/{id}"),
            Some(&jwt),
            None,
        ))
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn list_notifications_empty_inbox() {
    let application = create_test_application(true);

    let notifications = list_notifications(&application, "student").await;

    assert!(notifications.is_empty());
}

#[tokio::test]
async fn produce_notification_returns_saved_notification() {
    let application = create_test_application(true);
    let producer = create_producer_jwt("instructor");

    let response = application
        .oneshot(request(
            Method::POST,
            "/api/v1/notifications",
            Some(&producer),
            Some(notification_json("student", "Notification 1")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let notification = response_json(response).await;
    let id = notification.get("id").unwrap().as_str().unwrap();
    assert!(ObjectId::parse_str(id).is_ok());
    assert_eq!(notification["to_user"], "student");
    assert_eq!(notification["from_user"], "instructor");
    assert_eq!(notification["title"], "Notification 1");
    assert_eq!(notification["event"], "notification.event");
    assert_eq!(notification["event_date"], "1971-02-07T12:00:00Z");
    assert_eq!(notification["ref"], "/notification/one");
    assert_eq!(notification["url"], "/portal/site/bogus/tool/xyz");
}

#[tokio::test]
async fn list_notifications_only_recipient_sees_them_oldest_first() {
    let application = create_test_application(true);

    let first_id = produce_notification(&application, "student", "Notification 1").await;
    let second_id = produce_notification(&application, "student", "Notification 2").await;

    let ids = list_notifications(&application, "student")
        .await
        .iter()
        .map(|notification| notification["id"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![first_id, second_id]);

    assert!(list_notifications(&application, "instructor")
        .await
        .is_empty());
}

#[tokio::test]
async fn produce_notification_missing_role() {
    let application = create_test_application(true);
    let consumer = create_consumer_jwt("student");

    let response = application
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/notifications",
            Some(&consumer),
            Some(notification_json("instructor", "Notification 1")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert!(list_notifications(&application, "instructor")
        .await
        .is_empty());
}

#[tokio::test]
async fn produce_notification_empty_recipient() {
    let application = create_test_application(true);
    let producer = create_producer_jwt("instructor");

    let response = application
        .oneshot(request(
            Method::POST,
            "/api/v1/notifications",
            Some(&producer),
            Some(notification_json("", "Notification 1")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn produce_notification_field_too_long() {
    let application = create_test_application(true);
    let producer = create_producer_jwt("instructor");
    let title = "a".repeat(MAX_FIELD_LEN + 1);

    let response = application
        .oneshot(request(
            Method::POST,
            "/api/v1/notifications",
            Some(&producer),
            Some(notification_json("student", &title)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn produce_notification_content_too_large() {
    // content does not matter, it should be rejected because of its size
    let application = create_test_application(true);
    let producer = create_producer_jwt("instructor");
    let content = "0".repeat(MAX_HTTP_CONTENT_LEN + 1);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/notifications")
        .header(AUTHORIZATION, format!("Bearer {producer}"))
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, content.len())
        .body(Body::from(content))
        .unwrap();

    let response = application.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn clear_notification_by_owner() {
    let application = create_test_application(true);
    let id = produce_notification(&application, "student", "Notification 1").await;

    let status = clear_notification(&application, "student", &id).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(list_notifications(&application, "student").await.is_empty());

    // already cleared
    let status = clear_notification(&application, "student", &id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_notification_by_other_user() {
    let application = create_test_application(true);
    let id = produce_notification(&application, "student", "Notification 1").await;

    let status = clear_notification(&application, "instructor", &id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(list_notifications(&application, "student").await.len(), 1);
}

#[tokio::test]
async fn clear_notification_unknown_id() {
    let application = create_test_application(true);

    let status = clear_notification(&application, "student", &ObjectId::new().to_hex()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_notification_malformed_id() {
    let application = create_test_application(true);

    let status = clear_notification(&application, "student", "not-an-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_all_notifications_leaves_other_users() {
    let application = create_test_application(true);
    produce_notification(&application, "student", "Notification 1").await;
    produce_notification(&application, "student", "Notification 2").await;
    produce_notification(&application, "instructor", "Notification 3").await;

    let jwt = create_consumer_jwt("student");
    for _ in 0..2 {
        let response = application
            .clone()
            .oneshot(request(
                Method::DELETE,
                "/api/v1/notifications",
                Some(&jwt),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(list_notifications(&application, "student").await.is_empty());
    }

    assert_eq!(list_notifications(&application, "instructor").await.len(), 1);
}

#[tokio::test]
async fn disabled_inbox_not_served() {
    let application = create_test_application(false);
    let jwt = create_consumer_jwt("student");

    let response = application
        .oneshot(request(
            Method::GET,
            "/api/v1/notifications",
            Some(&jwt),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
