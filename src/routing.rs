use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{require_all_roles, Role, User},
    dto::{input, output},
    error::Error,
    repository::NotificationsRepository,
    service::{
        notification_inbox::{NotificationInbox, NotificationInboxImpl},
        notifications_service::NotificationsService,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(
    application_middleware: &ApplicationMiddleware,
    enabled: bool,
) -> Router<ApplicationState> {
    // route_layer panics on a router without routes
    if !enabled {
        return Router::new();
    }

    Router::new()
        .route(
            "/api/v1/notifications",
            get(get_notifications)
                .post(post_notification)
                .delete(delete_notifications),
        )
        .route("/api/v1/notifications/:id", delete(delete_notification))
        .route_layer(application_middleware.auth.clone())
}

fn inbox(user: User, repository: Arc<dyn NotificationsRepository>) -> impl NotificationInbox {
    NotificationInboxImpl::new(Arc::new(user), repository)
}

async fn get_notifications(
    State(repository): State<Arc<dyn NotificationsRepository>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Notification>>, Error> {
    let notifications = inbox(user, repository).list_notifications().await?;

    Ok(Json(notifications))
}

async fn post_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Json(notification): Json<input::Notification>,
) -> Result<(StatusCode, Json<output::Notification>), Error> {
    require_all_roles(&user, &[Role::ProduceNotifications])?;

    let notification = service
        .save_notification(user.id.clone(), notification)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

async fn delete_notification(
    State(repository): State<Arc<dyn NotificationsRepository>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    // id that can't exist is treated like any other unknown id
    let Ok(id) = ObjectId::parse_str(&id) else {
        tracing::debug!(id, "malformed notification id");
        return Ok(StatusCode::NOT_FOUND);
    };

    let cleared = inbox(user, repository).clear_notification(id).await?;

    match cleared {
        true => Ok(StatusCode::NO_CONTENT),
        false => Ok(StatusCode::NOT_FOUND),
    }
}

async fn delete_notifications(
    State(repository): State<Arc<dyn NotificationsRepository>>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, Error> {
    inbox(user, repository).clear_all_notifications().await?;

    Ok(StatusCode::NO_CONTENT)
}
