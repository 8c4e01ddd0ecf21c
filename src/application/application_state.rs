use super::ApplicationEnv;
use crate::{
    repository::{NotificationsRepository, NotificationsRepositoryImpl},
    service::notifications_service::{
        NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

///
/// Inbox itself is created per request because it acts as the user
/// authenticated in that request, so state keeps only its repository.
///
#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_repository: Arc<dyn NotificationsRepository>,
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

impl ApplicationState {
    pub fn new(
        notifications_repository: Arc<dyn NotificationsRepository>,
        notifications_service_config: NotificationsServiceConfig,
    ) -> Self {
        let notifications_service = NotificationsServiceImpl::new(
            notifications_service_config,
            notifications_repository.clone(),
        );

        Self {
            notifications_repository,
            notifications_service: Arc::new(notifications_service),
        }
    }
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db).await?;
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let config = NotificationsServiceConfig {
        max_field_len: env.max_field_len,
    };
    let state = ApplicationState::new(notifications_repository, config);

    Ok((state, ApplicationStateToClose { db_client }))
}
