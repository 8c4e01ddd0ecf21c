use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
    enabled: bool,
) -> Router {
    if !enabled {
        tracing::warn!("inbox disabled, no routes served");
    }

    routing(&application_middleware, enabled)
        .with_state(application_state)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.trace)
}
