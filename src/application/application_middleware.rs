use super::ApplicationEnv;
use crate::auth::JwtAuthorizationValidator;
use jsonwebtoken::{Algorithm, DecodingKey};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
    validate_request::ValidateRequestHeaderLayer,
};

pub struct ApplicationMiddleware {
    pub auth: ValidateRequestHeaderLayer<JwtAuthorizationValidator>,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

impl ApplicationMiddleware {
    pub fn new(
        jwt_key: DecodingKey,
        jwt_algorithms: Vec<Algorithm>,
        max_http_content_len: usize,
    ) -> Self {
        let auth =
            ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(jwt_key, jwt_algorithms));

        let body_limit = RequestBodyLimitLayer::new(max_http_content_len);

        let trace = TraceLayer::new_for_http();

        Self {
            auth,
            body_limit,
            trace,
        }
    }
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    ApplicationMiddleware::new(
        env.jwt_key.clone(),
        env.jwt_algorithms.clone(),
        env.max_http_content_len,
    )
}
