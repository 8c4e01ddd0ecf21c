use crate::auth::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::net::SocketAddr;
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    /// Default console level, RUST_LOG directives take precedence
    pub log_level: LevelFilter,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    /// When disabled inbox API is not served at all
    pub enabled: bool,

    pub max_field_len: usize,
    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("BULLHORN_INBOX_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("BULLHORN_INBOX_LOG_FILENAME")?;
        let log_level = parse_log_level(Self::optional_env_var("BULLHORN_INBOX_LOG_LEVEL"))?;
        let bind_address = Self::env_var("BULLHORN_INBOX_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("BULLHORN_INBOX_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("BULLHORN_INBOX_DB_NAME")?;
        let enabled = match Self::optional_env_var("BULLHORN_INBOX_ENABLED") {
            Some(enabled) => enabled.parse()?,
            None => true,
        };
        let max_field_len = Self::env_var("BULLHORN_INBOX_MAX_FIELD_LEN")?.parse()?;
        let max_http_content_len = Self::env_var("BULLHORN_INBOX_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms = parse_jwt_algorithms(&Self::env_var("BULLHORN_INBOX_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "BULLHORN_INBOX_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &Self::env_var("BULLHORN_INBOX_JWT_KEY")?)?;

        Ok(Self {
            log_directory,
            log_filename,
            log_level,
            bind_address,
            db_connection_string,
            db_name,
            enabled,
            max_field_len,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok()
    }
}

fn parse_log_level(log_level: Option<String>) -> anyhow::Result<LevelFilter> {
    match log_level {
        Some(log_level) => log_level
            .trim()
            .parse()
            .map_err(|err| anyhow!("invalid BULLHORN_INBOX_LOG_LEVEL: {err}")),
        None => Ok(LevelFilter::DEBUG),
    }
}
