use reqwest::StatusCode;
use thiserror::Error;

/// Invalid node configuration, detected when the config is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("project id must not be empty")]
    EmptyProjectId,
    #[error("api key must not be empty")]
    EmptyApiKey,
    #[error("invalid score threshold {0:?}: expected a floating point number")]
    InvalidThreshold(String),
    #[error("invalid endpoint {0:?}: {1}")]
    InvalidEndpoint(String, String),
}

/// Failure talking to the reCAPTCHA Enterprise service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to reCAPTCHA Enterprise failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("reCAPTCHA Enterprise returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("invalid reCAPTCHA Enterprise response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Processing failure surfaced to the host, which halts the flow.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("missing required shared state value: {0}")]
    MissingState(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
