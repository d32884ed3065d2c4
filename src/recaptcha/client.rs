use crate::{
    error::ServiceError,
    recaptcha::models::{Assessment, CreateAssessmentRequest, Event, ProjectName},
    APP_USER_AGENT,
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::future::Future;
use tracing::{debug, instrument};
use url::Url;

/// Google API key header; keeps the key out of URLs and their error messages.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Opens a client for one assessment call. The client is released when dropped.
pub trait Connector {
    type Client: AssessmentClient;

    /// # Errors
    /// Returns `ServiceError` if the client cannot be built.
    fn connect(&self, api_key: &SecretString) -> Result<Self::Client, ServiceError>;
}

pub trait AssessmentClient {
    /// Create an assessment for `event` under `project`.
    fn create_assessment(
        &self,
        project: &ProjectName,
        event: &Event,
    ) -> impl Future<Output = Result<Assessment, ServiceError>> + Send;
}

/// Connector for the reCAPTCHA Enterprise REST API.
#[derive(Debug, Clone)]
pub struct RecaptchaConnector {
    endpoint: Url,
}

impl RecaptchaConnector {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

impl Connector for RecaptchaConnector {
    type Client = RecaptchaClient;

    fn connect(&self, api_key: &SecretString) -> Result<RecaptchaClient, ServiceError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(ServiceError::Client)?;

        Ok(RecaptchaClient {
            http,
            endpoint: self.endpoint.clone(),
            api_key: api_key.clone(),
        })
    }
}

pub struct RecaptchaClient {
    http: Client,
    endpoint: Url,
    api_key: SecretString,
}

impl std::fmt::Debug for RecaptchaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecaptchaClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl RecaptchaClient {
    fn assessments_url(&self, project: &ProjectName) -> Result<Url, ServiceError> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/v1/{project}/assessments"))?)
    }
}

impl AssessmentClient for RecaptchaClient {
    #[instrument(skip(self, event), fields(site_key = %event.site_key))]
    async fn create_assessment(
        &self,
        project: &ProjectName,
        event: &Event,
    ) -> Result<Assessment, ServiceError> {
        let url = self.assessments_url(project)?;

        debug!("create assessment URL: {}", url);

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&CreateAssessmentRequest { event })
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => error_message(&body),
                Err(_) => None,
            };

            return Err(ServiceError::Status {
                status,
                message: message.unwrap_or_else(|| status.to_string()),
            });
        }

        response
            .json::<Assessment>()
            .await
            .map_err(|e| ServiceError::Decode(e.without_url()))
    }
}

// Google APIs wrap errors as {"error": {"code": 403, "message": "...", "status": "..."}}
fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
