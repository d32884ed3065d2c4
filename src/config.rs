//! Node configuration, validated once when the node is built.

use crate::error::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://recaptchaenterprise.googleapis.com";
pub const DEFAULT_SCORE_THRESHOLD: &str = "0.0";

/// Configuration of the assessment node.
#[derive(Clone)]
pub struct AssessmentConfig {
    project_id: String,
    api_key: SecretString,
    endpoint: Url,
}

impl AssessmentConfig {
    /// Build the config against the public reCAPTCHA Enterprise endpoint.
    ///
    /// # Errors
    /// Returns `ConfigError` if the project id or the API key is empty.
    pub fn new(project_id: &str, api_key: SecretString) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(DEFAULT_ENDPOINT)
            .map_err(|e| ConfigError::InvalidEndpoint(DEFAULT_ENDPOINT.to_string(), e.to_string()))?;
        Self::with_endpoint(project_id, api_key, endpoint)
    }

    /// Build the config against a custom endpoint.
    ///
    /// # Errors
    /// Returns `ConfigError` if the project id or the API key is empty, or if
    /// the endpoint is not an http(s) URL.
    pub fn with_endpoint(
        project_id: &str,
        api_key: SecretString,
        endpoint: Url,
    ) -> Result<Self, ConfigError> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(ConfigError::EmptyProjectId);
        }

        if api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        match endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::InvalidEndpoint(
                    endpoint.to_string(),
                    format!("unsupported scheme {scheme}"),
                ))
            }
        }

        if endpoint.host().is_none() {
            return Err(ConfigError::InvalidEndpoint(
                endpoint.to_string(),
                "no host specified".to_string(),
            ));
        }

        Ok(Self {
            project_id: project_id.to_string(),
            api_key,
            endpoint,
        })
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for AssessmentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

/// Configuration of the score node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreConfig {
    score_threshold: f64,
}

impl ScoreConfig {
    /// Parse the threshold as the host stores it, a string encoded float.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidThreshold` if the value is not a finite number.
    pub fn parse(score_threshold: &str) -> Result<Self, ConfigError> {
        let value = score_threshold.trim();
        match value.parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => Ok(Self {
                score_threshold: threshold,
            }),
            _ => Err(ConfigError::InvalidThreshold(score_threshold.to_string())),
        }
    }

    #[must_use]
    pub const fn score_threshold(&self) -> f64 {
        self.score_threshold
    }
}

impl Default for ScoreConfig {
    // "0.0": every score passes unless a threshold is configured.
    fn default() -> Self {
        Self {
            score_threshold: 0.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn assessment_config_defaults_to_google_endpoint() {
        let config = AssessmentConfig::new("my-project", SecretString::from("key")).unwrap();
        assert_eq!(config.project_id(), "my-project");
        assert_eq!(config.api_key().expose_secret(), "key");
        assert_eq!(
            config.endpoint().as_str(),
            "https://recaptchaenterprise.googleapis.com/"
        );
    }

    #[test]
    fn assessment_config_trims_project_id() {
        let config = AssessmentConfig::new("  my-project ", SecretString::from("key")).unwrap();
        assert_eq!(config.project_id(), "my-project");
    }

    #[test]
    fn assessment_config_rejects_empty_values() {
        assert_eq!(
            AssessmentConfig::new("", SecretString::from("key")).unwrap_err(),
            ConfigError::EmptyProjectId
        );
        assert_eq!(
            AssessmentConfig::new("   ", SecretString::from("key")).unwrap_err(),
            ConfigError::EmptyProjectId
        );
        assert_eq!(
            AssessmentConfig::new("p", SecretString::from("")).unwrap_err(),
            ConfigError::EmptyApiKey
        );
    }

    #[test]
    fn assessment_config_rejects_unsupported_scheme() {
        let endpoint = Url::parse("ftp://example.com").unwrap();
        let err =
            AssessmentConfig::with_endpoint("p", SecretString::from("key"), endpoint).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_, _)));
    }

    #[test]
    fn assessment_config_debug_hides_api_key() {
        let config = AssessmentConfig::new("p", SecretString::from("super-secret")).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn score_config_default_is_zero() {
        assert!((ScoreConfig::default().score_threshold() - 0.0).abs() < f64::EPSILON);
        assert_eq!(
            ScoreConfig::parse(DEFAULT_SCORE_THRESHOLD).unwrap(),
            ScoreConfig::default()
        );
    }

    #[test]
    fn score_config_parses_floats() {
        assert!((ScoreConfig::parse("0.5").unwrap().score_threshold() - 0.5).abs() < f64::EPSILON);
        assert!((ScoreConfig::parse(" 0.7 ").unwrap().score_threshold() - 0.7).abs() < f64::EPSILON);
        assert!((ScoreConfig::parse("1").unwrap().score_threshold() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_config_rejects_non_numeric() {
        for value in ["", "abc", "NaN", "inf", "0.5.1"] {
            assert_eq!(
                ScoreConfig::parse(value).unwrap_err(),
                ConfigError::InvalidThreshold(value.to_string()),
                "value: {value:?}"
            );
        }
    }
}
