//! Shared state threaded by the host through every node of a flow.
//!
//! Keys are typed fields; everything the crate does not own lands in
//! [`SharedState::other`] and is carried through untouched.

use crate::error::NodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const RECAPTCHA_TOKEN: &str = "recaptchaToken";
pub const RECAPTCHA_SITE_KEY: &str = "recaptchaSiteKey";
pub const RECAPTCHA_SCORE: &str = "recaptchaScore";
pub const RECAPTCHA_REASON_CODE_LIST: &str = "recaptchaReasonCodes";
pub const RECAPTCHA_ASSESSMENT_NAME: &str = "recaptchaAssessmentName";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedState {
    #[serde(rename = "recaptchaToken", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "recaptchaSiteKey", default, skip_serializing_if = "Option::is_none")]
    pub site_key: Option<String>,
    #[serde(rename = "recaptchaScore", default, skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(
        rename = "recaptchaReasonCodes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    reason_codes: Option<Vec<String>>,
    #[serde(
        rename = "recaptchaAssessmentName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    assessment_name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// What a successful assessment leaves behind in the shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentRecord {
    pub score: f64,
    pub reason_codes: Vec<String>,
    pub assessment_name: String,
}

impl SharedState {
    /// State carrying the client event, as the login page submits it.
    #[must_use]
    pub fn with_event(token: impl Into<String>, site_key: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            site_key: Some(site_key.into()),
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `NodeError::MissingState` if the token is absent.
    pub fn require_token(&self) -> Result<&str, NodeError> {
        self.token
            .as_deref()
            .ok_or(NodeError::MissingState(RECAPTCHA_TOKEN))
    }

    /// # Errors
    /// Returns `NodeError::MissingState` if the site key is absent.
    pub fn require_site_key(&self) -> Result<&str, NodeError> {
        self.site_key
            .as_deref()
            .ok_or(NodeError::MissingState(RECAPTCHA_SITE_KEY))
    }

    /// # Errors
    /// Returns `NodeError::MissingState` if no assessment stored a score yet.
    pub fn require_score(&self) -> Result<f64, NodeError> {
        self.score.ok_or(NodeError::MissingState(RECAPTCHA_SCORE))
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    #[must_use]
    pub fn reason_codes(&self) -> Option<&[String]> {
        self.reason_codes.as_deref()
    }

    #[must_use]
    pub fn assessment_name(&self) -> Option<&str> {
        self.assessment_name.as_deref()
    }

    /// Store score, reasons and assessment name together. This is the only
    /// writer of the three assessment keys.
    pub fn record_assessment(&mut self, record: AssessmentRecord) {
        self.score = Some(record.score);
        self.reason_codes = Some(record.reason_codes);
        self.assessment_name = Some(record.assessment_name);
    }
}
