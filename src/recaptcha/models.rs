use serde::{Deserialize, Serialize};
use std::fmt;

/// `projects/{project}`, the parent resource of an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    #[must_use]
    pub fn of(project_id: &str) -> Self {
        Self(format!("projects/{project_id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User interaction being assessed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub token: String,
    pub site_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ip_address: Option<String>,
}

impl Event {
    #[must_use]
    pub fn new(token: impl Into<String>, site_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            site_key: site_key.into(),
            ..Self::default()
        }
    }
}

/// Body of `projects.assessments.create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAssessmentRequest<'a> {
    pub event: &'a Event,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub token_properties: TokenProperties,
    #[serde(default)]
    pub risk_analysis: RiskAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProperties {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub invalid_reason: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<ClassificationReason>,
}

/// Reason codes reported by the risk analysis. Codes this crate does not
/// know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassificationReason {
    Unspecified,
    Automation,
    UnexpectedEnvironment,
    TooMuchTraffic,
    UnexpectedUsagePatterns,
    LowConfidenceScore,
    SuspectedCarding,
    SuspectedChargeback,
    Other(String),
}

impl ClassificationReason {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Unspecified => "CLASSIFICATION_REASON_UNSPECIFIED",
            Self::Automation => "AUTOMATION",
            Self::UnexpectedEnvironment => "UNEXPECTED_ENVIRONMENT",
            Self::TooMuchTraffic => "TOO_MUCH_TRAFFIC",
            Self::UnexpectedUsagePatterns => "UNEXPECTED_USAGE_PATTERNS",
            Self::LowConfidenceScore => "LOW_CONFIDENCE_SCORE",
            Self::SuspectedCarding => "SUSPECTED_CARDING",
            Self::SuspectedChargeback => "SUSPECTED_CHARGEBACK",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ClassificationReason {
    fn from(name: String) -> Self {
        match name.as_str() {
            "CLASSIFICATION_REASON_UNSPECIFIED" => Self::Unspecified,
            "AUTOMATION" => Self::Automation,
            "UNEXPECTED_ENVIRONMENT" => Self::UnexpectedEnvironment,
            "TOO_MUCH_TRAFFIC" => Self::TooMuchTraffic,
            "UNEXPECTED_USAGE_PATTERNS" => Self::UnexpectedUsagePatterns,
            "LOW_CONFIDENCE_SCORE" => Self::LowConfidenceScore,
            "SUSPECTED_CARDING" => Self::SuspectedCarding,
            "SUSPECTED_CHARGEBACK" => Self::SuspectedChargeback,
            _ => Self::Other(name),
        }
    }
}

impl From<ClassificationReason> for String {
    fn from(reason: ClassificationReason) -> Self {
        match reason {
            ClassificationReason::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
