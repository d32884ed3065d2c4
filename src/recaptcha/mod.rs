//! reCAPTCHA Enterprise REST client (`projects.assessments.create`).

pub mod client;
pub mod models;

pub use self::client::{AssessmentClient, Connector, RecaptchaClient, RecaptchaConnector};
pub use self::models::{
    Assessment, ClassificationReason, Event, ProjectName, RiskAnalysis, TokenProperties,
};
