use crate::{
    config::AssessmentConfig,
    error::NodeError,
    nodes::{Node, Outcome},
    recaptcha::{AssessmentClient, Connector, Event, ProjectName, RecaptchaConnector},
    state::{AssessmentRecord, SharedState},
};
use std::fmt;
use tracing::{debug, error, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    True,
    False,
}

impl Outcome for Decision {
    fn id(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::True, Self::False]
    }
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Requests a reCAPTCHA Enterprise assessment for the token in the shared state.
#[derive(Debug, Clone)]
pub struct AssessmentNode<C = RecaptchaConnector> {
    config: AssessmentConfig,
    connector: C,
}

impl AssessmentNode<RecaptchaConnector> {
    #[must_use]
    pub fn new(config: AssessmentConfig) -> Self {
        let connector = RecaptchaConnector::new(config.endpoint().clone());
        Self { config, connector }
    }
}

impl<C: Connector> AssessmentNode<C> {
    #[must_use]
    pub fn with_connector(config: AssessmentConfig, connector: C) -> Self {
        Self { config, connector }
    }

    #[must_use]
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }
}

impl<C> Node for AssessmentNode<C>
where
    C: Connector + Sync,
    C::Client: Send,
{
    type Outcome = Decision;

    #[instrument(skip(self, state), fields(project_id = %self.config.project_id()))]
    async fn process(&self, state: &mut SharedState) -> Result<Decision, NodeError> {
        let event = Event::new(state.require_token()?, state.require_site_key()?);
        let project = ProjectName::of(self.config.project_id());

        let client = self.connector.connect(self.config.api_key())?;
        let response = client.create_assessment(&project, &event).await;
        drop(client);
        let assessment = response?;

        if !assessment.token_properties.valid {
            error!(
                invalid_reason = assessment
                    .token_properties
                    .invalid_reason
                    .as_deref()
                    .unwrap_or("unknown"),
                "reCAPTCHA token is not valid"
            );
            return Ok(Decision::False);
        }

        let analysis = assessment.risk_analysis;

        debug!("Risk analysis finished with score: {}", analysis.score);

        state.record_assessment(AssessmentRecord {
            score: analysis.score,
            reason_codes: analysis
                .reasons
                .into_iter()
                .map(String::from)
                .collect(),
            assessment_name: assessment.name,
        });

        Ok(Decision::True)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        error::ServiceError,
        recaptcha::{Assessment, ClassificationReason, RiskAnalysis, TokenProperties},
        state::{RECAPTCHA_SITE_KEY, RECAPTCHA_TOKEN},
    };
    use reqwest::StatusCode;
    use secrecy::{ExposeSecret, SecretString};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    #[derive(Clone)]
    enum Reply {
        Assessment(Assessment),
        Status(StatusCode),
    }

    #[derive(Clone, Default)]
    struct Counters {
        connects: Arc<AtomicUsize>,
        calls: Arc<AtomicUsize>,
        releases: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<(String, Event, String)>>>,
    }

    struct MockConnector {
        reply: Reply,
        counters: Counters,
    }

    struct MockClient {
        reply: Reply,
        api_key: String,
        counters: Counters,
    }

    impl Connector for MockConnector {
        type Client = MockClient;

        fn connect(&self, api_key: &SecretString) -> Result<MockClient, ServiceError> {
            self.counters.connects.fetch_add(1, Ordering::SeqCst);
            Ok(MockClient {
                reply: self.reply.clone(),
                api_key: api_key.expose_secret().to_string(),
                counters: self.counters.clone(),
            })
        }
    }

    impl AssessmentClient for MockClient {
        async fn create_assessment(
            &self,
            project: &ProjectName,
            event: &Event,
        ) -> Result<Assessment, ServiceError> {
            self.counters.calls.fetch_add(1, Ordering::SeqCst);
            self.counters.seen.lock().unwrap().push((
                project.to_string(),
                event.clone(),
                self.api_key.clone(),
            ));
            match &self.reply {
                Reply::Assessment(assessment) => Ok(assessment.clone()),
                Reply::Status(status) => Err(ServiceError::Status {
                    status: *status,
                    message: "backend failure".to_string(),
                }),
            }
        }
    }

    impl Drop for MockClient {
        fn drop(&mut self) {
            self.counters.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn node(reply: Reply) -> (AssessmentNode<MockConnector>, Counters) {
        let counters = Counters::default();
        let config = AssessmentConfig::new("p", SecretString::from("api-key")).unwrap();
        let connector = MockConnector {
            reply,
            counters: counters.clone(),
        };
        (AssessmentNode::with_connector(config, connector), counters)
    }

    fn valid_assessment(score: f64, reasons: &[&str], name: &str) -> Assessment {
        Assessment {
            name: name.to_string(),
            token_properties: TokenProperties {
                valid: true,
                ..TokenProperties::default()
            },
            risk_analysis: RiskAnalysis {
                score,
                reasons: reasons
                    .iter()
                    .map(|r| ClassificationReason::from((*r).to_string()))
                    .collect(),
            },
        }
    }

    fn invalid_assessment() -> Assessment {
        Assessment {
            name: "projects/p/assessments/bad".to_string(),
            token_properties: TokenProperties {
                valid: false,
                invalid_reason: Some("EXPIRED".to_string()),
                ..TokenProperties::default()
            },
            risk_analysis: RiskAnalysis {
                score: 0.9,
                reasons: vec![ClassificationReason::Automation],
            },
        }
    }

    #[tokio::test]
    async fn valid_token_records_assessment() {
        let (node, counters) = node(Reply::Assessment(valid_assessment(
            0.7,
            &["AUTOMATION", "UNUSUAL_LOCATION"],
            "projects/p/assessments/a1",
        )));
        let mut state = SharedState::with_event("tok123", "site1");

        let outcome = node.process(&mut state).await.unwrap();

        assert_eq!(outcome, Decision::True);
        assert_eq!(state.score(), Some(0.7));
        assert_eq!(
            state.reason_codes(),
            Some(
                &[
                    "AUTOMATION".to_string(),
                    "UNUSUAL_LOCATION".to_string()
                ][..]
            )
        );
        assert_eq!(
            state.assessment_name(),
            Some("projects/p/assessments/a1")
        );
        assert_eq!(state.token.as_deref(), Some("tok123"));

        let seen = counters.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "projects/p");
        assert_eq!(seen[0].1, Event::new("tok123", "site1"));
        assert_eq!(seen[0].2, "api-key");
    }

    #[tokio::test]
    async fn invalid_token_returns_false_without_writing() {
        let (node, counters) = node(Reply::Assessment(invalid_assessment()));
        let mut state = SharedState::with_event("tok", "site");
        let before = state.clone();

        let outcome = node.process(&mut state).await.unwrap();

        assert_eq!(outcome, Decision::False);
        assert_eq!(state, before);
        assert_eq!(counters.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn service_failure_propagates() {
        let (node, _) = node(Reply::Status(StatusCode::TOO_MANY_REQUESTS));
        let mut state = SharedState::with_event("tok", "site");
        let before = state.clone();

        let err = node.process(&mut state).await.unwrap_err();

        assert!(matches!(
            err,
            NodeError::Service(ServiceError::Status { status, .. }) if status == StatusCode::TOO_MANY_REQUESTS
        ));
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn client_released_once_on_every_path() {
        let replies = [
            Reply::Assessment(valid_assessment(0.2, &[], "projects/p/assessments/x")),
            Reply::Assessment(invalid_assessment()),
            Reply::Status(StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for reply in replies {
            let (node, counters) = node(reply);
            let mut state = SharedState::with_event("tok", "site");
            let _ = node.process(&mut state).await;

            assert_eq!(counters.connects.load(Ordering::SeqCst), 1);
            assert_eq!(counters.calls.load(Ordering::SeqCst), 1);
            assert_eq!(counters.releases.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn missing_inputs_fail_before_connecting() {
        let (node, counters) = node(Reply::Assessment(invalid_assessment()));

        let mut state = SharedState::default();
        state.site_key = Some("site".to_string());
        let err = node.process(&mut state).await.unwrap_err();
        assert!(matches!(err, NodeError::MissingState(RECAPTCHA_TOKEN)));

        let mut state = SharedState::default();
        state.token = Some("tok".to_string());
        let err = node.process(&mut state).await.unwrap_err();
        assert!(matches!(err, NodeError::MissingState(RECAPTCHA_SITE_KEY)));

        assert_eq!(counters.connects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn decision_from_bool() {
        assert_eq!(Decision::from(true), Decision::True);
        assert_eq!(Decision::from(false).to_string(), "false");
    }
}
