use crate::{
    config::ScoreConfig,
    error::NodeError,
    nodes::{Node, Outcome},
    state::SharedState,
};
use std::fmt;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    GreaterThanOrEqual,
    LessThan,
}

impl Outcome for ScoreOutcome {
    fn id(&self) -> &'static str {
        match self {
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::LessThan => "LESS_THAN",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::GreaterThanOrEqual, Self::LessThan]
    }
}

impl fmt::Display for ScoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[must_use]
pub fn evaluate(score: f64, score_threshold: f64) -> ScoreOutcome {
    if score >= score_threshold {
        ScoreOutcome::GreaterThanOrEqual
    } else {
        ScoreOutcome::LessThan
    }
}

/// Branches on the score stored by [`crate::nodes::AssessmentNode`].
#[derive(Debug, Clone, Default)]
pub struct ScoreNode {
    config: ScoreConfig,
}

impl ScoreNode {
    #[must_use]
    pub const fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// # Errors
    /// Returns `NodeError::MissingState` if no score has been stored.
    #[instrument(skip(self, state))]
    pub fn decide(&self, state: &SharedState) -> Result<ScoreOutcome, NodeError> {
        let score = state.require_score()?;
        let threshold = self.config.score_threshold();

        debug!(
            "Evaluating if score {} is greater than or equal to {}",
            score, threshold
        );

        Ok(evaluate(score, threshold))
    }
}

impl Node for ScoreNode {
    type Outcome = ScoreOutcome;

    async fn process(&self, state: &mut SharedState) -> Result<ScoreOutcome, NodeError> {
        self.decide(state)
    }
}
