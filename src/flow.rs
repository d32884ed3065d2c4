//! Sequential driver for the assessment and score nodes, as the host wires
//! them: assessment first, score only on the `true` edge.

use crate::{
    error::NodeError,
    nodes::{AssessmentNode, Decision, Node, Outcome, ScoreNode, ScoreOutcome},
    recaptcha::Connector,
    state::SharedState,
};
use std::fmt;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The token was reported invalid; the score node never ran.
    Rejected,
    Scored(ScoreOutcome),
}

impl FlowOutcome {
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Rejected => Decision::False.id(),
            Self::Scored(outcome) => outcome.id(),
        }
    }
}

impl fmt::Display for FlowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// # Errors
/// Returns the first `NodeError` raised by either node.
#[instrument(skip_all)]
pub async fn run<C>(
    assessment: &AssessmentNode<C>,
    score: &ScoreNode,
    state: &mut SharedState,
) -> Result<FlowOutcome, NodeError>
where
    C: Connector + Sync,
    C::Client: Send,
{
    let decision = assessment.process(state).await?;
    info!("assessment outcome: {}", decision);

    if decision == Decision::False {
        return Ok(FlowOutcome::Rejected);
    }

    let outcome = score.process(state).await?;
    info!("score outcome: {}", outcome);

    Ok(FlowOutcome::Scored(outcome))
}
