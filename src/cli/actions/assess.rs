use crate::{
    config::{AssessmentConfig, ScoreConfig},
    flow::{self, FlowOutcome},
    nodes::{AssessmentNode, ScoreNode},
    state::SharedState,
};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub assessment: AssessmentConfig,
    pub score: ScoreConfig,
    pub token: String,
    pub site_key: String,
}

/// Run the assessment and score nodes once and print the result.
/// # Errors
/// Returns an error if either node fails or the result cannot be serialized.
pub async fn execute(args: Args) -> Result<()> {
    debug!("assessment config: {:?}", args.assessment);

    let assessment = AssessmentNode::new(args.assessment);
    let score = ScoreNode::new(args.score);
    let mut state = SharedState::with_event(args.token, args.site_key);

    let outcome = flow::run(&assessment, &score, &mut state)
        .await
        .context("authentication flow failed")?;

    let report = report(outcome, &state)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn report(outcome: FlowOutcome, state: &SharedState) -> Result<Value> {
    Ok(json!({
        "outcome": outcome.id(),
        "sharedState": serde_json::to_value(state)?,
    }))
}
