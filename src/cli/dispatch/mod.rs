//! Maps validated CLI arguments to an [`Action`].

use crate::cli::actions::{assess::Args, Action};
use crate::cli::commands::{event, recaptcha};
use crate::config::{AssessmentConfig, ScoreConfig};
use anyhow::{Context, Result};

/// Map validated CLI matches to an assess action.
///
/// # Errors
/// Returns an error if required arguments are missing or the node
/// configuration is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let recaptcha_opts = recaptcha::Options::parse(matches)?;
    let event_opts = event::Options::parse(matches)?;

    let assessment = AssessmentConfig::with_endpoint(
        &recaptcha_opts.project_id,
        recaptcha_opts.api_key,
        recaptcha_opts.endpoint,
    )
    .context("invalid assessment node configuration")?;

    let score = ScoreConfig::parse(&recaptcha_opts.score_threshold)
        .context("invalid score node configuration")?;

    Ok(Action::Assess(Args {
        assessment,
        score,
        token: event_opts.token,
        site_key: event_opts.site_key,
    }))
}
