use crate::config::{DEFAULT_ENDPOINT, DEFAULT_SCORE_THRESHOLD};
use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;
use url::Url;

pub const ARG_PROJECT_ID: &str = "project-id";
pub const ARG_API_KEY: &str = "api-key";
pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_SCORE_THRESHOLD: &str = "score-threshold";

pub struct Options {
    pub project_id: String,
    pub api_key: SecretString,
    pub endpoint: Url,
    pub score_threshold: String,
}

impl Options {
    /// Parse node configuration arguments from matches.
    ///
    /// # Errors
    /// Returns an error if required arguments are missing or the endpoint is not a URL.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let project_id = match matches.get_one::<String>(ARG_PROJECT_ID) {
            Some(value) if !value.trim().is_empty() => value.clone(),
            _ => anyhow::bail!("missing required argument: --{ARG_PROJECT_ID}"),
        };

        let api_key = match matches.get_one::<String>(ARG_API_KEY) {
            Some(value) if !value.trim().is_empty() => SecretString::from(value.clone()),
            _ => anyhow::bail!("missing required argument: --{ARG_API_KEY}"),
        };

        let endpoint = matches
            .get_one::<String>(ARG_ENDPOINT)
            .map_or(DEFAULT_ENDPOINT, String::as_str);
        let endpoint = Url::parse(endpoint).with_context(|| format!("invalid endpoint: {endpoint}"))?;

        let score_threshold = matches
            .get_one::<String>(ARG_SCORE_THRESHOLD)
            .cloned()
            .unwrap_or_else(|| DEFAULT_SCORE_THRESHOLD.to_string());

        Ok(Self {
            project_id,
            api_key,
            endpoint,
            score_threshold,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PROJECT_ID)
                .long(ARG_PROJECT_ID)
                .help("reCAPTCHA Enterprise project ID")
                .env("RECAPTCHA_PROJECT_ID")
                .required(true),
        )
        .arg(
            Arg::new(ARG_API_KEY)
                .long(ARG_API_KEY)
                .help("reCAPTCHA Enterprise API key")
                .env("RECAPTCHA_API_KEY")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_ENDPOINT)
                .long(ARG_ENDPOINT)
                .help("reCAPTCHA Enterprise API endpoint")
                .env("RECAPTCHA_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::new(ARG_SCORE_THRESHOLD)
                .long(ARG_SCORE_THRESHOLD)
                .help("Scores greater than or equal to this value take the GREATER_THAN_OR_EQUAL outcome")
                .env("RECAPTCHA_SCORE_THRESHOLD")
                .default_value(DEFAULT_SCORE_THRESHOLD),
        )
}
