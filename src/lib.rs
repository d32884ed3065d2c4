//! # recaptcha-nodes (reCAPTCHA Enterprise authentication nodes)
//!
//! Two nodes for an authentication tree, executed one after the other by the
//! host against the same [`state::SharedState`]:
//!
//! - [`nodes::AssessmentNode`] sends the client token and site key to the
//!   reCAPTCHA Enterprise `createAssessment` API and stores the returned risk
//!   score, classification reasons and assessment name. It branches `false`
//!   when the service reports the token as invalid.
//! - [`nodes::ScoreNode`] compares the stored score against a configured
//!   threshold and branches `GREATER_THAN_OR_EQUAL` or `LESS_THAN`.
//!
//! The nodes never call each other. Scoring happens inside the remote service;
//! this crate only marshals the request, records the response and applies the
//! threshold.
//!
//! ## Errors
//!
//! An invalid token is a normal outcome. Service failures, missing state keys
//! and bad configuration are returned as [`error::NodeError`] and halt the
//! flow; nothing is retried.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod nodes;
pub mod recaptcha;
pub mod state;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
