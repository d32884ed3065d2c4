//! Authentication tree nodes.
//!
//! The host hands each node the flow's [`SharedState`] and follows the edge
//! named by the returned outcome. An `Err` halts the flow.

pub mod assessment;
pub mod score;

pub use self::assessment::{AssessmentNode, Decision};
pub use self::score::{ScoreNode, ScoreOutcome};

use crate::{error::NodeError, state::SharedState};
use std::future::Future;

/// Fixed set of edges leaving a node.
pub trait Outcome: Copy + Sized + 'static {
    /// Identifier the host uses to select the next node.
    fn id(&self) -> &'static str;

    fn all() -> &'static [Self];
}

pub trait Node {
    type Outcome: Outcome;

    fn process(
        &self,
        state: &mut SharedState,
    ) -> impl Future<Output = Result<Self::Outcome, NodeError>> + Send;
}
