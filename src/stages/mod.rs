//! Stage contract and the six agent adapters.
//!
//! A stage accepts one input value and produces one output value, or
//! fails. Stages carry no shared status of their own; lifecycle tracking
//! is composed on by [`crate::pipeline::StatusTracker`], which is the only
//! path through which a stage is ever invoked.

pub mod models;

mod assessment;
mod hackathon;
mod leaderboard;
mod profile;
mod recommender;
mod tracker;

pub use assessment::AssessmentStage;
pub use hackathon::HackathonStage;
pub use leaderboard::LeaderboardStage;
pub use profile::ProfileStage;
pub use recommender::RecommenderStage;
pub use tracker::TrackerStage;

use crate::core::StageKind;
use crate::errors::AgentError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

/// Trait for pipeline stages.
///
/// A failing stage returns its error to the caller; it must not catch and
/// suppress errors meant for the orchestrator. Per-item degradation
/// (recording a failure inline in the output) is a stage-internal policy
/// and not a stage failure.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// The stage's role in the pipeline.
    fn kind(&self) -> StageKind;

    /// Executes the stage on `input`, producing its output payload.
    async fn execute(&self, input: Value) -> Result<Value, AgentError>;
}

/// A stage that returns its input unchanged. Useful for wiring tests.
#[derive(Debug, Clone, Copy)]
pub struct EchoStage {
    kind: StageKind,
}

impl EchoStage {
    /// Creates an echo stage reporting `kind`.
    #[must_use]
    pub fn new(kind: StageKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl Stage for EchoStage {
    fn kind(&self) -> StageKind {
        self.kind
    }

    async fn execute(&self, input: Value) -> Result<Value, AgentError> {
        Ok(input)
    }
}

/// Deserializes a stage's input payload, attributing failures to `kind`.
pub(crate) fn parse_input<T: serde::de::DeserializeOwned>(
    kind: StageKind,
    input: Value,
) -> Result<T, AgentError> {
    serde_json::from_value(input)
        .map_err(|err| AgentError::stage(kind, format!("invalid input payload: {err}")))
}
