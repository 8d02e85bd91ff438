//! Per-stage status tracking.

use crate::core::{StageKind, StageState, StageStatus};
use crate::errors::AgentError;
use crate::stages::Stage;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Default)]
struct TrackerState {
    state: StageState,
    last_result: Option<Value>,
    last_error: Option<String>,
}

/// Wraps a stage with lifecycle tracking.
///
/// The only path through which a stage is ever invoked. Stages stay
/// unaware of the shared status; the tracker composes it on. One run at a
/// time per tracker: the orchestrator serializes workflow runs, so state
/// transitions never race.
#[derive(Debug)]
pub struct StatusTracker {
    kind: StageKind,
    stage: Arc<dyn Stage>,
    inner: Mutex<TrackerState>,
}

impl StatusTracker {
    /// Wraps `stage`. The tracker reports the stage's own kind.
    #[must_use]
    pub fn new(stage: Arc<dyn Stage>) -> Self {
        Self {
            kind: stage.kind(),
            stage,
            inner: Mutex::new(TrackerState::default()),
        }
    }

    /// The wrapped stage's kind.
    #[must_use]
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    /// Runs the wrapped stage.
    ///
    /// Sets `Processing`, awaits `execute`, then records the outcome: on
    /// success stores the result and sets `Completed`; on failure stores
    /// the rendered error, sets `Error`, and re-raises the same error.
    pub async fn run(&self, input: Value) -> Result<Value, AgentError> {
        self.inner.lock().state = StageState::Processing;

        match self.stage.execute(input).await {
            Ok(output) => {
                let mut inner = self.inner.lock();
                inner.last_result = Some(output.clone());
                inner.last_error = None;
                inner.state = StageState::Completed;
                Ok(output)
            }
            Err(err) => {
                let mut inner = self.inner.lock();
                inner.last_error = Some(err.to_string());
                inner.state = StageState::Error;
                Err(err)
            }
        }
    }

    /// The current status, cloned out by value.
    #[must_use]
    pub fn snapshot(&self) -> StageStatus {
        let inner = self.inner.lock();
        StageStatus {
            kind: self.kind,
            state: inner.state,
            last_result: inner.last_result.clone(),
            last_error: inner.last_error.clone(),
        }
    }
}
