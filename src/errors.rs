//! Error types for the agentflow orchestrator.

use crate::core::StageKind;
use thiserror::Error;

/// The main error type for agentflow operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A stage's `execute` failed.
    #[error("stage '{kind}' failed: {message}")]
    StageExecution {
        /// The stage that failed.
        kind: StageKind,
        /// What went wrong.
        message: String,
    },

    /// The orchestrator's wrapping of the first stage failure it observes.
    ///
    /// Terminates the remaining chain; stages after `stage` never run.
    #[error("workflow aborted at stage '{stage}': {source}")]
    WorkflowAbort {
        /// The stage whose failure aborted the workflow.
        stage: StageKind,
        /// The underlying stage error.
        #[source]
        source: Box<AgentError>,
    },

    /// An event subscriber failed during a publish.
    #[error("subscriber on topic '{topic}' failed: {message}")]
    Subscriber {
        /// The topic being published.
        topic: String,
        /// What went wrong in the callback.
        message: String,
    },

    /// A stage kind was requested that the registry does not hold.
    #[error("no stage registered for kind '{0}'")]
    MissingStage(StageKind),

    /// An upstream HTTP request failed outright.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An upstream service answered with a non-success status.
    #[error("upstream returned status {status} from {endpoint}")]
    UpstreamStatus {
        /// The endpoint that was called.
        endpoint: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// An upstream response parsed but did not carry the expected fields.
    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse {
        /// The endpoint that was called.
        endpoint: String,
        /// What was missing or wrong.
        detail: String,
    },

    /// A payload failed to serialize or deserialize.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl AgentError {
    /// Creates a stage execution error.
    #[must_use]
    pub fn stage(kind: StageKind, message: impl Into<String>) -> Self {
        Self::StageExecution {
            kind,
            message: message.into(),
        }
    }

    /// The stage kind this error is attributed to, if any.
    #[must_use]
    pub fn stage_kind(&self) -> Option<StageKind> {
        match self {
            Self::StageExecution { kind, .. } => Some(*kind),
            Self::WorkflowAbort { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
