//! Workflow run result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The outcome of a successful four-stage workflow run.
///
/// A failed run produces no partial result; only the per-stage status
/// snapshots remain available for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Always true; failed runs return an error instead.
    pub success: bool,
    /// Profile stage output.
    pub profile: Value,
    /// Assessment stage output.
    pub assessment: Value,
    /// Recommender stage output.
    pub recommender: Value,
    /// Tracker stage output.
    pub tracker: Value,
}
