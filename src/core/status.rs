//! Stage kind, lifecycle state, and status snapshot types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an agent's role in the pipeline.
///
/// The set is closed: every registry holds exactly these six stages.
/// Profile, Assessment, Recommender, and Tracker form the linear workflow
/// chain; Hackathon and Leaderboard are independently invocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Resume parsing and skill extraction.
    Profile,
    /// Per-skill assessment generation.
    Assessment,
    /// Learning-content recommendations.
    Recommender,
    /// Progress-tracking scaffold setup.
    Tracker,
    /// Hackathon catalog and challenges.
    Hackathon,
    /// Leaderboard, achievements, and badges.
    Leaderboard,
}

impl StageKind {
    /// The four kinds that make up the workflow chain, in execution order.
    pub const CHAIN: [Self; 4] = [
        Self::Profile,
        Self::Assessment,
        Self::Recommender,
        Self::Tracker,
    ];

    /// All registered kinds.
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Assessment,
        Self::Recommender,
        Self::Tracker,
        Self::Hackathon,
        Self::Leaderboard,
    ];

    /// The event topic published when this stage completes.
    #[must_use]
    pub fn completed_topic(&self) -> String {
        format!("{self}_completed")
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Assessment => write!(f, "assessment"),
            Self::Recommender => write!(f, "recommender"),
            Self::Tracker => write!(f, "tracker"),
            Self::Hackathon => write!(f, "hackathon"),
            Self::Leaderboard => write!(f, "leaderboard"),
        }
    }
}

/// The lifecycle state of a stage.
///
/// A stage starts `Idle` and is moved by its status tracker through
/// `Processing` into one of the terminal states. A later run re-enters
/// `Processing` from either terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    /// Stage has not run yet (or has been reset).
    Idle,
    /// Stage is currently executing.
    Processing,
    /// Last run completed successfully.
    Completed,
    /// Last run failed.
    Error,
}

impl Default for StageState {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl StageState {
    /// Returns true if the state is terminal for a run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

/// A point-in-time snapshot of one stage's status.
///
/// Snapshots are cloned out of the tracker by value; holding one never
/// grants access to the tracker's internal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageStatus {
    /// Which stage this snapshot describes.
    pub kind: StageKind,
    /// Current lifecycle state.
    pub state: StageState,
    /// Output of the most recent successful run, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_result: Option<serde_json::Value>,
    /// Rendered error of the most recent failed run, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl StageStatus {
    /// Creates an idle status for the given kind.
    #[must_use]
    pub fn idle(kind: StageKind) -> Self {
        Self {
            kind,
            state: StageState::Idle,
            last_result: None,
            last_error: None,
        }
    }
}
