//! The fixed stage registry.

use super::StatusTracker;
use crate::config::AnalyzerConfig;
use crate::core::{StageKind, StageStatus};
use crate::services::Services;
use crate::stages::{
    AssessmentStage, HackathonStage, LeaderboardStage, ProfileStage, RecommenderStage, Stage,
    TrackerStage,
};
use std::collections::HashMap;
use std::sync::Arc;

/// A fixed mapping from stage kind to status-tracked stage instance,
/// constructed once at process start.
///
/// Trackers live for the registry's lifetime; their statuses are reset in
/// place on re-runs, never destroyed.
#[derive(Debug)]
pub struct AgentRegistry {
    trackers: HashMap<StageKind, Arc<StatusTracker>>,
}

impl AgentRegistry {
    /// Builds the standard six-stage registry from a services bundle.
    #[must_use]
    pub fn new(services: &Services, config: &AnalyzerConfig) -> Self {
        let mut registry = Self {
            trackers: HashMap::new(),
        };
        registry.insert(Arc::new(ProfileStage::new(services.skills.clone())));
        registry.insert(Arc::new(AssessmentStage::new(
            services.assessments.clone(),
            config.difficulty,
        )));
        registry.insert(Arc::new(RecommenderStage::new(
            services.recommendations.clone(),
        )));
        registry.insert(Arc::new(TrackerStage::new()));
        registry.insert(Arc::new(HackathonStage::new()));
        registry.insert(Arc::new(LeaderboardStage::new()));
        registry
    }

    fn insert(&mut self, stage: Arc<dyn Stage>) {
        self.trackers
            .insert(stage.kind(), Arc::new(StatusTracker::new(stage)));
    }

    /// Swaps in a replacement implementation for the stage's kind,
    /// resetting its tracker. Intended for tests and custom wiring.
    pub fn replace(&mut self, stage: Arc<dyn Stage>) {
        self.insert(stage);
    }

    /// The tracker for `kind`.
    #[must_use]
    pub fn get(&self, kind: StageKind) -> Option<&Arc<StatusTracker>> {
        self.trackers.get(&kind)
    }

    /// Status snapshots for every registered stage.
    #[must_use]
    pub fn all_statuses(&self) -> HashMap<StageKind, StageStatus> {
        self.trackers
            .iter()
            .map(|(kind, tracker)| (*kind, tracker.snapshot()))
            .collect()
    }
}
