//! Tracker stage: progress-tracking scaffold.

use super::models::{
    Difficulty, LearningPath, LearningPhase, Milestone, ProgressCounters, Recommendation,
    RecommendationSet, TrackingPlan,
};
use super::{parse_input, Stage};
use crate::core::StageKind;
use crate::errors::AgentError;
use crate::utils::{generate_uuid, iso_timestamp};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Produces the initial tracking plan: zeroed counters, a three-phase
/// learning path partitioned by difficulty, and the starter milestones.
/// Pure computation, no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerStage;

impl TrackerStage {
    /// Creates the stage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn phase(name: &str, description: &str, items: Vec<Recommendation>) -> LearningPhase {
    LearningPhase {
        name: name.to_string(),
        description: description.to_string(),
        items,
        completed: false,
    }
}

fn learning_path(recommendations: &[Recommendation]) -> LearningPath {
    let of = |difficulty: Difficulty| {
        recommendations
            .iter()
            .filter(|rec| rec.difficulty == difficulty)
            .cloned()
            .collect()
    };
    LearningPath {
        phases: vec![
            phase("Foundation", "Build core skills", of(Difficulty::Beginner)),
            phase(
                "Intermediate",
                "Apply skills to projects",
                of(Difficulty::Intermediate),
            ),
            phase(
                "Advanced",
                "Master advanced concepts",
                of(Difficulty::Advanced),
            ),
        ],
    }
}

fn starter_milestones() -> Vec<Milestone> {
    let milestone = |id: &str, name: &str, description: &str, points: u32| Milestone {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        completed: false,
        points,
    };
    vec![
        milestone(
            "first-assessment",
            "Complete First Assessment",
            "Take your first skill assessment",
            50,
        ),
        milestone(
            "first-video",
            "Watch First Video",
            "Complete your first learning video",
            25,
        ),
        milestone(
            "first-project",
            "Complete First Project",
            "Finish your first hands-on project",
            100,
        ),
    ]
}

#[async_trait]
impl Stage for TrackerStage {
    fn kind(&self) -> StageKind {
        StageKind::Tracker
    }

    async fn execute(&self, input: Value) -> Result<Value, AgentError> {
        let set: RecommendationSet = parse_input(self.kind(), input)?;

        let plan = TrackingPlan {
            user_id: generate_uuid().to_string(),
            start_date: iso_timestamp(),
            progress: ProgressCounters::default(),
            learning_path: learning_path(&set.recommendations),
            milestones: starter_milestones(),
            achievements: Vec::new(),
        };

        info!(
            items = set.recommendations.len(),
            "progress tracking initialized"
        );
        Ok(serde_json::to_value(plan)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CatalogSource, RecommendationSource};
    use pretty_assertions::assert_eq;

    fn set_for(skills: &[&str]) -> Value {
        let catalog = CatalogSource::new();
        let mut recommendations = Vec::new();
        for skill in skills {
            recommendations.extend(catalog.videos(skill));
            recommendations.extend(catalog.courses(skill));
            recommendations.extend(catalog.projects(skill));
        }
        serde_json::to_value(RecommendationSet {
            total_recommendations: recommendations.len(),
            skills_covered: skills.iter().map(|s| (*s).to_string()).collect(),
            recommendations,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn plan_has_three_phases_and_zeroed_counters() {
        let stage = TrackerStage::new();
        let output = stage.execute(set_for(&["JavaScript"])).await.unwrap();
        let plan: TrackingPlan = serde_json::from_value(output).unwrap();

        assert_eq!(plan.progress, ProgressCounters::default());
        let names: Vec<&str> = plan
            .learning_path
            .phases
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Foundation", "Intermediate", "Advanced"]);
        assert!(plan.learning_path.phases.iter().all(|p| !p.completed));
        assert!(plan.achievements.is_empty());
    }

    #[tokio::test]
    async fn phases_partition_by_difficulty() {
        let stage = TrackerStage::new();
        let output = stage.execute(set_for(&["JavaScript"])).await.unwrap();
        let plan: TrackingPlan = serde_json::from_value(output).unwrap();

        // Catalog: beginner video, intermediate course and project.
        assert_eq!(plan.learning_path.phases[0].items.len(), 1);
        assert_eq!(plan.learning_path.phases[1].items.len(), 2);
        assert!(plan.learning_path.phases[2].items.is_empty());
    }

    #[tokio::test]
    async fn starter_milestones_are_fixed() {
        let stage = TrackerStage::new();
        let output = stage.execute(set_for(&[])).await.unwrap();
        let plan: TrackingPlan = serde_json::from_value(output).unwrap();

        let points: Vec<(String, u32)> = plan
            .milestones
            .iter()
            .map(|m| (m.id.clone(), m.points))
            .collect();
        assert_eq!(
            points,
            vec![
                ("first-assessment".to_string(), 50),
                ("first-video".to_string(), 25),
                ("first-project".to_string(), 100),
            ]
        );
        assert!(plan.milestones.iter().all(|m| !m.completed));
    }
}
