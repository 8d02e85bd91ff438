//! Recommender stage: learning content for completed assessments.

use super::models::{AssessmentReport, AssessmentState, Recommendation, RecommendationSet};
use super::{parse_input, Stage};
use crate::core::StageKind;
use crate::errors::AgentError;
use crate::services::RecommendationSource;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Fans out to the video, course, and project sources for every
/// assessment the user has completed, concatenating the results.
///
/// Assessments that are not completed are skipped, never errored.
#[derive(Debug)]
pub struct RecommenderStage {
    source: Arc<dyn RecommendationSource>,
}

impl RecommenderStage {
    /// Creates the stage over a recommendation source.
    #[must_use]
    pub fn new(source: Arc<dyn RecommendationSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Stage for RecommenderStage {
    fn kind(&self) -> StageKind {
        StageKind::Recommender
    }

    async fn execute(&self, input: Value) -> Result<Value, AgentError> {
        let report: AssessmentReport = parse_input(self.kind(), input)?;

        let mut recommendations: Vec<Recommendation> = Vec::new();
        for entry in &report.assessments {
            if entry.status != AssessmentState::Completed {
                continue;
            }
            recommendations.extend(self.source.videos(&entry.skill));
            recommendations.extend(self.source.courses(&entry.skill));
            recommendations.extend(self.source.projects(&entry.skill));
        }

        let mut skills_covered: Vec<String> = Vec::new();
        for rec in &recommendations {
            if !skills_covered.contains(&rec.skill) {
                skills_covered.push(rec.skill.clone());
            }
        }

        info!(
            recommendations = recommendations.len(),
            skills = skills_covered.len(),
            "recommendations assembled"
        );

        let set = RecommendationSet {
            total_recommendations: recommendations.len(),
            skills_covered,
            recommendations,
        };
        Ok(serde_json::to_value(set)?)
    }
}
