//! Assessment stage: one generated assessment per profile skill.

use super::models::{
    AssessmentEntry, AssessmentReport, AssessmentState, Difficulty, UserProfile,
};
use super::{parse_input, Stage};
use crate::core::StageKind;
use crate::errors::AgentError;
use crate::services::AssessmentGenerator;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Generates assessments for every skill on the profile.
///
/// Partial-success policy: a single skill's generation failure is
/// recorded as a `status: "error"` entry rather than failing the stage.
/// The stage itself fails only on a malformed input payload.
#[derive(Debug)]
pub struct AssessmentStage {
    generator: Arc<dyn AssessmentGenerator>,
    difficulty: Difficulty,
}

impl AssessmentStage {
    /// Creates the stage over a generator at the given difficulty.
    #[must_use]
    pub fn new(generator: Arc<dyn AssessmentGenerator>, difficulty: Difficulty) -> Self {
        Self {
            generator,
            difficulty,
        }
    }
}

#[async_trait]
impl Stage for AssessmentStage {
    fn kind(&self) -> StageKind {
        StageKind::Assessment
    }

    async fn execute(&self, input: Value) -> Result<Value, AgentError> {
        let profile: UserProfile = parse_input(self.kind(), input)?;

        let mut assessments = Vec::with_capacity(profile.skills.len());
        for skill in &profile.skills {
            match self.generator.generate(skill, self.difficulty).await {
                Ok(assessment) => assessments.push(AssessmentEntry {
                    skill: skill.clone(),
                    assessment: Some(assessment),
                    difficulty: self.difficulty,
                    status: AssessmentState::Pending,
                    error: None,
                }),
                Err(err) => {
                    warn!(skill = %skill, error = %err, "assessment generation failed");
                    assessments.push(AssessmentEntry {
                        skill: skill.clone(),
                        assessment: None,
                        difficulty: self.difficulty,
                        status: AssessmentState::Error,
                        error: Some(err.to_string()),
                    });
                }
            }
        }

        let generated = assessments
            .iter()
            .filter(|entry| entry.status != AssessmentState::Error)
            .count();
        info!(
            total = profile.skills.len(),
            generated, "assessment generation finished"
        );

        let report = AssessmentReport {
            total_skills: profile.skills.len(),
            generated_assessments: generated,
            assessments,
        };
        Ok(serde_json::to_value(report)?)
    }
}
