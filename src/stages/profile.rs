//! Profile stage: resume parsing and skill extraction.

use super::models::{Difficulty, UserProfile, WorkflowInput};
use super::{parse_input, Stage};
use crate::core::StageKind;
use crate::errors::AgentError;
use crate::services::{fallback_skills, SkillExtractor};
use crate::utils::{generate_uuid, iso_timestamp};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds a user profile from caller-supplied data.
///
/// The one stage with an in-adapter fallback: if the external extraction
/// call fails, skills come from the local keyword heuristic instead, and
/// the failure never reaches the orchestrator. `skills` is always present
/// on the output, possibly empty.
#[derive(Debug)]
pub struct ProfileStage {
    extractor: Arc<dyn SkillExtractor>,
}

impl ProfileStage {
    /// Creates the stage over a skill extractor.
    #[must_use]
    pub fn new(extractor: Arc<dyn SkillExtractor>) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl Stage for ProfileStage {
    fn kind(&self) -> StageKind {
        StageKind::Profile
    }

    async fn execute(&self, input: Value) -> Result<Value, AgentError> {
        let input: WorkflowInput = parse_input(self.kind(), input)?;

        let skills = match self.extractor.extract(&input.resume).await {
            Ok(skills) => skills,
            Err(err) => {
                warn!(error = %err, "skill extraction failed, using keyword fallback");
                fallback_skills(&input.resume)
            }
        };

        let profile = UserProfile {
            user_id: input
                .user_id
                .unwrap_or_else(|| generate_uuid().to_string()),
            name: input.name.unwrap_or_else(|| "User".to_string()),
            email: input.email.unwrap_or_default(),
            skills,
            experience: input.experience.unwrap_or(Difficulty::Beginner),
            interests: input.interests,
            created_at: iso_timestamp(),
        };

        info!(
            user_id = %profile.user_id,
            skills = profile.skills.len(),
            "profile assembled"
        );
        Ok(serde_json::to_value(profile)?)
    }
}
