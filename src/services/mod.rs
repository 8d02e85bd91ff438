//! External collaborator traits and implementations.
//!
//! Stages depend on these protocol traits, not on concrete transports,
//! so HTTP-backed and mock implementations are interchangeable.

mod catalog;
mod fallback;
mod http;

pub use catalog::CatalogSource;
pub use fallback::fallback_skills;
pub use http::{HttpAssessmentGenerator, HttpSkillExtractor};

use crate::errors::AgentError;
use crate::stages::models::{Difficulty, Recommendation};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// Extracts skills from resume text.
#[async_trait]
pub trait SkillExtractor: Send + Sync + Debug {
    /// Returns the skills found in `resume`.
    async fn extract(&self, resume: &str) -> Result<Vec<String>, AgentError>;
}

/// Generates one assessment per skill.
#[async_trait]
pub trait AssessmentGenerator: Send + Sync + Debug {
    /// Generates an assessment for `skill` at `difficulty`.
    async fn generate(&self, skill: &str, difficulty: Difficulty) -> Result<Value, AgentError>;
}

/// Supplies learning-content recommendations per skill.
///
/// The recommender stage fans out to all three methods and concatenates
/// the results. Lookups are local catalog reads, so this trait is
/// synchronous.
pub trait RecommendationSource: Send + Sync + Debug {
    /// Video lessons for `skill`.
    fn videos(&self, skill: &str) -> Vec<Recommendation>;
    /// Courses for `skill`.
    fn courses(&self, skill: &str) -> Vec<Recommendation>;
    /// Hands-on projects for `skill`.
    fn projects(&self, skill: &str) -> Vec<Recommendation>;
}

/// The bundle of collaborators a registry is built from.
#[derive(Debug, Clone)]
pub struct Services {
    /// Resume skill extraction.
    pub skills: Arc<dyn SkillExtractor>,
    /// Assessment generation.
    pub assessments: Arc<dyn AssessmentGenerator>,
    /// Recommendation lookup.
    pub recommendations: Arc<dyn RecommendationSource>,
}
