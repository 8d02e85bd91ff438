//! Typed payloads flowing between stages.
//!
//! The orchestrator threads payloads as opaque JSON values; these models
//! are what the adapters read and write at each boundary. Field names
//! serialize camelCase to match the wire shapes consumed by the
//! progress-display collaborators.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Difficulty level used for assessments, recommendations, and phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level.
    Beginner,
    /// Working proficiency.
    Intermediate,
    /// Expert level.
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Caller-supplied input for a workflow run.
///
/// Only the resume payload is required; identity fields default the way
/// the profile stage fills them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInput {
    /// Caller-provided user id; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Display name; defaults to "User".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email; defaults to empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Resume text to extract skills from.
    pub resume: String,
    /// Self-reported experience level; defaults to beginner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Difficulty>,
    /// Topics the user cares about.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl WorkflowInput {
    /// Creates an input from resume text alone.
    #[must_use]
    pub fn from_resume(resume: impl Into<String>) -> Self {
        Self {
            resume: resume.into(),
            ..Self::default()
        }
    }
}

/// Output of the profile stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Extracted skills; always present, possibly empty.
    pub skills: Vec<String>,
    /// Experience level.
    pub experience: Difficulty,
    /// Declared interests.
    pub interests: Vec<String>,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

/// Outcome of generating one skill's assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentState {
    /// Generated, waiting for the user to take it.
    Pending,
    /// Taken and scored.
    Completed,
    /// Generation failed; the entry carries the error inline.
    Error,
}

/// One skill's assessment entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEntry {
    /// The skill assessed.
    pub skill: String,
    /// Generated assessment content; absent when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Value>,
    /// Difficulty the assessment was generated at.
    pub difficulty: Difficulty,
    /// Entry state.
    pub status: AssessmentState,
    /// Inline error when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output of the assessment stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// One entry per profile skill, failures included.
    pub assessments: Vec<AssessmentEntry>,
    /// Number of skills on the input profile.
    pub total_skills: usize,
    /// Number of entries generated without error.
    pub generated_assessments: usize,
}

/// Kind of recommended learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A video lesson.
    Video,
    /// A structured course.
    Course,
    /// A hands-on project.
    Project,
}

/// A single learning recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable resource identifier.
    pub id: String,
    /// Resource kind.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Human-readable title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// The skill this resource teaches.
    pub skill: String,
    /// Target difficulty.
    pub difficulty: Difficulty,
    /// Resource URL (videos).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Runtime or effort estimate (videos, courses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Hosting platform (courses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// List price (courses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Time estimate (projects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Starter repository (projects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

/// Output of the recommender stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    /// Concatenated recommendations across completed assessments.
    pub recommendations: Vec<Recommendation>,
    /// Total recommendation count.
    pub total_recommendations: usize,
    /// Distinct skills covered, in first-seen order.
    pub skills_covered: Vec<String>,
}

/// Zeroed progress counters created by the tracker stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCounters {
    /// Videos finished.
    pub videos_completed: u32,
    /// Courses finished.
    pub courses_completed: u32,
    /// Projects finished.
    pub projects_completed: u32,
    /// Assessments taken.
    pub assessments_taken: u32,
    /// Accumulated score.
    pub total_score: u32,
}

/// One phase of the learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPhase {
    /// Phase name.
    pub name: String,
    /// What the phase is for.
    pub description: String,
    /// Recommendations assigned to the phase.
    pub items: Vec<Recommendation>,
    /// Whether the user has finished the phase.
    pub completed: bool,
}

/// The three-phase learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    /// Foundation, Intermediate, Advanced.
    pub phases: Vec<LearningPhase>,
}

/// A progress milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Stable milestone id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What earns the milestone.
    pub description: String,
    /// Whether it has been reached.
    pub completed: bool,
    /// Points awarded on completion.
    pub points: u32,
}

/// Output of the tracker stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingPlan {
    /// User the plan belongs to.
    pub user_id: String,
    /// RFC3339 timestamp the plan was created.
    pub start_date: String,
    /// All counters start at zero.
    pub progress: ProgressCounters,
    /// Three-phase path partitioned by difficulty.
    pub learning_path: LearningPath,
    /// Fixed starter milestones.
    pub milestones: Vec<Milestone>,
    /// Earned achievements; starts empty.
    pub achievements: Vec<Value>,
}

/// A listed hackathon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    /// Stable hackathon id.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Start date.
    pub start_date: String,
    /// End date.
    pub end_date: String,
    /// Prize pool.
    pub prize: String,
    /// Registered participant count.
    pub participants: u32,
    /// Event status.
    pub status: String,
}

/// A skill challenge attached to the hackathon board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Stable challenge id.
    pub id: String,
    /// Challenge title.
    pub title: String,
    /// What to build.
    pub description: String,
    /// Target difficulty.
    pub difficulty: Difficulty,
    /// Skills exercised.
    pub skills: Vec<String>,
    /// Expected effort.
    pub estimated_time: String,
    /// Points awarded.
    pub points: u32,
}

/// Output of the hackathon stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonBoard {
    /// Currently running hackathons.
    pub active_hackathons: Vec<Hackathon>,
    /// The user's submissions; starts empty.
    pub user_submissions: Vec<Value>,
    /// Generated skill challenges.
    pub challenges: Vec<Challenge>,
    /// Per-hackathon leaderboard; starts empty.
    pub leaderboard: Vec<Value>,
}

/// One row of the global leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Position on the board.
    pub rank: u32,
    /// User identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Total score.
    pub score: u32,
    /// Earned badge names.
    pub badges: Vec<String>,
    /// Listed skills.
    pub skills: Vec<String>,
}

/// An earnable achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable achievement id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// How to earn it.
    pub description: String,
    /// Display icon.
    pub icon: String,
    /// Points awarded.
    pub points: u32,
}

/// An earnable badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Stable badge id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Badge description.
    pub description: String,
    /// Display icon.
    pub icon: String,
    /// Requirement text.
    pub requirement: String,
}

/// Output of the leaderboard stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    /// The global leaderboard rows.
    pub global_leaderboard: Vec<LeaderboardEntry>,
    /// All earnable achievements.
    pub achievements: Vec<Achievement>,
    /// All earnable badges.
    pub badges: Vec<Badge>,
    /// The current user's rank, once known.
    #[serde(default)]
    pub user_rank: Option<u32>,
}
