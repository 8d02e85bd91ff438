//! Leaderboard stage: global rankings, achievements, and badges.
//!
//! Independently invocable; consumes a caller-supplied context rather
//! than the workflow chain's output.

use super::models::{Achievement, Badge, LeaderboardEntry, LeaderboardView};
use super::Stage;
use crate::core::StageKind;
use crate::errors::AgentError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Assembles the leaderboard view.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderboardStage;

impl LeaderboardStage {
    /// Creates the stage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn global_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 1,
            user_id: "user-1".to_string(),
            name: "Alex Johnson".to_string(),
            score: 2850,
            badges: vec![
                "Expert".to_string(),
                "Hackathon Winner".to_string(),
                "Mentor".to_string(),
            ],
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
        },
        LeaderboardEntry {
            rank: 2,
            user_id: "user-2".to_string(),
            name: "Sarah Chen".to_string(),
            score: 2720,
            badges: vec!["Advanced".to_string(), "Project Master".to_string()],
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "Data Science".to_string(),
            ],
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    let achievement = |id: &str, name: &str, description: &str, icon: &str, points: u32| {
        Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            points,
        }
    };
    vec![
        achievement(
            "first-blood",
            "First Blood",
            "Complete your first assessment",
            "🎯",
            50,
        ),
        achievement(
            "video-master",
            "Video Master",
            "Complete 10 learning videos",
            "📺",
            100,
        ),
        achievement(
            "project-champion",
            "Project Champion",
            "Complete 5 hands-on projects",
            "🏆",
            200,
        ),
    ]
}

fn badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, description: &str, icon: &str, requirement: &str| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        requirement: requirement.to_string(),
    };
    vec![
        badge(
            "beginner",
            "Beginner",
            "Just getting started",
            "🌱",
            "Complete first assessment",
        ),
        badge(
            "intermediate",
            "Intermediate",
            "Making good progress",
            "🚀",
            "Complete 5 assessments",
        ),
        badge(
            "expert",
            "Expert",
            "Master of the craft",
            "👑",
            "Complete 20 assessments with 90%+ scores",
        ),
    ]
}

#[async_trait]
impl Stage for LeaderboardStage {
    fn kind(&self) -> StageKind {
        StageKind::Leaderboard
    }

    async fn execute(&self, _context: Value) -> Result<Value, AgentError> {
        let view = LeaderboardView {
            global_leaderboard: global_leaderboard(),
            achievements: achievements(),
            badges: badges(),
            user_rank: None,
        };
        info!(
            entries = view.global_leaderboard.len(),
            "leaderboard assembled"
        );
        Ok(serde_json::to_value(view)?)
    }
}
