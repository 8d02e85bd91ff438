//! Hackathon stage: catalog of active hackathons and skill challenges.
//!
//! Independently invocable; consumes a caller-supplied context rather
//! than the workflow chain's output.

use super::models::{Challenge, Difficulty, Hackathon, HackathonBoard};
use super::Stage;
use crate::core::StageKind;
use crate::errors::AgentError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Assembles the hackathon board.
#[derive(Debug, Clone, Copy, Default)]
pub struct HackathonStage;

impl HackathonStage {
    /// Creates the stage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn active_hackathons() -> Vec<Hackathon> {
    vec![
        Hackathon {
            id: "hack-1".to_string(),
            name: "AI Innovation Challenge".to_string(),
            description: "Build innovative AI applications".to_string(),
            start_date: "2024-01-15".to_string(),
            end_date: "2024-02-15".to_string(),
            prize: "$5000".to_string(),
            participants: 45,
            status: "active".to_string(),
        },
        Hackathon {
            id: "hack-2".to_string(),
            name: "Web Development Sprint".to_string(),
            description: "Create modern web applications".to_string(),
            start_date: "2024-01-20".to_string(),
            end_date: "2024-02-20".to_string(),
            prize: "$3000".to_string(),
            participants: 32,
            status: "active".to_string(),
        },
    ]
}

fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "challenge-1".to_string(),
            title: "Build a Skill Assessment App".to_string(),
            description: "Create an application that assesses programming skills".to_string(),
            difficulty: Difficulty::Intermediate,
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
            estimated_time: "2-3 days".to_string(),
            points: 200,
        },
        Challenge {
            id: "challenge-2".to_string(),
            title: "AI-Powered Learning Recommender".to_string(),
            description: "Build a system that recommends learning content".to_string(),
            difficulty: Difficulty::Advanced,
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "API Development".to_string(),
            ],
            estimated_time: "3-4 days".to_string(),
            points: 300,
        },
    ]
}

#[async_trait]
impl Stage for HackathonStage {
    fn kind(&self) -> StageKind {
        StageKind::Hackathon
    }

    async fn execute(&self, _context: Value) -> Result<Value, AgentError> {
        let board = HackathonBoard {
            active_hackathons: active_hackathons(),
            user_submissions: Vec::new(),
            challenges: challenges(),
            leaderboard: Vec::new(),
        };
        info!(
            hackathons = board.active_hackathons.len(),
            challenges = board.challenges.len(),
            "hackathon board assembled"
        );
        Ok(serde_json::to_value(board)?)
    }
}
