//! Configuration for the analyzer service collaborators.

use crate::stages::models::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the resume-analyzer / assessment service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Base URL of the analyzer service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Difficulty assessments are generated at.
    pub difficulty: Difficulty,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8002".to_string(),
            timeout_secs: 30,
            difficulty: Difficulty::Intermediate,
        }
    }
}

impl AnalyzerConfig {
    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The full URL for `path` under the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
