//! HTTP-backed implementations of the collaborator traits.
//!
//! The analyzer service accepts a multipart file upload at
//! `/analyze_resume` and a JSON body at `/generate_assessment`, answering
//! JSON with `skills` / `assessment` fields. A non-2xx status or a
//! response missing the expected field is a failure.

use super::{AssessmentGenerator, SkillExtractor};
use crate::config::AnalyzerConfig;
use crate::errors::AgentError;
use crate::stages::models::Difficulty;
use async_trait::async_trait;
use reqwest::multipart;
use serde_json::{json, Value};
use tracing::debug;

/// Skill extraction via the resume-analyzer service.
#[derive(Debug, Clone)]
pub struct HttpSkillExtractor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSkillExtractor {
    /// Builds an extractor from config.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint("analyze_resume"),
        })
    }
}

#[async_trait]
impl SkillExtractor for HttpSkillExtractor {
    async fn extract(&self, resume: &str) -> Result<Vec<String>, AgentError> {
        let part = multipart::Part::text(resume.to_string())
            .file_name("resume.txt")
            .mime_str("text/plain")?;
        let form = multipart::Form::new().part("file", part);

        debug!(endpoint = %self.endpoint, "uploading resume for analysis");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::UpstreamStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Err(AgentError::MalformedResponse {
                endpoint: self.endpoint.clone(),
                detail: error.to_string(),
            });
        }
        let skills = body
            .get("skills")
            .and_then(Value::as_array)
            .ok_or_else(|| AgentError::MalformedResponse {
                endpoint: self.endpoint.clone(),
                detail: "missing 'skills' array".to_string(),
            })?;

        Ok(skills
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect())
    }
}

/// Assessment generation via the analyzer service.
#[derive(Debug, Clone)]
pub struct HttpAssessmentGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssessmentGenerator {
    /// Builds a generator from config.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint("generate_assessment"),
        })
    }
}

#[async_trait]
impl AssessmentGenerator for HttpAssessmentGenerator {
    async fn generate(&self, skill: &str, difficulty: Difficulty) -> Result<Value, AgentError> {
        debug!(endpoint = %self.endpoint, skill, %difficulty, "requesting assessment");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "skills": [skill],
                "difficulty": difficulty,
            }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::UpstreamStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let mut body: Value = response.json().await?;
        match body.get_mut("assessment").map(Value::take) {
            Some(assessment) if !assessment.is_null() => Ok(assessment),
            _ => Err(AgentError::MalformedResponse {
                endpoint: self.endpoint.clone(),
                detail: "missing 'assessment' field".to_string(),
            }),
        }
    }
}
