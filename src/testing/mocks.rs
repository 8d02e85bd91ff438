//! Mock collaborators with call counters.

use crate::core::StageKind;
use crate::errors::AgentError;
use crate::services::{AssessmentGenerator, SkillExtractor};
use crate::stages::models::Difficulty;
use crate::stages::Stage;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A skill extractor returning a fixed list, or always failing.
#[derive(Debug, Default)]
pub struct MockSkillExtractor {
    skills: Vec<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockSkillExtractor {
    /// Always returns `skills`.
    #[must_use]
    pub fn returning(skills: Vec<String>) -> Self {
        Self {
            skills,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails, forcing the profile stage onto its fallback.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            skills: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of extract calls observed.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SkillExtractor for MockSkillExtractor {
    async fn extract(&self, _resume: &str) -> Result<Vec<String>, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AgentError::UpstreamStatus {
                endpoint: "mock://analyze_resume".to_string(),
                status: 503,
            });
        }
        Ok(self.skills.clone())
    }
}

/// An assessment generator that fails for a scripted set of skills.
#[derive(Debug, Default)]
pub struct MockAssessmentGenerator {
    fail_for: HashSet<String>,
    calls: AtomicUsize,
}

impl MockAssessmentGenerator {
    /// Succeeds for every skill.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails for the given skills.
    #[must_use]
    pub fn failing_for<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fail_for = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Number of generate calls observed.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssessmentGenerator for MockAssessmentGenerator {
    async fn generate(&self, skill: &str, difficulty: Difficulty) -> Result<Value, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_for.contains(skill) {
            return Err(AgentError::MalformedResponse {
                endpoint: "mock://generate_assessment".to_string(),
                detail: format!("no assessment for {skill}"),
            });
        }
        Ok(json!({
            "skill": skill,
            "difficulty": difficulty,
            "questions": [
                {"q": format!("What is {skill}?"), "points": 10},
            ],
        }))
    }
}

/// A stage that always fails with a fixed message.
#[derive(Debug)]
pub struct FailingStage {
    kind: StageKind,
    message: String,
}

impl FailingStage {
    /// Creates a failing stage for `kind`.
    #[must_use]
    pub fn new(kind: StageKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[async_trait]
impl Stage for FailingStage {
    fn kind(&self) -> StageKind {
        self.kind
    }

    async fn execute(&self, _input: Value) -> Result<Value, AgentError> {
        Err(AgentError::stage(self.kind, self.message.clone()))
    }
}

/// Records every event delivered to it, tagged with the topic the
/// callback was registered under.
#[derive(Debug, Clone, Default)]
pub struct CollectingSubscriber {
    events: Arc<Mutex<Vec<(String, Value)>>>,
}

impl CollectingSubscriber {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback to register under `topic`; records `(topic, payload)`
    /// on every delivery and never fails.
    pub fn callback(
        &self,
        topic: &str,
    ) -> impl Fn(&Value) -> Result<(), AgentError> + Send + Sync + 'static {
        let events = self.events.clone();
        let topic = topic.to_string();
        move |payload| {
            events.lock().push((topic.clone(), payload.clone()));
            Ok(())
        }
    }

    /// All recorded `(topic, payload)` pairs, in delivery order.
    #[must_use]
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().clone()
    }

    /// Topics in delivery order.
    #[must_use]
    pub fn topics_seen(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|(topic, _)| topic.clone())
            .collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Payloads recorded under `topic`.
    #[must_use]
    pub fn payloads_for(&self, topic: &str) -> Vec<Value> {
        self.events
            .lock()
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, payload)| payload.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn mock_extractor_counts_calls() {
        let extractor = MockSkillExtractor::returning(vec!["Rust".to_string()]);
        assert_eq!(extractor.extract("x").await.unwrap(), vec!["Rust"]);
        assert_eq!(extractor.extract("y").await.unwrap(), vec!["Rust"]);
        assert_eq!(extractor.calls(), 2);
    }

    #[tokio::test]
    async fn mock_generator_fails_only_for_scripted_skills() {
        let generator = MockAssessmentGenerator::new().failing_for(["SQL"]);
        assert!(generator
            .generate("Python", Difficulty::Intermediate)
            .await
            .is_ok());
        assert!(generator
            .generate("SQL", Difficulty::Intermediate)
            .await
            .is_err());
        assert_eq!(generator.calls(), 2);
    }

    #[test]
    fn collector_records_in_order() {
        let collector = CollectingSubscriber::new();
        let cb_a = collector.callback("a");
        let cb_b = collector.callback("b");
        cb_a(&json!(1)).unwrap();
        cb_b(&json!(2)).unwrap();

        assert_eq!(collector.topics_seen(), vec!["a", "b"]);
        assert_eq!(collector.payloads_for("b"), vec![json!(2)]);
        assert_eq!(collector.len(), 2);
    }
}
