//! The workflow orchestrator.

use super::{AgentRegistry, WorkflowResult};
use crate::config::AnalyzerConfig;
use crate::core::{StageKind, StageStatus};
use crate::errors::AgentError;
use crate::events::{topics, EventBus};
use crate::services::{
    CatalogSource, HttpAssessmentGenerator, HttpSkillExtractor, Services,
};
use crate::stages::models::WorkflowInput;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the registered stages in the fixed declared order, feeding each
/// stage's output into the next, publishing a completion event after each
/// stage and a single `workflow_error` event on first failure.
///
/// Constructed once at application start and passed by reference to
/// consumers; there is no process-wide instance.
#[derive(Debug)]
pub struct Orchestrator {
    registry: AgentRegistry,
    bus: EventBus,
    // Tracker state is not reentrant, so overlapping workflow runs on one
    // orchestrator serialize here.
    run_guard: tokio::sync::Mutex<()>,
}

impl Orchestrator {
    /// Creates an orchestrator over an existing registry.
    #[must_use]
    pub fn new(registry: AgentRegistry) -> Self {
        Self {
            registry,
            bus: EventBus::new(),
            run_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Creates an orchestrator wired to the HTTP analyzer service and the
    /// built-in recommendation catalog.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AgentError> {
        let services = Services {
            skills: Arc::new(HttpSkillExtractor::new(config)?),
            assessments: Arc::new(HttpAssessmentGenerator::new(config)?),
            recommendations: Arc::new(CatalogSource::new()),
        };
        Ok(Self::new(AgentRegistry::new(&services, config)))
    }

    /// The orchestrator's event bus.
    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Registers an event callback; see [`EventBus::subscribe`].
    pub fn subscribe<F>(&self, topic: impl Into<String>, callback: F)
    where
        F: Fn(&Value) -> Result<(), AgentError> + Send + Sync + 'static,
    {
        self.bus.subscribe(topic, callback);
    }

    /// Status snapshots for all six stages.
    #[must_use]
    pub fn workflow_status(&self) -> HashMap<StageKind, StageStatus> {
        self.registry.all_statuses()
    }

    /// Status snapshot for one stage.
    #[must_use]
    pub fn status_of(&self, kind: StageKind) -> Option<StageStatus> {
        self.registry.get(kind).map(|tracker| tracker.snapshot())
    }

    /// Runs the fixed four-stage chain on `input`.
    ///
    /// Fail-fast: the first stage failure publishes `workflow_error`,
    /// aborts the remaining stages, and returns a
    /// [`AgentError::WorkflowAbort`] wrapping the stage error. Stages that
    /// already completed keep their `Completed` status, so snapshots show
    /// how far the run got. No retries, no rollback.
    pub async fn run_workflow(
        &self,
        input: WorkflowInput,
    ) -> Result<WorkflowResult, AgentError> {
        let _guard = self.run_guard.lock().await;
        info!("workflow starting");

        let initial = serde_json::to_value(input)?;
        let profile = self.run_chain_stage(StageKind::Profile, initial).await?;
        let assessment = self
            .run_chain_stage(StageKind::Assessment, profile.clone())
            .await?;
        let recommender = self
            .run_chain_stage(StageKind::Recommender, assessment.clone())
            .await?;
        let tracker = self
            .run_chain_stage(StageKind::Tracker, recommender.clone())
            .await?;

        info!("workflow completed");
        Ok(WorkflowResult {
            success: true,
            profile,
            assessment,
            recommender,
            tracker,
        })
    }

    /// Runs the hackathon stage on a caller-supplied context.
    ///
    /// Independent of the workflow chain: publishes its own completion
    /// event and does not participate in chain error propagation.
    pub async fn run_hackathon_stage(&self, context: Value) -> Result<Value, AgentError> {
        self.run_independent_stage(StageKind::Hackathon, context)
            .await
    }

    /// Runs the leaderboard stage on a caller-supplied context.
    ///
    /// Independent of the workflow chain, like
    /// [`Orchestrator::run_hackathon_stage`].
    pub async fn run_leaderboard_stage(&self, context: Value) -> Result<Value, AgentError> {
        self.run_independent_stage(StageKind::Leaderboard, context)
            .await
    }

    async fn run_chain_stage(
        &self,
        kind: StageKind,
        input: Value,
    ) -> Result<Value, AgentError> {
        match self.run_stage(kind, input).await {
            Ok(output) => {
                self.bus.publish(&kind.completed_topic(), &output)?;
                Ok(output)
            }
            Err(err) => {
                warn!(stage = %kind, error = %err, "workflow aborting");
                let payload = json!({
                    "stage": kind,
                    "error": err.to_string(),
                });
                // The stage error is the contract with the caller; a
                // subscriber failing while consuming workflow_error must
                // not replace it.
                if let Err(bus_err) = self.bus.publish(topics::WORKFLOW_ERROR, &payload) {
                    warn!(error = %bus_err, "workflow_error subscriber failed");
                }
                Err(AgentError::WorkflowAbort {
                    stage: kind,
                    source: Box::new(err),
                })
            }
        }
    }

    async fn run_independent_stage(
        &self,
        kind: StageKind,
        context: Value,
    ) -> Result<Value, AgentError> {
        let output = self.run_stage(kind, context).await?;
        self.bus.publish(&kind.completed_topic(), &output)?;
        Ok(output)
    }

    async fn run_stage(&self, kind: StageKind, input: Value) -> Result<Value, AgentError> {
        let tracker = self
            .registry
            .get(kind)
            .ok_or(AgentError::MissingStage(kind))?;
        tracker.run(input).await
    }
}
