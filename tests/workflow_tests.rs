//! End-to-end workflow tests over mock collaborators.

use agentflow::config::AnalyzerConfig;
use agentflow::core::{StageKind, StageState};
use agentflow::events::topics;
use agentflow::pipeline::{AgentRegistry, Orchestrator};
use agentflow::services::{CatalogSource, Services};
use agentflow::stages::models::{AssessmentReport, AssessmentState, TrackingPlan, WorkflowInput};
use agentflow::testing::{
    CollectingSubscriber, FailingStage, MockAssessmentGenerator, MockSkillExtractor,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn services(extractor: MockSkillExtractor, generator: MockAssessmentGenerator) -> Services {
    Services {
        skills: Arc::new(extractor),
        assessments: Arc::new(generator),
        recommendations: Arc::new(CatalogSource::new()),
    }
}

fn orchestrator_with(extractor: MockSkillExtractor, generator: MockAssessmentGenerator) -> Orchestrator {
    let registry = AgentRegistry::new(
        &services(extractor, generator),
        &AnalyzerConfig::default(),
    );
    Orchestrator::new(registry)
}

fn subscribe_chain(orchestrator: &Orchestrator, events: &CollectingSubscriber) {
    for topic in [
        topics::PROFILE_COMPLETED,
        topics::ASSESSMENT_COMPLETED,
        topics::RECOMMENDER_COMPLETED,
        topics::TRACKER_COMPLETED,
        topics::WORKFLOW_ERROR,
    ] {
        orchestrator.subscribe(topic, events.callback(topic));
    }
}

#[tokio::test]
async fn successful_run_threads_outputs_and_publishes_in_order() {
    let orchestrator = orchestrator_with(
        MockSkillExtractor::returning(vec!["JavaScript".to_string(), "Python".to_string()]),
        MockAssessmentGenerator::new(),
    );
    let events = CollectingSubscriber::new();
    subscribe_chain(&orchestrator, &events);

    let result = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume text"))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(
        events.topics_seen(),
        vec![
            topics::PROFILE_COMPLETED,
            topics::ASSESSMENT_COMPLETED,
            topics::RECOMMENDER_COMPLETED,
            topics::TRACKER_COMPLETED,
        ]
    );

    // The result's four fields are exactly the stage outputs.
    for (kind, output) in [
        (StageKind::Profile, &result.profile),
        (StageKind::Assessment, &result.assessment),
        (StageKind::Recommender, &result.recommender),
        (StageKind::Tracker, &result.tracker),
    ] {
        let status = orchestrator.status_of(kind).unwrap();
        assert_eq!(status.state, StageState::Completed);
        assert_eq!(status.last_result.as_ref(), Some(output));
    }

    // Each completion event carried that stage's output.
    assert_eq!(
        events.payloads_for(topics::ASSESSMENT_COMPLETED),
        vec![result.assessment.clone()]
    );
    assert!(events.payloads_for(topics::WORKFLOW_ERROR).is_empty());
}

#[tokio::test]
async fn failing_stage_aborts_the_rest_and_fires_one_workflow_error() {
    let mut registry = AgentRegistry::new(
        &services(
            MockSkillExtractor::returning(vec!["Python".to_string()]),
            MockAssessmentGenerator::new(),
        ),
        &AnalyzerConfig::default(),
    );
    registry.replace(Arc::new(FailingStage::new(
        StageKind::Assessment,
        "generator exploded",
    )));
    let orchestrator = Orchestrator::new(registry);
    let events = CollectingSubscriber::new();
    subscribe_chain(&orchestrator, &events);

    let err = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("generator exploded"));
    assert_eq!(err.stage_kind(), Some(StageKind::Assessment));

    // Profile completed before the failure and keeps its status.
    assert_eq!(
        orchestrator.status_of(StageKind::Profile).unwrap().state,
        StageState::Completed
    );
    assert_eq!(
        orchestrator.status_of(StageKind::Assessment).unwrap().state,
        StageState::Error
    );
    // Stages after the failing one never ran.
    for kind in [StageKind::Recommender, StageKind::Tracker] {
        assert_eq!(
            orchestrator.status_of(kind).unwrap().state,
            StageState::Idle
        );
    }

    assert_eq!(
        events.topics_seen(),
        vec![topics::PROFILE_COMPLETED, topics::WORKFLOW_ERROR]
    );
    let error_payloads = events.payloads_for(topics::WORKFLOW_ERROR);
    assert_eq!(error_payloads.len(), 1);
    assert_eq!(error_payloads[0]["stage"], json!("assessment"));
    assert!(error_payloads[0]["error"]
        .as_str()
        .unwrap()
        .contains("generator exploded"));
}

#[tokio::test]
async fn tracker_failure_rejects_without_tracker_completed() {
    let mut registry = AgentRegistry::new(
        &services(
            MockSkillExtractor::returning(vec!["Python".to_string()]),
            MockAssessmentGenerator::new(),
        ),
        &AnalyzerConfig::default(),
    );
    registry.replace(Arc::new(FailingStage::new(StageKind::Tracker, "disk full")));
    let orchestrator = Orchestrator::new(registry);
    let events = CollectingSubscriber::new();
    subscribe_chain(&orchestrator, &events);

    let err = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));

    assert_eq!(
        events.topics_seen(),
        vec![
            topics::PROFILE_COMPLETED,
            topics::ASSESSMENT_COMPLETED,
            topics::RECOMMENDER_COMPLETED,
            topics::WORKFLOW_ERROR,
        ]
    );
    assert!(events.payloads_for(topics::TRACKER_COMPLETED).is_empty());
}

#[tokio::test]
async fn partial_assessment_failures_degrade_without_aborting() {
    let orchestrator = orchestrator_with(
        MockSkillExtractor::returning(vec![
            "JavaScript".to_string(),
            "SQL".to_string(),
            "Python".to_string(),
            "Docker".to_string(),
            "Git".to_string(),
        ]),
        MockAssessmentGenerator::new().failing_for(["SQL", "Docker"]),
    );
    let events = CollectingSubscriber::new();
    subscribe_chain(&orchestrator, &events);

    let result = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap();

    let report: AssessmentReport = serde_json::from_value(result.assessment).unwrap();
    assert_eq!(report.assessments.len(), 5);
    let failed = report
        .assessments
        .iter()
        .filter(|entry| entry.status == AssessmentState::Error)
        .count();
    assert_eq!(failed, 2);

    // The stage overall succeeded.
    assert!(events
        .topics_seen()
        .contains(&topics::ASSESSMENT_COMPLETED.to_string()));
    assert!(events.payloads_for(topics::WORKFLOW_ERROR).is_empty());
}

#[tokio::test]
async fn example_scenario_with_fallback_extraction() {
    // Extractor down: the profile stage falls back to keyword matching.
    let orchestrator = orchestrator_with(
        MockSkillExtractor::failing(),
        MockAssessmentGenerator::new(),
    );

    let result = orchestrator
        .run_workflow(
            serde_json::from_value(json!({
                "resume": "Skilled in JavaScript and Python",
                "experience": "beginner"
            }))
            .unwrap(),
        )
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.profile["skills"], json!(["JavaScript", "Python"]));

    let report: AssessmentReport = serde_json::from_value(result.assessment).unwrap();
    assert_eq!(report.assessments.len(), 2);

    // Freshly generated assessments are pending, so no recommendations yet.
    assert_eq!(result.recommender["totalRecommendations"], json!(0));

    let plan: TrackingPlan = serde_json::from_value(result.tracker).unwrap();
    assert_eq!(plan.learning_path.phases.len(), 3);
    assert!(plan.learning_path.phases.iter().all(|p| !p.completed));
}

#[tokio::test]
async fn rerun_after_failure_resets_the_failing_stage() {
    let orchestrator = orchestrator_with(
        MockSkillExtractor::returning(vec!["Python".to_string()]),
        MockAssessmentGenerator::new().failing_for(["Python"]),
    );

    // Per-skill failures degrade but do not abort; run twice to confirm
    // trackers re-enter Processing from a terminal state.
    orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap();
    let result = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(
        orchestrator.status_of(StageKind::Assessment).unwrap().state,
        StageState::Completed
    );
}

#[tokio::test]
async fn subscriber_error_propagates_to_the_workflow_caller() {
    let orchestrator = orchestrator_with(
        MockSkillExtractor::returning(vec!["Python".to_string()]),
        MockAssessmentGenerator::new(),
    );
    orchestrator.subscribe(topics::PROFILE_COMPLETED, |_| {
        Err(agentflow::errors::AgentError::Subscriber {
            topic: topics::PROFILE_COMPLETED.to_string(),
            message: "downstream rejected".to_string(),
        })
    });
    let events = CollectingSubscriber::new();
    orchestrator.subscribe(
        topics::WORKFLOW_ERROR,
        events.callback(topics::WORKFLOW_ERROR),
    );

    let err = orchestrator
        .run_workflow(WorkflowInput::from_resume("resume"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("downstream rejected"));

    // The profile stage itself still completed; only delivery failed.
    assert_eq!(
        orchestrator.status_of(StageKind::Profile).unwrap().state,
        StageState::Completed
    );
    // No stage failed, so workflow_error stays silent and the chain stops
    // before the assessment stage runs.
    assert!(events.payloads_for(topics::WORKFLOW_ERROR).is_empty());
    assert_eq!(
        orchestrator.status_of(StageKind::Assessment).unwrap().state,
        StageState::Idle
    );
}
