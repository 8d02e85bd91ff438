//! # Agentflow
//!
//! Agent workflow orchestration for a skills-learning platform.
//!
//! A fixed six-agent registry runs behind a sequential orchestrator:
//!
//! - **Stage contract**: each agent consumes one input payload and
//!   produces one output payload, or fails.
//! - **Status tracking**: every stage is wrapped by a tracker holding its
//!   lifecycle state (`Idle → Processing → {Completed, Error}`) and last
//!   result or error, exposed as read-only snapshots.
//! - **Event bus**: synchronous publish/subscribe on named topics,
//!   subscribers invoked in registration order.
//! - **Workflow chain**: Profile → Assessment → Recommender → Tracker,
//!   each stage fed the previous stage's output, fail-fast on the first
//!   error. Hackathon and Leaderboard run through their own entry points.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use agentflow::prelude::*;
//!
//! let orchestrator = Orchestrator::from_config(&AnalyzerConfig::default())?;
//! orchestrator.subscribe(topics::PROFILE_COMPLETED, |payload| {
//!     println!("profile ready: {payload}");
//!     Ok(())
//! });
//!
//! let result = orchestrator
//!     .run_workflow(WorkflowInput::from_resume("Skilled in Rust and SQL"))
//!     .await?;
//! assert!(result.success);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod observability;
pub mod pipeline;
pub mod services;
pub mod stages;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::core::{StageKind, StageState, StageStatus};
    pub use crate::errors::AgentError;
    pub use crate::events::{topics, EventBus};
    pub use crate::pipeline::{AgentRegistry, Orchestrator, StatusTracker, WorkflowResult};
    pub use crate::services::{
        AssessmentGenerator, CatalogSource, RecommendationSource, Services, SkillExtractor,
    };
    pub use crate::stages::models::{
        AssessmentReport, Difficulty, RecommendationSet, TrackingPlan, UserProfile,
        WorkflowInput,
    };
    pub use crate::stages::Stage;
}
