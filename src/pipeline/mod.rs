//! Registry, status tracking, and workflow orchestration.

mod orchestrator;
mod registry;
mod result;
mod tracker;

pub use orchestrator::Orchestrator;
pub use registry::AgentRegistry;
pub use result::WorkflowResult;
pub use tracker::StatusTracker;
