//! Core types shared across the orchestrator.

mod status;

pub use status::{StageKind, StageState, StageStatus};
