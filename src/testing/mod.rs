//! Test doubles for the collaborator traits and the event bus.

mod mocks;

pub use mocks::{
    CollectingSubscriber, FailingStage, MockAssessmentGenerator, MockSkillExtractor,
};
