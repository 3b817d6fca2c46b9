//! Ordered, identity-stable automation workflows.

pub mod loader;
pub mod model;
pub mod types;

pub use model::Workflow;
pub use types::{StepAction, StepId, StepPatch, StepSpec, WorkflowSpec, WorkflowStep};
