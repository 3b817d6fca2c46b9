//! The workflow step model: an ordered collection with stable step identity.

use tracing::debug;

use super::types::{StepAction, StepId, StepPatch, StepSpec, WorkflowSpec, WorkflowStep};

/// An ordered automation workflow.
///
/// Step order is execution order. Ids identify steps independent of position:
/// [`Workflow::reorder`] moves a step without touching any id, and ids are
/// never reused after [`Workflow::remove`].
#[derive(Debug, Clone)]
pub struct Workflow {
    pub name: String,
    pub description: String,
    steps: Vec<WorkflowStep>,
    next_id: u64,
}

impl Workflow {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), steps: Vec::new(), next_id: 1 }
    }

    /// Build a workflow from an on-disk spec, assigning fresh step ids.
    pub fn from_spec(spec: WorkflowSpec) -> Self {
        let mut workflow = Self::new(spec.name, spec.description);
        for step in spec.steps {
            workflow.push_spec(step);
        }
        workflow
    }

    fn push_spec(&mut self, spec: StepSpec) {
        let id = self.fresh_id();
        let mut step = WorkflowStep::new(id, spec.action);
        step.target = spec.target;
        step.value = spec.value;
        step.duration_ms = spec.duration_ms;
        step.delay_after_ms = spec.delay_after_ms;
        step.normalize();
        self.steps.push(step);
    }

    fn fresh_id(&mut self) -> StepId {
        let id = StepId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, id: StepId) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Append a new step with empty fields and return its id.
    pub fn append(&mut self, action: StepAction) -> StepId {
        let id = self.fresh_id();
        self.steps.push(WorkflowStep::new(id, action));
        debug!(%id, ?action, "appended step");
        id
    }

    /// Apply a partial update to the step with the given id.
    ///
    /// No-op when the id is unknown. Returns whether a step was updated.
    pub fn update(&mut self, id: StepId, patch: StepPatch) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == id) else {
            return false;
        };

        if let Some(action) = patch.action {
            step.action = action;
        }
        if let Some(target) = patch.target {
            step.target = target;
        }
        if let Some(value) = patch.value {
            step.value = value;
        }
        if let Some(duration) = patch.duration_ms {
            step.duration_ms = duration;
        }
        if let Some(delay) = patch.delay_after_ms {
            step.delay_after_ms = delay;
        }
        step.normalize();
        true
    }

    /// Remove the step with the given id, keeping the rest in order.
    pub fn remove(&mut self, id: StepId) -> bool {
        let Some(pos) = self.steps.iter().position(|s| s.id == id) else {
            return false;
        };
        self.steps.remove(pos);
        debug!(%id, "removed step");
        true
    }

    /// Move the step with the given id to `target_index` as one atomic array
    /// move; intervening steps shift by one slot. Out-of-range indices clamp
    /// to the end. Returns whether a step moved.
    pub fn reorder(&mut self, id: StepId, target_index: usize) -> bool {
        let Some(from) = self.steps.iter().position(|s| s.id == id) else {
            return false;
        };
        let to = target_index.min(self.steps.len() - 1);
        if from == to {
            return true;
        }
        let step = self.steps.remove(from);
        self.steps.insert(to, step);
        debug!(%id, from, to, "reordered step");
        true
    }
}
