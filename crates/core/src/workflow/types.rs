//! Workflow step types and the on-disk workflow spec.

use std::fmt;

use serde::Deserialize;

/// What a workflow step does.
///
/// Field relevance is action-dependent: `open_url` reads `target` as a URL,
/// `click`/`screenshot` read it as a selector (optional for screenshots),
/// `fill` reads `target` and `value`, `wait` reads only `duration_ms`, and
/// `execute_script`/`send_terminal` read only `value`. The model stores all
/// fields regardless; the compiler consumes the relevant ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    OpenUrl,
    Click,
    Fill,
    Screenshot,
    Wait,
    ExecuteScript,
    SendTerminal,
}

impl StepAction {
    /// Human-readable label used in headings and listings.
    pub fn label(self) -> &'static str {
        match self {
            StepAction::OpenUrl => "Open URL",
            StepAction::Click => "Click",
            StepAction::Fill => "Fill",
            StepAction::Screenshot => "Screenshot",
            StepAction::Wait => "Wait",
            StepAction::ExecuteScript => "Execute Script",
            StepAction::SendTerminal => "Send to Terminal",
        }
    }
}

/// Stable identity of a workflow step.
///
/// Assigned once at creation and never reused or recomputed; reordering
/// changes a step's position, never its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub(crate) u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

/// One declarative automation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub id: StepId,
    pub action: StepAction,
    /// URL or selector, depending on the action.
    pub target: String,
    /// Free text: fill text, script source, or terminal input.
    pub value: String,
    /// How long a `wait` step sleeps. Ignored for other actions.
    pub duration_ms: u64,
    /// Pause appended after a non-`wait` action. The model keeps this zeroed
    /// on `wait` steps so a wait never double-sleeps.
    pub delay_after_ms: u64,
}

impl WorkflowStep {
    pub(crate) fn new(id: StepId, action: StepAction) -> Self {
        Self {
            id,
            action,
            target: String::new(),
            value: String::new(),
            duration_ms: 0,
            delay_after_ms: 0,
        }
    }

    /// Re-establish the wait/delay split after a mutation.
    ///
    /// A step that just became a `wait` folds its trailing pause into the
    /// wait's own duration; waits carry no trailing pause of their own.
    pub(crate) fn normalize(&mut self) {
        if self.action == StepAction::Wait {
            if self.duration_ms == 0 && self.delay_after_ms > 0 {
                self.duration_ms = self.delay_after_ms;
            }
            self.delay_after_ms = 0;
        }
    }
}

/// Partial update for a step; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StepPatch {
    pub action: Option<StepAction>,
    pub target: Option<String>,
    pub value: Option<String>,
    pub duration_ms: Option<u64>,
    pub delay_after_ms: Option<u64>,
}

/// On-disk workflow document (YAML), without runtime ids.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowSpec {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

/// One step as authored in a workflow file.
#[derive(Debug, Clone, Deserialize)]
pub struct StepSpec {
    pub action: StepAction,

    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub duration_ms: u64,

    #[serde(default)]
    pub delay_after_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels() {
        assert_eq!(StepAction::OpenUrl.label(), "Open URL");
        assert_eq!(StepAction::SendTerminal.label(), "Send to Terminal");
    }

    #[test]
    fn step_id_display() {
        assert_eq!(StepId(7).to_string(), "step-7");
    }

    #[test]
    fn spec_deserializes_snake_case_actions() {
        let yaml = r#"
name: login
description: Log in and grab a screenshot
steps:
  - action: open_url
    target: https://example.com
    delay_after_ms: 500
  - action: wait
    duration_ms: 1000
  - action: execute_script
    value: console.log('hi')
"#;
        let spec: WorkflowSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.name, "login");
        assert_eq!(spec.steps.len(), 3);
        assert_eq!(spec.steps[0].action, StepAction::OpenUrl);
        assert_eq!(spec.steps[0].delay_after_ms, 500);
        assert_eq!(spec.steps[1].action, StepAction::Wait);
        assert_eq!(spec.steps[1].duration_ms, 1000);
    }

    #[test]
    fn normalize_folds_delay_into_wait_duration() {
        let mut step = WorkflowStep::new(StepId(1), StepAction::Wait);
        step.delay_after_ms = 750;
        step.normalize();
        assert_eq!(step.duration_ms, 750);
        assert_eq!(step.delay_after_ms, 0);
    }
}
