//! Compilation of workflow steps into TabzChrome MCP commands.
//!
//! One lookup table and one compile function feed every consumer (step
//! preview, full-workflow script, export), so the emitted command text cannot
//! drift between call sites. The textual formats here are parsed by the
//! external MCP runtime and must stay byte-stable.

use std::fmt;

use crate::workflow::{StepAction, Workflow, WorkflowStep};

/// A single textual automation instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// An `mcp-cli` tool invocation with a JSON payload.
    Call { tool: &'static str, payload: String },
    /// A shell sleep, in seconds.
    Sleep { seconds: f64 },
    /// An annotation with no remote primitive (terminal input).
    Note { text: String },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Call { tool, payload } => {
                write!(f, "mcp-cli call tabz/{tool} '{payload}'")
            }
            Instruction::Sleep { seconds } => write!(f, "sleep {seconds}"),
            Instruction::Note { text } => write!(f, "# Send to terminal: {text}"),
        }
    }
}

/// The MCP tool identifier targeted by each action kind.
pub fn mcp_tool(action: StepAction) -> &'static str {
    match action {
        StepAction::OpenUrl => "tabz_open_url",
        StepAction::Click => "tabz_click",
        StepAction::Fill => "tabz_fill",
        StepAction::Screenshot => "tabz_screenshot",
        StepAction::Wait => "sleep",
        StepAction::ExecuteScript => "tabz_execute_script",
        StepAction::SendTerminal => "terminal",
    }
}

/// Compile one step into its instruction(s).
///
/// Always one instruction for the action itself, plus one trailing sleep when
/// the step carries a non-zero `delay_after_ms`. Wait steps emit exactly one
/// sleep; the model keeps their `delay_after_ms` zeroed so they never
/// double-sleep.
pub fn compile_step(step: &WorkflowStep) -> Vec<Instruction> {
    let mut out = vec![primary_instruction(step)];
    if step.delay_after_ms > 0 {
        out.push(Instruction::Sleep { seconds: seconds(step.delay_after_ms) });
    }
    out
}

/// Compile every step of a workflow, in order.
pub fn compile_workflow(workflow: &Workflow) -> Vec<Instruction> {
    workflow.steps().iter().flat_map(compile_step).collect()
}

/// Render a workflow as an annotated command script, one block per step.
pub fn workflow_script(workflow: &Workflow) -> String {
    workflow
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let commands = compile_step(step)
                .iter()
                .map(Instruction::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            format!("# Step {}: {}\n{}", i + 1, step.action.label(), commands)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn primary_instruction(step: &WorkflowStep) -> Instruction {
    match step.action {
        StepAction::OpenUrl => Instruction::Call {
            tool: mcp_tool(step.action),
            payload: format!(r#"{{"url": "{}"}}"#, step.target),
        },
        StepAction::Click => Instruction::Call {
            tool: mcp_tool(step.action),
            payload: format!(r#"{{"selector": "{}"}}"#, step.target),
        },
        StepAction::Fill => Instruction::Call {
            tool: mcp_tool(step.action),
            payload: format!(
                r#"{{"selector": "{}", "value": "{}"}}"#,
                step.target,
                escape_quotes(&step.value)
            ),
        },
        StepAction::Screenshot => {
            let payload = if step.target.is_empty() {
                "{}".to_string()
            } else {
                format!(r#"{{"selector": "{}"}}"#, step.target)
            };
            Instruction::Call { tool: mcp_tool(step.action), payload }
        }
        StepAction::Wait => Instruction::Sleep { seconds: seconds(step.duration_ms) },
        StepAction::ExecuteScript => Instruction::Call {
            tool: mcp_tool(step.action),
            payload: format!(r#"{{"script": "{}"}}"#, escape_quotes(&step.value)),
        },
        StepAction::SendTerminal => Instruction::Note { text: escape_quotes(&step.value) },
    }
}

/// Backslash-escape embedded double quotes so free text cannot break the
/// instruction's own quoting.
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Milliseconds to seconds, printed shortest (1.5, 0.5, 2).
fn seconds(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{StepAction, StepPatch, Workflow};

    fn step(action: StepAction, target: &str, value: &str) -> WorkflowStep {
        let mut wf = Workflow::new("t", "");
        let id = wf.append(action);
        wf.update(
            id,
            StepPatch {
                target: Some(target.into()),
                value: Some(value.into()),
                ..StepPatch::default()
            },
        );
        wf.get(id).unwrap().clone()
    }

    #[test]
    fn open_url_command() {
        let out = compile_step(&step(StepAction::OpenUrl, "https://example.com", ""));
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].to_string(),
            r#"mcp-cli call tabz/tabz_open_url '{"url": "https://example.com"}'"#
        );
    }

    #[test]
    fn fill_escapes_embedded_quotes() {
        let out = compile_step(&step(StepAction::Fill, "#a", r#"He said "hi""#));
        assert_eq!(
            out[0].to_string(),
            r##"mcp-cli call tabz/tabz_fill '{"selector": "#a", "value": "He said \"hi\""}'"##
        );
    }

    #[test]
    fn script_escapes_embedded_quotes() {
        let out = compile_step(&step(StepAction::ExecuteScript, "", r#"alert("x")"#));
        assert_eq!(
            out[0].to_string(),
            r#"mcp-cli call tabz/tabz_execute_script '{"script": "alert(\"x\")"}'"#
        );
    }

    #[test]
    fn screenshot_without_selector_sends_empty_payload() {
        let out = compile_step(&step(StepAction::Screenshot, "", ""));
        assert_eq!(out[0].to_string(), "mcp-cli call tabz/tabz_screenshot '{}'");

        let out = compile_step(&step(StepAction::Screenshot, "#hero", ""));
        assert_eq!(
            out[0].to_string(),
            r##"mcp-cli call tabz/tabz_screenshot '{"selector": "#hero"}'"##
        );
    }

    #[test]
    fn wait_emits_single_sleep_in_seconds() {
        let mut wf = Workflow::new("t", "");
        let id = wf.append(StepAction::Wait);
        wf.update(id, StepPatch { duration_ms: Some(1500), ..StepPatch::default() });

        let out = compile_step(wf.get(id).unwrap());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to_string(), "sleep 1.5");
    }

    #[test]
    fn sleep_formatting_drops_trailing_zeroes() {
        assert_eq!(Instruction::Sleep { seconds: seconds(2000) }.to_string(), "sleep 2");
        assert_eq!(Instruction::Sleep { seconds: seconds(500) }.to_string(), "sleep 0.5");
    }

    #[test]
    fn delay_after_appends_trailing_sleep() {
        let mut wf = Workflow::new("t", "");
        let id = wf.append(StepAction::Click);
        wf.update(
            id,
            StepPatch {
                target: Some("#btn".into()),
                delay_after_ms: Some(500),
                ..StepPatch::default()
            },
        );

        let out = compile_step(wf.get(id).unwrap());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to_string(), r##"mcp-cli call tabz/tabz_click '{"selector": "#btn"}'"##);
        assert_eq!(out[1].to_string(), "sleep 0.5");
    }

    #[test]
    fn terminal_step_is_an_annotation() {
        let out = compile_step(&step(StepAction::SendTerminal, "", "ls -la"));
        assert_eq!(out[0].to_string(), "# Send to terminal: ls -la");
    }

    #[test]
    fn workflow_script_annotates_each_step() {
        let mut wf = Workflow::new("demo", "");
        let a = wf.append(StepAction::OpenUrl);
        wf.update(a, StepPatch { target: Some("https://x.dev".into()), ..StepPatch::default() });
        wf.append(StepAction::Screenshot);

        let script = workflow_script(&wf);
        assert!(script.starts_with("# Step 1: Open URL\n"));
        assert!(script.contains("\n\n# Step 2: Screenshot\n"));
    }
}
