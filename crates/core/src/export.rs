//! Exporting workflows as `.prompty` documents.
//!
//! The export shares the template format's frontmatter-plus-body shape, but
//! it is a one-way "compile to runnable script" artifact: bodies carry
//! compiled commands, not `{{variable}}` directives, so re-parsing an export
//! declares zero variables.

use crate::compile::{compile_step, Instruction};
use crate::workflow::Workflow;

/// Serialize a workflow into a `.prompty` document.
///
/// One block per step, in workflow order: a numbered heading with the action
/// label, then that step's compiled instruction(s).
pub fn serialize(workflow: &Workflow) -> String {
    let name = if workflow.name.is_empty() { "Untitled Workflow" } else { workflow.name.as_str() };
    let description = if workflow.description.is_empty() {
        "A custom automation workflow"
    } else {
        workflow.description.as_str()
    };

    let steps_content = workflow
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let commands = compile_step(step)
                .iter()
                .map(Instruction::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            format!("### {}. {}\n{}", i + 1, step.action.label(), commands)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("---\nname: {name}\ndescription: {description}\n---\n\n## Workflow\n\n{steps_content}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template;
    use crate::workflow::{StepAction, StepPatch, Workflow};

    fn sample_workflow() -> Workflow {
        let mut wf = Workflow::new("Login Flow", "Log in and screenshot");
        let open = wf.append(StepAction::OpenUrl);
        wf.update(
            open,
            StepPatch {
                target: Some("https://example.com".into()),
                delay_after_ms: Some(500),
                ..StepPatch::default()
            },
        );
        let shot = wf.append(StepAction::Screenshot);
        wf.update(shot, StepPatch { target: Some("#main".into()), ..StepPatch::default() });
        wf
    }

    #[test]
    fn export_has_frontmatter_and_ordered_blocks() {
        let doc = serialize(&sample_workflow());
        assert!(doc.starts_with("---\nname: Login Flow\ndescription: Log in and screenshot\n---\n\n## Workflow\n\n"));

        let first = doc.find("### 1. Open URL").unwrap();
        let second = doc.find("### 2. Screenshot").unwrap();
        assert!(first < second);
        assert!(doc.contains("sleep 0.5"));
        assert!(doc.ends_with('\n'));
    }

    #[test]
    fn export_falls_back_to_default_metadata() {
        let doc = serialize(&Workflow::new("", ""));
        assert!(doc.contains("name: Untitled Workflow"));
        assert!(doc.contains("description: A custom automation workflow"));
    }

    #[test]
    fn export_is_one_way() {
        // Re-parsing an export yields metadata and commands, never variables.
        let doc = serialize(&sample_workflow());
        let tpl = template::parse(&doc);
        assert_eq!(tpl.name, "Login Flow");
        assert!(tpl.variables.is_empty());
        assert_eq!(tpl.commands.len(), 2);
    }
}
