use std::path::Path;

use prompty_core::config::ConfigLoader;
use prompty_core::workflow::loader::load_workflow;
use prompty_core::workflow::StepAction;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::StepsArgs;

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "step")]
    id: String,
    action: &'static str,
    target: String,
    value: String,
    #[tabled(rename = "wait (ms)")]
    wait_ms: u64,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &StepsArgs) {
    debug!("Listing workflow steps");
    if let Err(e) = ConfigLoader::load_or_default(config, profile) {
        println!("FAIL prompty steps");
        println!("{e}");
        std::process::exit(1);
    }

    let workflow = match load_workflow(&args.workflow) {
        Ok(wf) => wf,
        Err(e) => {
            println!("FAIL prompty steps");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("name:        {}", workflow.name);
    println!("description: {}", workflow.description);

    if workflow.is_empty() {
        println!("(no steps)");
        return;
    }

    let rows: Vec<StepRow> = workflow
        .steps()
        .iter()
        .map(|s| StepRow {
            id: s.id.to_string(),
            action: s.action.label(),
            target: s.target.clone(),
            value: s.value.clone(),
            wait_ms: if s.action == StepAction::Wait { s.duration_ms } else { s.delay_after_ms },
        })
        .collect();
    println!("{}", Table::new(rows));
    println!("-- {} steps --", workflow.len());
}
