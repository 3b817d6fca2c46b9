use std::path::Path;

use prompty_core::compile::{compile_workflow, workflow_script, Instruction};
use prompty_core::config::ConfigLoader;
use prompty_core::workflow::loader::load_workflow;

use crate::CompileArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &CompileArgs) {
    if let Err(e) = ConfigLoader::load_or_default(config, profile) {
        println!("FAIL prompty compile");
        println!("{e}");
        std::process::exit(1);
    }

    let workflow = match load_workflow(&args.workflow) {
        Ok(wf) => wf,
        Err(e) => {
            println!("FAIL prompty compile");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        let commands: Vec<String> =
            compile_workflow(&workflow).iter().map(Instruction::to_string).collect();
        match serde_json::to_string_pretty(&commands) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("FAIL prompty compile");
                println!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", workflow_script(&workflow));
    }
}
