use std::fs;
use std::path::Path;

use prompty_core::config::ConfigLoader;
use prompty_core::export::serialize;
use prompty_core::workflow::loader::load_workflow;

use crate::ExportArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ExportArgs) {
    if let Err(e) = ConfigLoader::load_or_default(config, profile) {
        println!("FAIL prompty export");
        println!("{e}");
        std::process::exit(1);
    }

    let workflow = match load_workflow(&args.workflow) {
        Ok(wf) => wf,
        Err(e) => {
            println!("FAIL prompty export");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let document = serialize(&workflow);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Err(e) = fs::write(path, &document) {
                println!("FAIL prompty export");
                println!("failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("OK   prompty export");
            println!("workflow: {}", workflow.name);
            println!("output:   {}", path.display());
        }
        None => print!("{document}"),
    }
}
