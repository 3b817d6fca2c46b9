use std::path::Path;

use prompty_core::config::{default_config_path, ConfigLoader};
use prompty_core::template::discovery::discover_templates;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL prompty list");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    match discover_templates(&rc.templates_dir) {
        Ok(list) => {
            if list.is_empty() {
                println!("(no templates found)");
                return;
            }
            for t in &list {
                println!("{}", t.logical_name);
            }
            println!("-- {} templates --", list.len());
        }
        Err(e) => {
            println!("FAIL prompty list");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
