use std::path::Path;

use prompty_core::config::{default_config_path, ConfigLoader};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL prompty doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    println!("OK   prompty doctor");
    println!("version:       {}", prompty_core::version());
    println!("profile:       {}", rc.active_profile);
    println!("root:          {}", rc.root.display());
    println!("templates_dir: {}", rc.templates_dir.display());
    println!("workflows_dir: {}", rc.workflows_dir.display());
    println!("log level:     {}", rc.logging.level);
}
