use std::fs;
use std::path::Path;

use prompty_core::config::ConfigLoader;
use prompty_core::template::bindings::builtin_bindings;
use prompty_core::template::repository::TemplateRepository;
use prompty_core::template::{engine, Bindings};
use tracing::debug;

use crate::prompt::{collect_variables, parse_var_args};
use crate::RenderArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RenderArgs) {
    debug!("Rendering template {}", args.template);
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL prompty render");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match TemplateRepository::new(&rc.templates_dir)
        .map_err(|e| e.to_string())
        .and_then(|repo| repo.get_by_name(&args.template).map_err(|e| e.to_string()))
    {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("FAIL prompty render");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let tpl = &loaded.template;

    // Built-ins first, declared defaults second, user input last.
    let mut bindings = builtin_bindings();
    let seeded = Bindings::from_template(tpl);
    for (name, value) in seeded.iter() {
        // An empty declared default must not shadow a built-in like {{date}}.
        if value.is_empty() && bindings.contains(name) {
            continue;
        }
        bindings.set(name, value);
    }

    let provided = parse_var_args(&args.vars);
    if let Err(e) = collect_variables(tpl, &mut bindings, &provided, args.batch) {
        println!("FAIL prompty render");
        println!("{e}");
        std::process::exit(1);
    }

    let rendered = engine::render(&tpl.body, &bindings);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Err(e) = fs::write(path, &rendered) {
                println!("FAIL prompty render");
                println!("failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("OK   prompty render");
            println!("template: {}", loaded.logical_name);
            println!("output:   {}", path.display());
        }
        None => print!("{rendered}"),
    }
}
