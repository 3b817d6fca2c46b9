use std::path::Path;

use prompty_core::config::ConfigLoader;
use prompty_core::template::repository::TemplateRepository;
use tabled::{Table, Tabled};

use crate::ShowArgs;

#[derive(Tabled)]
struct VarRow {
    #[tabled(rename = "variable")]
    name: String,
    kind: &'static str,
    default: String,
    options: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL prompty show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let repo = match TemplateRepository::new(&rc.templates_dir) {
        Ok(repo) => repo,
        Err(e) => {
            println!("FAIL prompty show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let loaded = match repo.get_by_name(&args.template) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("FAIL prompty show");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let tpl = &loaded.template;

    if args.json {
        match serde_json::to_string_pretty(tpl) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("FAIL prompty show");
                println!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("name:        {}", tpl.name);
    println!("description: {}", tpl.description);
    println!("tags:        {}", tpl.tags.join(", "));
    println!("file:        {}", loaded.path.display());

    if tpl.variables.is_empty() {
        println!("(no variables)");
    } else {
        let rows: Vec<VarRow> = tpl
            .variables
            .iter()
            .map(|v| VarRow {
                name: v.name.clone(),
                kind: v.kind.label(),
                default: v.default_value.clone(),
                options: v.options.as_ref().map(|o| o.join("|")).unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !tpl.commands.is_empty() {
        println!("embedded commands: {}", tpl.commands.len());
    }
}
