mod cmd;
mod logging;
mod prompt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prompty_core::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "prompty", version, about = "Template directives and MCP workflow compilation")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List logical template names discovered under templates_dir
    List,

    /// Show a template's metadata and declared variables
    Show(ShowArgs),

    /// Render a template with variable substitution
    Render(RenderArgs),

    /// List a workflow file's steps in order
    Steps(StepsArgs),

    /// Compile a workflow file into MCP commands
    Compile(CompileArgs),

    /// Export a workflow file as a .prompty document
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Logical template name (e.g. "image-gen" or "video/sora")
    #[arg(long)]
    pub template: String,

    /// Emit the parsed template as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Logical template name
    #[arg(long)]
    pub template: String,

    /// Variable value as key=value (repeatable)
    #[arg(long = "var")]
    pub vars: Vec<String>,

    /// Never prompt; use declared defaults for unset variables
    #[arg(long)]
    pub batch: bool,

    /// Write the rendered text to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StepsArgs {
    /// Path to a workflow YAML file
    #[arg(long)]
    pub workflow: PathBuf,
}

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Path to a workflow YAML file
    #[arg(long)]
    pub workflow: PathBuf,

    /// Emit the compiled commands as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to a workflow YAML file
    #[arg(long)]
    pub workflow: PathBuf,

    /// Write the .prompty document to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Config errors are reported by the command itself; logging just falls
    // back to defaults when the config cannot be loaded.
    if let Ok(rc) = ConfigLoader::load_or_default(cli.config.as_deref(), cli.profile.as_deref()) {
        logging::init(&rc);
    }

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::List => cmd::list::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Show(args) => {
            cmd::show::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Render(args) => {
            cmd::render::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Steps(args) => {
            cmd::steps::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Compile(args) => {
            cmd::compile::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Export(args) => {
            cmd::export::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
    }
}
