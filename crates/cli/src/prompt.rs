//! Interactive prompts for collecting variable values.
//!
//! Each declared variable is offered once: selects as a fuzzy pick over
//! their options, everything else as a text input with the declared default
//! pre-filled. Batch mode (or a non-tty stdin) skips prompting and keeps the
//! defaults already seeded into the bindings.

use std::collections::HashMap;
use std::io::{self, IsTerminal};

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use prompty_core::template::{Bindings, Template, VarKind, Variable};

#[derive(Debug)]
pub enum PromptError {
    Io(io::Error),
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Fill bindings for every declared variable.
///
/// `provided` values (from `--var` flags) always win and are never prompted
/// for. In batch mode or without a terminal, remaining variables keep their
/// declared defaults.
pub fn collect_variables(
    template: &Template,
    bindings: &mut Bindings,
    provided: &HashMap<String, String>,
    batch_mode: bool,
) -> Result<(), PromptError> {
    for (name, value) in provided {
        bindings.set(name.clone(), value.clone());
    }

    let is_interactive = io::stdin().is_terminal() && !batch_mode;
    if !is_interactive {
        return Ok(());
    }

    for var in &template.variables {
        if provided.contains_key(&var.name) {
            continue;
        }
        let value = prompt_variable(var)?;
        bindings.set(var.name.clone(), value);
    }

    Ok(())
}

fn prompt_variable(var: &Variable) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    if var.kind == VarKind::Select {
        if let Some(ref options) = var.options {
            let picked = FuzzySelect::with_theme(&theme)
                .with_prompt(var.name.as_str())
                .items(options)
                .default(0)
                .interact()
                .map_err(dialoguer_error)?;
            return Ok(options[picked].clone());
        }
    }

    Input::<String>::with_theme(&theme)
        .with_prompt(var.name.as_str())
        .default(var.default_value.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error)
}

fn dialoguer_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse `--var` arguments into a map.
///
/// Expected format: `key=value`.
pub fn parse_var_args(args: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for arg in args {
        if let Some((key, value)) = arg.split_once('=') {
            map.insert(key.to_string(), value.to_string());
        }
    }
    map
}
