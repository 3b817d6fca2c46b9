//! Loading workflow documents from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::model::Workflow;
use super::types::WorkflowSpec;

#[derive(Debug, Error)]
pub enum WorkflowLoadError {
    #[error("failed to read workflow file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workflow file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read a workflow YAML file and build the runtime model with fresh ids.
pub fn load_workflow(path: &Path) -> Result<Workflow, WorkflowLoadError> {
    let content = fs::read_to_string(path)
        .map_err(|e| WorkflowLoadError::Io { path: path.to_path_buf(), source: e })?;

    let spec: WorkflowSpec = serde_yaml::from_str(&content)
        .map_err(|e| WorkflowLoadError::Parse { path: path.to_path_buf(), source: e })?;

    let workflow = Workflow::from_spec(spec);
    debug!(name = %workflow.name, steps = workflow.len(), "loaded workflow");
    Ok(workflow)
}
