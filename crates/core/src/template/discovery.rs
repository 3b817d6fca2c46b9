//! Discovery of `.prompty` template files under a templates directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// A discovered template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Relative path without the `.prompty` extension, `/`-separated.
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walk `root` and collect every `.prompty` file, sorted by logical name.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        if !entry.file_type().is_file() || !is_template_file(entry.path()) {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        templates.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: entry.path().to_path_buf(),
        });
    }

    templates.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    debug!(count = templates.len(), root = %root.display(), "discovered templates");
    Ok(templates)
}

fn is_template_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("prompty")
}

fn logical_name_from_relative(rel: &Path) -> String {
    let no_ext = rel.with_extension("");
    no_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
