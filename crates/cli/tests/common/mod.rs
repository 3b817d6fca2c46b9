use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Write a minimal config under `<tmp>/xdg` and return (config path, root).
pub fn setup_config(tmp: &Path) -> (PathBuf, PathBuf) {
    let root = tmp.join("prompty-root");
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::create_dir_all(root.join("workflows")).unwrap();

    let cfg_dir = tmp.join("xdg").join("prompty");
    let cfg_path = cfg_dir.join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
root = "{root}"
templates_dir = "{{{{root}}}}/templates"
workflows_dir = "{{{{root}}}}/workflows"
"#,
        root = root.display(),
    );
    write(&cfg_path, &toml);

    (cfg_path, root)
}

pub fn prompty_cmd(tmp: &Path, cfg_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("prompty"));
    cmd.env("XDG_CONFIG_HOME", tmp.join("xdg"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "--profile", "default"]);
    cmd
}
