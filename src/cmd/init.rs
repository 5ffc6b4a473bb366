//! Init command: write a default embed.toml.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::diagnostic::Diagnostic;
use crate::ui;
use crate::write::{WriteOp, write_file};
use std::path::{Path, PathBuf};

/// Create the config file (in the current directory unless `-C` names one)
pub fn init_project(path: Option<&Path>, force: bool) -> anyhow::Result<Vec<Diagnostic>> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use -f to overwrite)",
            config_path.display()
        );
    }

    write_file(&config_path, Config::default_toml(), WriteOp::Execute)?;
    ui::created_path(&config_path);
    Ok(vec![])
}
