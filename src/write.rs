//! File writing with dry-run support.

use crate::ui;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Whether a command writes to disk or only shows what it would write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Execute,
    Preview,
}

impl WriteOp {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::Preview } else { Self::Execute }
    }

    pub fn is_preview(self) -> bool {
        self == Self::Preview
    }
}

/// Replace `path` with `content` in one step.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it, so readers see either the old or the new file. Missing
/// parent directories are created. A replaced file keeps its permissions, a
/// new one gets the same mode a plain create would give it.
pub fn write_file(path: &Path, content: &str, op: WriteOp) -> Result<()> {
    if op.is_preview() {
        ui::dry_run_file_preview(path, content);
        return Ok(());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Filtered through the umask on creation
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;
    }
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
