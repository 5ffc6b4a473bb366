//! CLI output formatting with colors.
//!
//! Provides consistent, colorized output for all CLI commands.
//! Colors auto-disable when output is not a TTY. Verbose messages are
//! dropped unless `-v` was given.

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable verbose output for the rest of the process
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Check if stderr supports colors (TTY detection)
fn use_colors() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Check if stdout supports colors
pub fn stdout_supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

// =============================================================================
// Color Helpers
// =============================================================================

/// Format a success message (green checkmark prefix)
pub fn success(msg: impl Display) {
    if use_colors() {
        eprintln!("{} {}", "✓".green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Format a verbose message (dimmed, only with -v)
pub fn verbose(msg: impl Display) {
    if !is_verbose() {
        return;
    }
    if use_colors() {
        eprintln!("{}", msg.bright_black());
    } else {
        eprintln!("{}", msg);
    }
}

/// Format a file path (cyan)
pub fn path_str(p: &Path) -> String {
    if use_colors() {
        format!("{}", p.display().cyan())
    } else {
        format!("{}", p.display())
    }
}

/// Format a created item message
pub fn created_path(path: &Path) {
    if use_colors() {
        eprintln!("{}: {}", "Created".green(), path.display().cyan());
    } else {
        eprintln!("Created: {}", path.display());
    }
}

/// Announce the inputs that made the output stale (verbose)
pub fn embedding_required(triggers: &[String]) {
    verbose("Embedding required due to the following files:");
    for trigger in triggers {
        verbose(format!("- \"{trigger}\""));
    }
}

/// Report that nothing changed since the last generation (verbose)
pub fn no_embedding_required() {
    verbose("No embedding required.");
}

/// Format a generated file message
pub fn generated(path: &Path, count: usize) {
    if use_colors() {
        eprintln!(
            "{} Generated {} with {} embedded definition(s)",
            "✓".green(),
            path.display().cyan(),
            count.to_string().cyan().bold()
        );
    } else {
        eprintln!(
            "✓ Generated {} with {} embedded definition(s)",
            path.display(),
            count
        );
    }
}

/// Print the would-be content of a file instead of writing it
pub fn dry_run_file_preview(path: &Path, content: &str) {
    if use_colors() {
        eprintln!("{} {}", "Would write:".yellow(), path.display().cyan());
    } else {
        eprintln!("Would write: {}", path.display());
    }
    print!("{content}");
}

// =============================================================================
// Diagnostic Formatting
// =============================================================================

use crate::diagnostic::{Diagnostic, DiagnosticLevel};

/// Format a diagnostic message
pub fn diagnostic(diag: &Diagnostic) {
    if use_colors() {
        let level_str = match diag.level {
            DiagnosticLevel::Error => "error".red().bold().to_string(),
            DiagnosticLevel::Warning => "warning".yellow().bold().to_string(),
        };
        eprintln!(
            "{}[{}]: {} ({})",
            level_str,
            diag.code.code().bright_black(),
            diag.message,
            diag.file.cyan()
        );
    } else {
        eprintln!("{}", diag);
    }
}
