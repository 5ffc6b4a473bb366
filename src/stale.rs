//! Staleness detection for the generated output.
//!
//! The output is regenerated when it is missing, or when the header or any
//! referenced file has a modification time strictly after the output's.
//! Referenced files that do not exist are left for the generator to report,
//! so they never trigger (or block) anything here.

use crate::config::Config;
use crate::model::EmbedRequest;
use crate::ui;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// An input whose timestamp is compared against the output
#[derive(Debug, Clone, Copy)]
pub struct TrackedInput<'a> {
    pub path: &'a Path,
    pub display: &'a str,
}

/// Inputs that are newer than the generated output, in discovery order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Staleness {
    pub triggers: Vec<String>,
}

impl Staleness {
    pub fn is_stale(&self) -> bool {
        !self.triggers.is_empty()
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Compare the header and referenced inputs against the output's mtime
pub fn detect<'a>(
    output: &Path,
    header: TrackedInput<'a>,
    referenced: impl IntoIterator<Item = TrackedInput<'a>>,
) -> Staleness {
    // Without an output every input is newer, whatever its timestamp
    let baseline = modified(output);
    let newer = |mtime: SystemTime| baseline.is_none_or(|b| mtime > b);
    let mut staleness = Staleness::default();

    // An unreadable header timestamp cannot prove the output current
    if modified(header.path).is_none_or(newer) {
        staleness.triggers.push(header.display.to_string());
    }

    for input in referenced {
        let Some(mtime) = modified(input.path) else {
            ui::verbose(format!(
                "Not checking missing file \"{}\" for changes",
                input.display
            ));
            continue;
        };
        if newer(mtime) && !staleness.triggers.iter().any(|t| t == input.display) {
            staleness.triggers.push(input.display.to_string());
        }
    }

    staleness
}

/// Staleness of the configured output with respect to the header and requests
pub fn check(config: &Config, requests: &[EmbedRequest]) -> Staleness {
    let header_path = config.header_path();
    let header_display = config.header_display();
    let staleness = detect(
        &config.output_path(),
        TrackedInput {
            path: &header_path,
            display: &header_display,
        },
        requests.iter().map(|r| TrackedInput {
            path: &r.source_path,
            display: &r.display_path,
        }),
    );

    if staleness.is_stale() {
        ui::embedding_required(&staleness.triggers);
    } else {
        ui::no_embedding_required();
    }
    staleness
}
