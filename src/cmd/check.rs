//! Check command: report staleness without writing.

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::load::load_requests;
use crate::scan::MacroScanner;
use crate::stale;
use crate::ui;

/// Fail when the generated output no longer matches its inputs
pub fn check_output(config: &Config) -> anyhow::Result<Vec<Diagnostic>> {
    let scanner = MacroScanner::new(&config.embed.macro_name)?;
    let requests = match load_requests(config, &scanner) {
        Ok(requests) => requests,
        Err(diag) => return Ok(vec![diag]),
    };

    let staleness = stale::check(config, &requests);
    if staleness.is_stale() {
        return Ok(vec![Diagnostic::new(
            DiagnosticCode::E0501OutputStale,
            format!(
                "Generated output is out of date, changed: {}",
                staleness.triggers.join(", ")
            ),
            config.output_display(),
        )]);
    }

    ui::success(format!(
        "{} is up to date ({} embedded definition(s))",
        ui::path_str(&config.paths.output),
        requests.len()
    ));
    Ok(vec![])
}
