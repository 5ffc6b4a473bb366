//! Embed command: the scan, detect, generate cycle.

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::generate::generate_document;
use crate::load::load_requests;
use crate::scan::MacroScanner;
use crate::stale;
use crate::ui;
use crate::write::{WriteOp, write_file};

/// Name written into the banner of generated files
pub const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Regenerate the output if the header or any embedded file changed.
///
/// Any failure leaves the previous output untouched.
pub fn handle_embedding(
    config: &Config,
    force: bool,
    op: WriteOp,
) -> anyhow::Result<Vec<Diagnostic>> {
    let scanner = MacroScanner::new(&config.embed.macro_name)?;
    let requests = match load_requests(config, &scanner) {
        Ok(requests) => requests,
        Err(diag) => return Ok(vec![diag]),
    };

    let staleness = stale::check(config, &requests);
    if !staleness.is_stale() {
        if !force && !op.is_preview() {
            return Ok(vec![]);
        }
        ui::verbose("Regenerating anyway.");
    }

    let mut diags = vec![];
    if requests.is_empty() {
        diags.push(Diagnostic::new(
            DiagnosticCode::W0101NoEmbeddingRequests,
            format!(
                "No {}(...) declarations found, generating an empty file",
                config.embed.macro_name
            ),
            config.header_display(),
        ));
    }

    ui::verbose(format!(
        "Generating \"{}\" with the escaped content to embed.",
        config.output_display()
    ));
    let document = match generate_document(
        &requests,
        &config.header_display(),
        config.config_display(),
        GENERATOR,
    ) {
        Ok(document) => document,
        Err(diag) => return Ok(vec![diag]),
    };

    if let Err(e) = write_file(&config.output_path(), &document, op) {
        return Ok(vec![Diagnostic::new(
            DiagnosticCode::E0401OutputWriteFailed,
            format!("{e:#}"),
            config.output_display(),
        )]);
    }

    if !op.is_preview() {
        ui::generated(&config.paths.output, requests.len());
    }
    Ok(diags)
}
