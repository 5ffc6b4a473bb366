//! Header loading and request discovery.

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::model::EmbedRequest;
use crate::scan::MacroScanner;

/// Read the header text, failing if it does not exist
pub fn load_header(config: &Config) -> Result<String, Diagnostic> {
    let path = config.header_path();
    if !path.is_file() {
        return Err(Diagnostic::new(
            DiagnosticCode::E0101HeaderNotFound,
            "Header file not found, nothing can be embedded",
            config.header_display(),
        ));
    }

    std::fs::read_to_string(&path).map_err(|e| {
        Diagnostic::new(
            DiagnosticCode::E0102HeaderUnreadable,
            format!("Failed to read header: {e}"),
            config.header_display(),
        )
    })
}

/// Load the header and extract its embedding requests
pub fn load_requests(
    config: &Config,
    scanner: &MacroScanner,
) -> Result<Vec<EmbedRequest>, Diagnostic> {
    let text = load_header(config)?;
    scanner.scan(config, &text)
}
