//! Embedding macro scanning.
//!
//! Finds `EMBEDDED("path", MODE) declaration;` occurrences in the header text.
//! Matching is lexical: anything that does not fit the pattern (the macro's own
//! `#define`, a call without a declaration, a quoted or numeric mode) is ignored.
//! A mode that fits the pattern but is not a known mode is fatal.

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::model::{EmbedRequest, EscapeMode};
use regex::Regex;

/// Compiled matcher for one macro identifier
#[derive(Debug, Clone)]
pub struct MacroScanner {
    /// Capture groups: 1 = path literal, 2 = mode token, 3 = declaration
    pattern: Regex,
}

impl MacroScanner {
    pub fn new(macro_name: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r#"{}\s*\(\s*"([^"]+)"\s*,\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)\s*([^;]*[^\s;])\s*;"#,
            regex::escape(macro_name)
        ))?;
        Ok(Self { pattern })
    }

    /// Extract every embedding request from the header text, in order of appearance
    pub fn scan(
        &self,
        config: &Config,
        header_text: &str,
    ) -> Result<Vec<EmbedRequest>, Diagnostic> {
        let mut requests = Vec::new();
        for caps in self.pattern.captures_iter(header_text) {
            let (Some(whole), Some(path), Some(mode), Some(declaration)) =
                (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let line = line_of(header_text, whole.start());
            let declaration = declaration.as_str().trim().to_string();

            let escape_mode: EscapeMode = mode.as_str().parse().map_err(|e| {
                Diagnostic::new(
                    DiagnosticCode::E0201UnknownEscapeMode,
                    format!("{e} in `{declaration}` at line {line}"),
                    config.header_display(),
                )
            })?;

            let relative = config.paths.source_root.join(path.as_str());
            requests.push(EmbedRequest {
                source_path: config.resolve(&relative),
                display_path: relative.display().to_string(),
                escape_mode,
                declaration,
                line,
            });
        }

        Ok(requests)
    }
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
