//! List command implementation.

use crate::OutputFormat;
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::load::load_requests;
use crate::model::{EmbedRequest, EscapeMode};
use crate::scan::MacroScanner;
use crate::ui::stdout_supports_color;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

/// Check if stdout supports colors (delegates to centralized ui module)
fn use_colors() -> bool {
    stdout_supports_color()
}

/// Create a header cell (bold when colors enabled)
fn header_cell(text: &str) -> Cell {
    if use_colors() {
        Cell::new(text).add_attribute(Attribute::Bold)
    } else {
        Cell::new(text)
    }
}

/// Create a mode cell with a color per mode
fn mode_cell(mode: EscapeMode) -> Cell {
    if use_colors() {
        let color = match mode {
            EscapeMode::Text => Color::Green,
            EscapeMode::Binary => Color::Yellow,
            EscapeMode::Size => Color::Cyan,
        };
        Cell::new(mode.as_ref()).fg(color)
    } else {
        Cell::new(mode.as_ref())
    }
}

/// List the embedding requests declared in the header, without reading the files
pub fn list(config: &Config, output: OutputFormat) -> anyhow::Result<Vec<Diagnostic>> {
    let scanner = MacroScanner::new(&config.embed.macro_name)?;
    let requests = match load_requests(config, &scanner) {
        Ok(requests) => requests,
        Err(diag) => return Ok(vec![diag]),
    };

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&requests)?);
        }
        OutputFormat::Plain => {
            for request in &requests {
                println!("{}", plain_row(request));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(
                    ["Line", "Mode", "Path", "Declaration"]
                        .iter()
                        .map(|h| header_cell(h))
                        .collect::<Vec<_>>(),
                );
            for request in &requests {
                table.add_row(vec![
                    Cell::new(request.line),
                    mode_cell(request.escape_mode),
                    Cell::new(&request.display_path),
                    Cell::new(&request.declaration),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(vec![])
}

/// Tab-separated line, declaration whitespace collapsed to keep one request per line
fn plain_row(request: &EmbedRequest) -> String {
    let declaration = request
        .declaration
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{}\t{}\t{}\t{}",
        request.line,
        request.escape_mode.as_ref(),
        request.display_path,
        declaration
    )
}
