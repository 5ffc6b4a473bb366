//! Literal escaping and generation of the definitions document.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::model::{EmbedRequest, EscapeMode};
use std::fmt::Write as _;
use std::io;

/// Quoted string literal with `"`, `\`, newline and tab escaped.
///
/// Line endings are normalized to `\n` before escaping. Other control
/// characters are copied as they are.
pub fn escape_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut literal = String::with_capacity(normalized.len() + 2);
    literal.push('"');
    for c in normalized.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

/// Brace list of hex byte literals, e.g. `{0x0, 0xff, 0x10}`
pub fn escape_binary(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() * 6 + 2);
    literal.push('{');
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            literal.push_str(", ");
        }
        let _ = write!(literal, "{byte:#x}");
    }
    literal.push('}');
    literal
}

/// Decimal byte count
pub fn escape_size(bytes: &[u8]) -> String {
    bytes.len().to_string()
}

/// Read the referenced file and escape it according to its mode
fn escaped_content(request: &EmbedRequest) -> io::Result<String> {
    let bytes = std::fs::read(&request.source_path)?;
    Ok(match request.escape_mode {
        EscapeMode::Text => {
            let text = String::from_utf8(bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            escape_text(&text)
        }
        EscapeMode::Binary => escape_binary(&bytes),
        EscapeMode::Size => escape_size(&bytes),
    })
}

fn read_failure(request: &EmbedRequest, header: &str, err: &io::Error) -> Diagnostic {
    if err.kind() == io::ErrorKind::NotFound {
        Diagnostic::new(
            DiagnosticCode::E0301EmbeddedFileNotFound,
            format!(
                "Could not find \"{}\" to embed into `{}` (line {})",
                request.display_path, request.declaration, request.line
            ),
            header,
        )
    } else {
        let how = if request.escape_mode.reads_text() {
            "as text"
        } else {
            "as bytes"
        };
        Diagnostic::new(
            DiagnosticCode::E0302EmbeddedFileUnreadable,
            format!(
                "Could not read \"{}\" {how} to embed into `{}` (line {}): {err}",
                request.display_path, request.declaration, request.line
            ),
            header,
        )
    }
}

/// Comment and definition statement for one request
pub fn render_definition(request: &EmbedRequest, header: &str) -> Result<String, Diagnostic> {
    let literal = escaped_content(request).map_err(|e| read_failure(request, header, &e))?;
    Ok(format!(
        "/* {} of \"{}\". */\n{} = {};",
        request.escape_mode.comment_prefix(),
        request.display_path,
        request.declaration,
        literal
    ))
}

/// Assemble the whole generated document.
///
/// Fails on the first request whose file cannot be read; nothing is
/// produced in that case.
pub fn generate_document(
    requests: &[EmbedRequest],
    header: &str,
    config_file: &str,
    generator: &str,
) -> Result<String, Diagnostic> {
    let mut blocks = Vec::with_capacity(requests.len() + 1);
    blocks.push(format!(
        "/* This file may be overwritten or removed by {generator}.\n \
         * Do not modify, see \"{header}\" or \"{config_file}\" instead. */"
    ));
    for request in requests {
        blocks.push(render_definition(request, header)?);
    }

    let mut document = blocks.join("\n\n");
    document.push('\n');
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn request(dir: &Path, name: &str, mode: EscapeMode, declaration: &str) -> EmbedRequest {
        EmbedRequest {
            source_path: dir.join(name),
            display_path: format!("src/{name}"),
            escape_mode: mode,
            declaration: declaration.to_string(),
            line: 1,
        }
    }

    #[test]
    fn text_escapes_quote_backslash_newline_tab() {
        assert_eq!(escape_text("a\"b\\c\n\t"), r#""a\"b\\c\n\t""#);
    }

    #[test]
    fn text_passes_other_characters_through() {
        assert_eq!(escape_text("é\u{7}x'"), "\"é\u{7}x'\"");
        assert_eq!(escape_text(""), "\"\"");
    }

    #[test]
    fn text_normalizes_line_endings() {
        assert_eq!(escape_text("a\r\nb\rc"), r#""a\nb\nc""#);
    }

    #[test]
    fn binary_keeps_zero_bytes_and_order() {
        assert_eq!(escape_binary(&[0x00, 0xFF, 0x10]), "{0x0, 0xff, 0x10}");
        assert_eq!(escape_binary(&[7, 7]), "{0x7, 0x7}");
        assert_eq!(escape_binary(&[]), "{}");
    }

    #[test]
    fn size_counts_bytes_not_chars() {
        assert_eq!(escape_size("é".as_bytes()), "2");
        assert_eq!(escape_size(&[]), "0");
    }

    #[test]
    fn document_layout() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hello.txt"), "hi\n").unwrap();
        fs::write(dir.path().join("blob.bin"), [0u8, 255, 16]).unwrap();

        let requests = [
            request(dir.path(), "hello.txt", EscapeMode::Text, "char const g_hello[]"),
            request(dir.path(), "blob.bin", EscapeMode::Binary, "unsigned char const g_blob[]"),
            request(dir.path(), "blob.bin", EscapeMode::Size, "unsigned int const g_blob_size"),
        ];
        let document =
            generate_document(&requests, "src/embedded.h", "embed.toml", "embedgen").unwrap();

        let expected = concat!(
            "/* This file may be overwritten or removed by embedgen.\n",
            " * Do not modify, see \"src/embedded.h\" or \"embed.toml\" instead. */\n",
            "\n",
            "/* Content of \"src/hello.txt\". */\n",
            "char const g_hello[] = \"hi\\n\";\n",
            "\n",
            "/* Content of \"src/blob.bin\". */\n",
            "unsigned char const g_blob[] = {0x0, 0xff, 0x10};\n",
            "\n",
            "/* Size in bytes of \"src/blob.bin\". */\n",
            "unsigned int const g_blob_size = 3;\n",
        );
        assert_eq!(document, expected);
    }

    #[test]
    fn document_without_requests_is_banner_only() {
        let document = generate_document(&[], "src/embedded.h", "assets.toml", "embedgen").unwrap();
        assert!(document.starts_with("/* This file may be overwritten"));
        assert!(document.contains("see \"src/embedded.h\" or \"assets.toml\" instead"));
        assert!(document.ends_with("instead. */\n"));
    }

    #[test]
    fn missing_file_names_file_header_and_declaration() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("present.txt"), "x").unwrap();
        let requests = [
            request(dir.path(), "present.txt", EscapeMode::Text, "char const a[]"),
            request(dir.path(), "absent.txt", EscapeMode::Size, "unsigned b"),
        ];

        let diag =
            generate_document(&requests, "src/embedded.h", "embed.toml", "embedgen").unwrap_err();
        assert_eq!(diag.code, DiagnosticCode::E0301EmbeddedFileNotFound);
        assert_eq!(diag.file, "src/embedded.h");
        assert!(diag.message.contains("src/absent.txt"));
        assert!(diag.message.contains("unsigned b"));
    }

    #[test]
    fn invalid_utf8_in_text_mode_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xffu8, 0xfe]).unwrap();
        let req = request(dir.path(), "bad.txt", EscapeMode::Text, "char const bad[]");

        let diag = render_definition(&req, "src/embedded.h").unwrap_err();
        assert_eq!(diag.code, DiagnosticCode::E0302EmbeddedFileUnreadable);

        let as_bytes = EmbedRequest {
            escape_mode: EscapeMode::Binary,
            ..req
        };
        assert!(render_definition(&as_bytes, "src/embedded.h").is_ok());
    }
}
