//! Diagnostic codes and error reporting.

use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// Diagnostic error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    // Header errors (E01xx)
    E0101HeaderNotFound,
    E0102HeaderUnreadable,

    // Macro errors (E02xx)
    E0201UnknownEscapeMode,

    // Embedded file errors (E03xx)
    E0301EmbeddedFileNotFound,
    E0302EmbeddedFileUnreadable,

    // Output errors (E04xx)
    E0401OutputWriteFailed,

    // Staleness (E05xx)
    E0501OutputStale,

    // Warnings (W01xx)
    W0101NoEmbeddingRequests,
}

impl DiagnosticCode {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::W0101NoEmbeddingRequests => DiagnosticLevel::Warning,
            _ => DiagnosticLevel::Error,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::E0101HeaderNotFound => "E0101",
            Self::E0102HeaderUnreadable => "E0102",
            Self::E0201UnknownEscapeMode => "E0201",
            Self::E0301EmbeddedFileNotFound => "E0301",
            Self::E0302EmbeddedFileUnreadable => "E0302",
            Self::E0401OutputWriteFailed => "E0401",
            Self::E0501OutputStale => "E0501",
            Self::W0101NoEmbeddingRequests => "W0101",
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub file: String,
    pub level: DiagnosticLevel,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            level: code.level(),
            code,
            message: message.into(),
            file: file.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self.level {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
        };
        write!(
            f,
            "{}[{}]: {} ({})",
            level_str,
            self.code.code(),
            self.message,
            self.file
        )
    }
}

impl std::error::Error for Diagnostic {}
