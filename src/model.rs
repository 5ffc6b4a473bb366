//! Embedding requests and escape modes.

use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;
use strum::AsRefStr;

/// How a file's bytes are turned into a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EscapeMode {
    /// Quoted string literal
    Text,
    /// Brace-delimited byte array of hex literals
    Binary,
    /// Byte length as a decimal integer literal
    Size,
}

/// A mode token that is an identifier but not one of the known modes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown escape mode `{0}` (expected TEXT, BINARY or SIZE)")]
pub struct UnknownEscapeMode(pub String);

impl FromStr for EscapeMode {
    type Err = UnknownEscapeMode;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "TEXT" => Ok(Self::Text),
            "BINARY" => Ok(Self::Binary),
            "SIZE" => Ok(Self::Size),
            other => Err(UnknownEscapeMode(other.to_string())),
        }
    }
}

impl EscapeMode {
    /// Whether the file is read as decoded text rather than raw bytes
    pub fn reads_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Leading words of the comment above a generated definition
    pub fn comment_prefix(self) -> &'static str {
        match self {
            Self::Text | Self::Binary => "Content",
            Self::Size => "Size in bytes",
        }
    }
}

/// One macro occurrence in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedRequest {
    /// Path used to read the file
    #[serde(skip)]
    pub source_path: PathBuf,
    /// Project-relative path, used in comments and listings
    #[serde(rename = "path")]
    pub display_path: String,
    #[serde(rename = "mode")]
    pub escape_mode: EscapeMode,
    pub declaration: String,
    /// 1-based line of the macro in the header
    pub line: usize,
}
