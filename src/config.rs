//! Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up from the current directory upwards
pub const CONFIG_FILE_NAME: &str = "embed.toml";

/// Project configuration (embed.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub embed: EmbedConfig,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,
    /// File name of the loaded config, empty when running on defaults
    #[serde(skip)]
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root that paths inside embedding macros start from (src/)
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,
    /// Header scanned for embedding macros (src/embedded.h)
    #[serde(default = "default_header")]
    pub header: PathBuf,
    /// Generated definitions (src/embedded.c)
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_header() -> PathBuf {
    PathBuf::from("src/embedded.h")
}

fn default_output() -> PathBuf {
    PathBuf::from("src/embedded.c")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            header: default_header(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Identifier of the declaration macro
    #[serde(default = "default_macro_name")]
    pub macro_name: String,
}

fn default_macro_name() -> String {
    "EMBEDDED".to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            macro_name: default_macro_name(),
        }
    }
}

impl Config {
    /// Load config from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(PathBuf::from).or_else(Self::find_config);

        let mut config = match &config_path {
            Some(config_path) if config_path.exists() => {
                let content = std::fs::read_to_string(config_path).with_context(|| {
                    format!("Failed to read config: {}", config_path.display())
                })?;
                toml::from_str::<Config>(&content).with_context(|| {
                    format!("Failed to parse config: {}", config_path.display())
                })?
            }
            Some(config_path) if path.is_some() => {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            _ => Config::default(),
        };

        config.root = match config_path.as_deref().and_then(Path::parent) {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        config.file_name = config_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Find config file by walking up directory tree
    fn find_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let name = &self.embed.macro_name;
        let is_identifier = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !is_identifier {
            anyhow::bail!("embed.macro_name must be an identifier, got '{name}'");
        }
        Ok(())
    }

    /// Resolve a configured path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn header_path(&self) -> PathBuf {
        self.resolve(&self.paths.header)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    /// Header path as written in the config, for diagnostics and the banner
    pub fn header_display(&self) -> String {
        self.paths.header.display().to_string()
    }

    pub fn output_display(&self) -> String {
        self.paths.output.display().to_string()
    }

    /// Config file as seen from the project root, for the banner
    pub fn config_display(&self) -> &str {
        if self.file_name.is_empty() {
            CONFIG_FILE_NAME
        } else {
            &self.file_name
        }
    }

    /// Generate default config TOML
    pub fn default_toml() -> &'static str {
        r#"[paths]
# Paths inside EMBEDDED(...) macros are relative to this directory
source_root = "src"
# Header scanned for EMBEDDED(...) declarations
header = "src/embedded.h"
# Generated file holding the definitions (overwritten on every regeneration)
output = "src/embedded.c"

[embed]
# Identifier of the declaration macro
macro_name = "EMBEDDED"
"#
    }
}
