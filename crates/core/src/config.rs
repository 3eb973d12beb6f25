//! Configuration system for the decoder.
//!
//! This module defines the configuration structures used by the report
//! renderer and the interactive front end. It provides:
//! 1. **Defaults:** Baseline values used when a key is absent.
//! 2. **Structures:** General, report, and prompt settings.
//! 3. **Loading:** JSON from a string or a file.
//!
//! Every key is optional; `Config::default()` is a complete configuration.

use std::path::Path;

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Prompt shown by the interactive loop.
    pub const PROMPT: &str = "word (decimal, 0b, 0o, 0x) | empty to quit: ";

    /// Whether the text report prints the 32-bit binary string.
    pub const SHOW_BITS: bool = true;

    /// Whether register, opcode, and function fields are annotated with names.
    pub const ANNOTATE_FIELDS: bool = true;
}

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Output style of the report renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReportStyle {
    /// Human-readable, one field or signal per line.
    #[default]
    Text,
    /// One JSON object per decoded word.
    #[serde(alias = "JSON", alias = "json")]
    Json,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsdec_core::config::{Config, ReportStyle};
///
/// let json = r#"{
///     "general": { "trace_decodes": true },
///     "report": { "style": "Json", "show_bits": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_decodes);
/// assert_eq!(config.report.style, ReportStyle::Json);
/// assert!(!config.report.show_bits);
/// assert!(config.report.annotate_fields);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Interactive prompt settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` if the JSON is malformed or has wrong types.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every decode (decode failures are always logged at debug)
    #[serde(default)]
    pub trace_decodes: bool,
}

/// Report rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Text or JSON output
    #[serde(default)]
    pub style: ReportStyle,

    /// Print the word as a 32-character binary string (text style only)
    #[serde(default = "ReportConfig::default_show_bits")]
    pub show_bits: bool,

    /// Append register / operation names to field values (text style only)
    #[serde(default = "ReportConfig::default_annotate_fields")]
    pub annotate_fields: bool,
}

impl ReportConfig {
    /// Returns the default binary-string setting.
    const fn default_show_bits() -> bool {
        defaults::SHOW_BITS
    }

    /// Returns the default field annotation setting.
    const fn default_annotate_fields() -> bool {
        defaults::ANNOTATE_FIELDS
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::Text,
            show_bits: defaults::SHOW_BITS,
            annotate_fields: defaults::ANNOTATE_FIELDS,
        }
    }
}

/// Interactive prompt settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    /// Text printed before each read
    #[serde(default = "PromptConfig::default_text")]
    pub text: String,
}

impl PromptConfig {
    /// Returns the default prompt text.
    fn default_text() -> String {
        defaults::PROMPT.to_string()
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: defaults::PROMPT.to_string(),
        }
    }
}
