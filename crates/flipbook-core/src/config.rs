//! Book configuration, validated and frozen at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable widget configuration. Every field has a default so adapters can
/// deserialize a partial JSON object; the engine never mutates it after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookConfig {
    /// When true the book has real covers and can show a single terminal
    /// page; when false two synthetic hidden covers pad the sequence.
    #[serde(default)]
    pub can_close: bool,
    /// Enable arrow-key navigation in the bindings layer.
    #[serde(default = "default_arrow_keys")]
    pub arrow_keys: bool,
    /// Page the book opens at. Odd values are rounded down: turns always
    /// target an even-left/right pair.
    #[serde(default)]
    pub initial_active_page: usize,
    /// Arm the decorative callout highlight on the first right-hand page.
    #[serde(default)]
    pub initial_call: bool,
    /// Presentation passthrough for the host element.
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: String,
}

fn default_arrow_keys() -> bool {
    true
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_height() -> String {
    "283px".to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            can_close: false,
            arrow_keys: true,
            initial_active_page: 0,
            initial_call: false,
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Errors produced while reading a configuration blob.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Parse a JSON configuration object. Missing fields take their defaults;
/// anything malformed is a construction-time failure, not a runtime one.
pub fn parse_config_json(s: &str) -> Result<BookConfig, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = parse_config_json("{}").unwrap();
        assert_eq!(cfg, BookConfig::default());
        assert!(cfg.arrow_keys);
        assert_eq!(cfg.height, "283px");
    }

    #[test]
    fn partial_object_overrides_some_fields() {
        let cfg = parse_config_json(r#"{"can_close": true, "initial_active_page": 4}"#).unwrap();
        assert!(cfg.can_close);
        assert_eq!(cfg.initial_active_page, 4);
        assert_eq!(cfg.width, "100%");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config_json("{nope").is_err());
    }
}
