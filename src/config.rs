//! Render configuration

use crate::encoding::EncoderOptions;
use std::env;

/// Environment variable enabling the debug envelope
pub const DEBUG_ENV_VAR: &str = "RJS_DEBUG";

/// Options for rendering a page update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap output in a try/catch that alerts the error and the source
    pub debug: bool,
    /// JSON encoder options
    pub encoder: EncoderOptions,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the process environment
    pub fn from_env() -> Self {
        let debug = env::var(DEBUG_ENV_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self::default().with_debug(debug)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_encoder(mut self, encoder: EncoderOptions) -> Self {
        self.encoder = encoder;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert!(!config.debug);
        assert!(config.encoder.escape_html_entities);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new().with_debug(true).with_encoder(EncoderOptions {
            escape_html_entities: false,
        });
        assert!(config.debug);
        assert!(!config.encoder.escape_html_entities);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("off"));
    }
}
