//! Extraction settings for the C/C++ parser.

use serde::{Deserialize, Serialize};

use crate::Encoding;

const fn default_keep_source_text() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Encoding assumed for source files when the caller does not declare one.
    #[serde(default)]
    pub encoding: Encoding,

    /// Whether function records carry their body-stripped signature text.
    #[serde(default = "default_keep_source_text")]
    pub keep_source_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            keep_source_text: default_keep_source_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ParserConfig::default();
        assert_eq!(config.encoding, Encoding::Utf8);
        assert!(config.keep_source_text);
    }
}
