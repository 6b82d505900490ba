//! Parser error types for cppsig-parser.

use cppsig_config::Encoding;

/// Errors that can occur while building a tree or reconstructing one fact.
///
/// Node-level variants carry the raw text of the node being processed so a
/// dropped item can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("Missing capture `{capture}`. While parsing: \"{text}\"")]
    MissingCapture { capture: &'static str, text: String },

    #[error("Unsupported node kind `{kind}`. While parsing: \"{text}\"")]
    UnexpectedNode { kind: String, text: String },

    #[error("Source is not valid {encoding}. While parsing: \"{text}\"")]
    Decode { encoding: Encoding, text: String },

    #[error("Invalid pattern query: {0}")]
    InvalidQuery(String),

    #[error("Parse failed: {message}")]
    ParseFailed { message: String },
}

impl ParserError {
    /// Raw text of the node this failure concerns, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::MissingCapture { text, .. }
            | Self::UnexpectedNode { text, .. }
            | Self::Decode { text, .. } => Some(text),
            Self::InvalidQuery(_) | Self::ParseFailed { .. } => None,
        }
    }

    /// Replace the carried node text, leaving the failure kind intact.
    #[must_use]
    pub fn retag(self, text: String) -> Self {
        match self {
            Self::MissingCapture { capture, .. } => Self::MissingCapture { capture, text },
            Self::UnexpectedNode { kind, .. } => Self::UnexpectedNode { kind, text },
            Self::Decode { encoding, .. } => Self::Decode { encoding, text },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_offending_text() {
        let error = ParserError::MissingCapture {
            capture: "type",
            text: "int f(".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing capture `type`. While parsing: \"int f(\""
        );
    }

    #[test]
    fn retag_keeps_kind() {
        let error = ParserError::Decode {
            encoding: Encoding::Utf16Le,
            text: "x".to_string(),
        }
        .retag("void f(int x)".to_string());
        assert_eq!(error.text(), Some("void f(int x)"));
        assert!(matches!(error, ParserError::Decode { encoding: Encoding::Utf16Le, .. }));
    }

    #[test]
    fn retag_ignores_textless_variants() {
        let error = ParserError::InvalidQuery("bad".to_string()).retag("ignored".to_string());
        assert_eq!(error, ParserError::InvalidQuery("bad".to_string()));
        assert_eq!(error.text(), None);
    }
}
