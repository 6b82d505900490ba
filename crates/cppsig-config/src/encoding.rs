//! Declared text encoding of a source file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding of the raw bytes handed to the parser.
///
/// `Utf16` sniffs a byte-order mark and falls back to little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Resolve `Utf16` against the leading bytes of a source file.
    #[must_use]
    pub fn resolve(self, bytes: &[u8]) -> Self {
        match self {
            Self::Utf16 => match bytes {
                [0xFE, 0xFF, ..] => Self::Utf16Be,
                _ => Self::Utf16Le,
            },
            other => other,
        }
    }

    /// Byte-order mark for this encoding.
    #[must_use]
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16 => &[],
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
            Self::Utf16Le => "utf16le",
            Self::Utf16Be => "utf16be",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_resolves_from_bom() {
        assert_eq!(Encoding::Utf16.resolve(&[0xFE, 0xFF, 0, b'a']), Encoding::Utf16Be);
        assert_eq!(Encoding::Utf16.resolve(&[0xFF, 0xFE, b'a', 0]), Encoding::Utf16Le);
        assert_eq!(Encoding::Utf16.resolve(b"a\0"), Encoding::Utf16Le);
    }

    #[test]
    fn explicit_encodings_resolve_to_themselves() {
        assert_eq!(Encoding::Utf8.resolve(&[0xFE, 0xFF]), Encoding::Utf8);
        assert_eq!(Encoding::Utf16Be.resolve(&[0xFF, 0xFE]), Encoding::Utf16Be);
    }

    #[test]
    fn serializes_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            encoding: Encoding,
        }
        let holder: Holder = figment::Figment::from(figment::providers::Serialized::default(
            "encoding", "utf16le",
        ))
        .extract()
        .expect("encoding should deserialize");
        assert_eq!(holder.encoding, Encoding::Utf16Le);
        assert_eq!(Encoding::Utf16Be.to_string(), "utf16be");
    }
}
