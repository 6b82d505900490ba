//! Raw source bytes handed to tree-sitter, plus per-node decoding.

use std::ops::Range;

use cppsig_config::Encoding;

use crate::error::ParserError;

/// Source text as tree-sitter sees it.
///
/// UTF-8 input is kept byte for byte so invalid sequences only fail the nodes
/// that contain them. UTF-16 input is transcoded to UTF-8 up front; unpaired
/// surrogates become U+FFFD and mark the source as lossy.
#[derive(Debug)]
pub(crate) struct SourceText {
    bytes: Vec<u8>,
    encoding: Encoding,
    lossy: bool,
}

impl SourceText {
    pub(crate) fn new(contents: &[u8], declared: Encoding) -> Self {
        let encoding = declared.resolve(contents);
        let body = contents.strip_prefix(encoding.bom()).unwrap_or(contents);
        match encoding {
            Encoding::Utf8 => Self {
                bytes: body.to_vec(),
                encoding,
                lossy: false,
            },
            Encoding::Utf16 | Encoding::Utf16Le | Encoding::Utf16Be => {
                let (text, lossy) = transcode_utf16(body, encoding == Encoding::Utf16Be);
                Self {
                    bytes: text.into_bytes(),
                    encoding,
                    lossy,
                }
            }
        }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Strictly decode a byte range of the source.
    pub(crate) fn decode(&self, range: Range<usize>) -> Result<String, ParserError> {
        let slice = self.bytes.get(range).unwrap_or_default();
        match std::str::from_utf8(slice) {
            Ok(text) if !(self.lossy && text.contains(char::REPLACEMENT_CHARACTER)) => {
                Ok(text.to_owned())
            }
            _ => Err(ParserError::Decode {
                encoding: self.encoding,
                text: String::from_utf8_lossy(slice).into_owned(),
            }),
        }
    }

    /// Decode a byte range for diagnostics, never failing.
    pub(crate) fn lossy(&self, range: Range<usize>) -> String {
        let slice = self.bytes.get(range).unwrap_or_default();
        String::from_utf8_lossy(slice).into_owned()
    }
}

fn transcode_utf16(bytes: &[u8], big_endian: bool) -> (String, bool) {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    let mut lossy = dangling;
    let mut text: String = char::decode_utf16(units)
        .map(|unit| {
            unit.unwrap_or_else(|_| {
                lossy = true;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    (text, lossy)
}
