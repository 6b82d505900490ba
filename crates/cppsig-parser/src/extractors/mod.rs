//! Fact extraction over a parsed C/C++ tree.
//!
//! Every extractor follows the same shape: run a catalog query, validate each
//! match, reconstruct one record, and drop (with a `debug!` event) any item
//! whose reconstruction fails.

mod declarator;
mod defines;
mod functions;
mod helpers;
mod literals;
mod normalize;
pub(crate) mod patterns;
mod signature;

#[cfg(test)]
mod tests;

use tree_sitter::Node;

use crate::error::ParserError;
use crate::source::SourceText;
use patterns::PatternCatalog;

pub(crate) use defines::extract_defines;
pub(crate) use functions::extract_functions;
pub use helpers::ancestors;
pub(crate) use literals::extract_literals;
pub use normalize::normalize;

/// Borrowed state shared by the extractors of one tree.
#[derive(Clone, Copy)]
pub(crate) struct ExtractCtx<'a> {
    pub source: &'a SourceText,
    pub catalog: &'static PatternCatalog,
}

impl<'a> ExtractCtx<'a> {
    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.source.bytes()
    }

    /// Strictly decoded text of `node`.
    pub(crate) fn text(&self, node: Node<'_>) -> Result<String, ParserError> {
        self.source.decode(node.byte_range())
    }

    /// Text of `node` for diagnostics.
    pub(crate) fn raw_text(&self, node: Node<'_>) -> String {
        self.source.lossy(node.byte_range())
    }

    pub(crate) fn missing(&self, capture: &'static str, node: Node<'_>) -> ParserError {
        ParserError::MissingCapture {
            capture,
            text: self.raw_text(node),
        }
    }
}
