//! tree-sitter wrapper: owns one parsed C/C++ source and hands out its facts.

use cppsig_config::{Encoding, ParserConfig};
use tree_sitter::{Parser, Tree};

use crate::error::ParserError;
use crate::extractors::patterns::{PatternCatalog, cpp_language};
use crate::extractors::{ExtractCtx, extract_defines, extract_functions, extract_literals};
use crate::source::SourceText;
use crate::types::{FunctionSymbol, PreprocessDefine, SourceFacts, StringLiteral};

/// A parsed C or C++ source file.
///
/// Construction is the only fallible step. The `parse_*` methods return fresh
/// lazy iterators on every call and never fail; items that cannot be
/// reconstructed are dropped.
pub struct CppTreeParser {
    source: SourceText,
    tree: Tree,
    catalog: &'static PatternCatalog,
    keep_source_text: bool,
}

impl CppTreeParser {
    /// Parse raw source bytes in the declared encoding.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::InvalidQuery` if the pattern catalog cannot be
    /// compiled, or `ParserError::ParseFailed` if tree-sitter produces no tree.
    pub fn from_source(contents: &[u8], encoding: Encoding) -> Result<Self, ParserError> {
        Self::with_config(
            contents,
            &ParserConfig {
                encoding,
                ..ParserConfig::default()
            },
        )
    }

    /// Parse UTF-8 source text.
    ///
    /// # Errors
    ///
    /// See [`CppTreeParser::from_source`].
    pub fn from_text(source: &str) -> Result<Self, ParserError> {
        Self::from_source(source.as_bytes(), Encoding::Utf8)
    }

    /// Parse raw source bytes with settings from [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// See [`CppTreeParser::from_source`].
    pub fn with_config(contents: &[u8], config: &ParserConfig) -> Result<Self, ParserError> {
        let catalog = PatternCatalog::get()?;
        let source = SourceText::new(contents, config.encoding);

        let mut parser = Parser::new();
        parser
            .set_language(&cpp_language())
            .map_err(|error| ParserError::ParseFailed {
                message: error.to_string(),
            })?;
        let tree = parser
            .parse(source.bytes(), None)
            .ok_or_else(|| ParserError::ParseFailed {
                message: "tree-sitter returned no tree".to_string(),
            })?;

        tracing::trace!(
            encoding = %source.encoding(),
            bytes = source.bytes().len(),
            has_errors = tree.root_node().has_error(),
            "parsed source"
        );

        Ok(Self {
            source,
            tree,
            catalog,
            keep_source_text: config.keep_source_text,
        })
    }

    /// The underlying syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Function definitions, in source order.
    pub fn parse_functions(&self) -> impl Iterator<Item = FunctionSymbol> + '_ {
        extract_functions(self.ctx(), self.tree.root_node(), self.keep_source_text)
    }

    /// `#define`s that carry a value, in source order.
    pub fn parse_preproc_defs(&self) -> impl Iterator<Item = PreprocessDefine> + '_ {
        extract_defines(self.ctx(), self.tree.root_node())
    }

    /// String literals outside `#include`, in source order.
    pub fn parse_string_literals(&self) -> impl Iterator<Item = StringLiteral> + '_ {
        extract_literals(self.ctx(), self.tree.root_node())
    }

    /// Collect every fact kind of this file.
    #[must_use]
    pub fn extract_all(&self) -> SourceFacts {
        let facts = SourceFacts {
            functions: self.parse_functions().collect(),
            defines: self.parse_preproc_defs().collect(),
            literals: self.parse_string_literals().collect(),
        };
        tracing::trace!(
            functions = facts.functions.len(),
            defines = facts.defines.len(),
            literals = facts.literals.len(),
            "extracted source facts"
        );
        facts
    }

    const fn ctx(&self) -> ExtractCtx<'_> {
        ExtractCtx {
            source: &self.source,
            catalog: self.catalog,
        }
    }
}
