//! Compiled tree-sitter queries used to find candidate facts.
//!
//! Queries are compiled once per process and shared by every parse.

use std::sync::OnceLock;

use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Language, Node, Query, QueryCapture, QueryCursor, StreamingIterator};

use crate::error::ParserError;

const ERROR_QUERY: &str = "[(ERROR) (MISSING)] @error";
const FUNCTION_DEFINITION_QUERY: &str = "(function_definition \
     (type_qualifier)* @type_qualifier \
     type: (_) @type \
     declarator: (_) @declarator) @function_definition";
const FUNCTION_DECLARATOR_QUERY: &str = "(function_declarator) @function_declarator";
const IDENTIFIER_QUERY: &str =
    "[(identifier) (field_identifier) (operator_name)] @identifier";
const DECLARED_NAME_QUERY: &str = "(identifier) @declared_name";
const PARAMETER_LIST_QUERY: &str =
    "(function_declarator parameters: (parameter_list) @parameter_list)";
const PREPROC_DEF_QUERY: &str = "(preproc_def name: (_) @name value: (_) @value) @preproc_def";
const STRING_LITERAL_QUERY: &str = "(string_literal) @string";

static CATALOG: OnceLock<Result<PatternCatalog, String>> = OnceLock::new();

/// Grammar used for every C and C++ source.
pub(crate) fn cpp_language() -> Language {
    SupportLang::Cpp.get_ts_language()
}

/// One compiled query plus the capture that names its primary node.
pub(crate) struct Pattern {
    query: Query,
    primary: u32,
}

/// Captures of a single query match, owned so the cursor can be dropped.
pub(crate) struct PatternMatch<'query, 'tree> {
    names: &'query [&'query str],
    captures: Vec<QueryCapture<'tree>>,
}

impl Pattern {
    fn compile(language: &Language, source: &str, primary: &str) -> Result<Self, String> {
        let query = Query::new(language, source).map_err(|error| format!("{source}: {error}"))?;
        let primary = query
            .capture_index_for_name(primary)
            .ok_or_else(|| format!("{source}: no capture named `{primary}`"))?;
        Ok(Self { query, primary })
    }

    /// Every match under `node`, in source order.
    pub(crate) fn matches<'tree>(
        &self,
        node: Node<'tree>,
        text: &[u8],
    ) -> Vec<PatternMatch<'_, 'tree>> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, node, text);
        let mut found = Vec::new();
        while let Some(m) = matches.next() {
            found.push(PatternMatch {
                names: self.query.capture_names(),
                captures: m.captures.to_vec(),
            });
        }
        found
    }

    /// First node bound to the primary capture under `node`.
    pub(crate) fn first<'tree>(&self, node: Node<'tree>, text: &[u8]) -> Option<Node<'tree>> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, node, text);
        while let Some(m) = matches.next() {
            if let Some(capture) = m.captures.iter().find(|c| c.index == self.primary) {
                return Some(capture.node);
            }
        }
        None
    }

    /// Whether the query matches anywhere under `node`.
    pub(crate) fn any(&self, node: Node<'_>, text: &[u8]) -> bool {
        self.first(node, text).is_some()
    }
}

impl<'tree> PatternMatch<'_, 'tree> {
    /// First node bound to `label` in this match.
    pub(crate) fn node(&self, label: &str) -> Option<Node<'tree>> {
        self.captures
            .iter()
            .find(|capture| self.names.get(capture.index as usize) == Some(&label))
            .map(|capture| capture.node)
    }
}

/// The fixed set of queries the extractors run.
pub(crate) struct PatternCatalog {
    /// Error and missing-token nodes; their presence disqualifies a function.
    pub error: Pattern,
    pub function_definition: Pattern,
    /// A function's own declarator, as opposed to the wrappers around it.
    pub function_declarator: Pattern,
    /// Short-name candidates inside a function declarator.
    pub identifier: Pattern,
    /// Name declared by a parameter.
    pub declared_name: Pattern,
    pub parameter_list: Pattern,
    /// Only macros with a replacement value match.
    pub preproc_def: Pattern,
    pub string_literal: Pattern,
}

impl PatternCatalog {
    /// The shared catalog, compiled on first use.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::InvalidQuery` if any query fails to compile
    /// against the bundled grammar.
    pub(crate) fn get() -> Result<&'static Self, ParserError> {
        CATALOG
            .get_or_init(|| Self::compile(&cpp_language()))
            .as_ref()
            .map_err(|message| ParserError::InvalidQuery(message.clone()))
    }

    fn compile(language: &Language) -> Result<Self, String> {
        Ok(Self {
            error: Pattern::compile(language, ERROR_QUERY, "error")?,
            function_definition: Pattern::compile(
                language,
                FUNCTION_DEFINITION_QUERY,
                "function_definition",
            )?,
            function_declarator: Pattern::compile(
                language,
                FUNCTION_DECLARATOR_QUERY,
                "function_declarator",
            )?,
            identifier: Pattern::compile(language, IDENTIFIER_QUERY, "identifier")?,
            declared_name: Pattern::compile(language, DECLARED_NAME_QUERY, "declared_name")?,
            parameter_list: Pattern::compile(language, PARAMETER_LIST_QUERY, "parameter_list")?,
            preproc_def: Pattern::compile(language, PREPROC_DEF_QUERY, "preproc_def")?,
            string_literal: Pattern::compile(language, STRING_LITERAL_QUERY, "string")?,
        })
    }
}
