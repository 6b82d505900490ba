//! String literal extraction.

use tree_sitter::Node;

use super::ExtractCtx;
use super::helpers::{LITERAL_STATEMENTS, ancestors};
use crate::types::StringLiteral;

/// Lazily yield the statement around every string literal outside `#include`.
///
/// Literals with no enclosing declaration or expression statement (for
/// example default arguments or macro bodies) are skipped.
pub(crate) fn extract_literals<'a>(
    ctx: ExtractCtx<'a>,
    root: Node<'a>,
) -> impl Iterator<Item = StringLiteral> + 'a {
    ctx.catalog
        .string_literal
        .matches(root, ctx.bytes())
        .into_iter()
        .filter_map(|m| m.node("string"))
        .filter(|literal| !ancestors(*literal).any(|ancestor| ancestor.kind() == "preproc_include"))
        .filter_map(move |literal| {
            let statement =
                ancestors(literal).find(|ancestor| LITERAL_STATEMENTS.contains(&ancestor.kind()))?;
            match ctx.text(statement) {
                Ok(text) => Some(StringLiteral {
                    value: text.trim().to_owned(),
                }),
                Err(error) => {
                    tracing::debug!(%error, "skipping string literal");
                    None
                }
            }
        })
}
