//! Function definition extraction.

use tree_sitter::Node;

use super::ExtractCtx;
use super::signature::reconstruct_function;
use crate::types::FunctionSymbol;

/// Lazily reconstruct every well-formed function definition under `root`.
///
/// Definitions whose subtree holds an error or missing-token node are
/// skipped, as is any definition whose reconstruction fails.
pub(crate) fn extract_functions<'a>(
    ctx: ExtractCtx<'a>,
    root: Node<'a>,
    keep_source_text: bool,
) -> impl Iterator<Item = FunctionSymbol> + 'a {
    let mut previous = None;
    ctx.catalog
        .function_definition
        .matches(root, ctx.bytes())
        .into_iter()
        .filter_map(|m| m.node("function_definition"))
        .filter(move |node| {
            let fresh = previous != Some(node.id());
            previous = Some(node.id());
            fresh
        })
        .filter_map(move |node| {
            if ctx.catalog.error.any(node, ctx.bytes()) {
                tracing::debug!(
                    line = node.start_position().row + 1,
                    "skipping function with parse errors"
                );
                return None;
            }
            match reconstruct_function(ctx, node, keep_source_text) {
                Ok(function) => Some(function),
                Err(error) => {
                    tracing::debug!(%error, "skipping function");
                    None
                }
            }
        })
}
