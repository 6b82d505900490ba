//! Type reconstruction from C/C++ declarator chains.
//!
//! Declarators wrap the declared name from the inside out (`int *const *x`
//! nests `x` inside two pointer declarators) while the printed type reads
//! outward from the base type, so the wrapper chain is walked in reverse.

use tree_sitter::Node;

use super::ExtractCtx;
use super::helpers::{
    ARRAY_DECLARATORS, INDIRECTION_TOKENS, PARAMETER_KINDS, ancestors, children,
    children_of_kind, innermost_declarator,
};
use super::normalize::normalize;
use crate::error::ParserError;

/// Where the wrapper chain of a type starts.
#[derive(Clone, Copy)]
enum ChainStart<'tree> {
    /// Wrappers are the ancestors of this node (a name or function declarator).
    Above(Node<'tree>),
    /// This abstract declarator is itself the innermost wrapper.
    At(Node<'tree>),
}

/// Rebuild the full type of a function's return value or of one parameter.
///
/// `node` is either a `function_definition` or a
/// `parameter_declaration` / `optional_parameter_declaration`.
///
/// # Errors
///
/// Returns `ParserError::UnexpectedNode` for any other node kind,
/// `ParserError::MissingCapture` when the type field or function declarator is
/// absent, and `ParserError::Decode` when a contributing token cannot be
/// decoded.
pub(super) fn reconstruct_type(ctx: ExtractCtx<'_>, node: Node<'_>) -> Result<String, ParserError> {
    let start = match node.kind() {
        "function_definition" => Some(ChainStart::Above(
            ctx.catalog
                .function_declarator
                .first(node, ctx.bytes())
                .ok_or_else(|| ctx.missing("function_declarator", node))?,
        )),
        kind if PARAMETER_KINDS.contains(&kind) => parameter_chain_start(ctx, node),
        kind => {
            return Err(ParserError::UnexpectedNode {
                kind: kind.to_string(),
                text: ctx.raw_text(node),
            });
        }
    };

    let qualifiers = children_of_kind(node, "type_qualifier")
        .into_iter()
        .map(|qualifier| ctx.text(qualifier).map(|text| text.trim().to_owned()))
        .collect::<Result<Vec<_>, _>>()?;

    let base = node
        .child_by_field_name("type")
        .ok_or_else(|| ctx.missing("type", node))?;
    let base = ctx.text(base)?;

    let mut modifiers = Vec::new();
    if let Some(start) = start {
        for wrapper in wrapper_chain(start, node) {
            push_wrapper_modifiers(ctx, wrapper, &mut modifiers)?;
        }
    }

    Ok(normalize(&format!(
        "{} {}{}",
        qualifiers.join(" "),
        base.trim(),
        modifiers.join(" ")
    )))
}

/// Parameters wrap their declared name; unnamed ones wrap nothing, so the
/// innermost abstract declarator starts the chain.
fn parameter_chain_start<'tree>(
    ctx: ExtractCtx<'_>,
    node: Node<'tree>,
) -> Option<ChainStart<'tree>> {
    let declarator = node.child_by_field_name("declarator")?;
    let start = match ctx.catalog.declared_name.first(declarator, ctx.bytes()) {
        Some(name) => ChainStart::Above(name),
        None => ChainStart::At(innermost_declarator(declarator)),
    };
    Some(start)
}

/// Wrappers strictly between the chain start and `outer`, outermost first.
fn wrapper_chain<'tree>(start: ChainStart<'tree>, outer: Node<'tree>) -> Vec<Node<'tree>> {
    let (first, inclusive) = match start {
        ChainStart::Above(node) => (node, false),
        ChainStart::At(node) => (node, true),
    };
    let mut chain: Vec<_> = inclusive
        .then_some(first)
        .into_iter()
        .chain(ancestors(first).take_while(|ancestor| ancestor.id() != outer.id()))
        .collect();
    chain.reverse();
    chain
}

fn push_wrapper_modifiers(
    ctx: ExtractCtx<'_>,
    wrapper: Node<'_>,
    modifiers: &mut Vec<String>,
) -> Result<(), ParserError> {
    let tokens = children(wrapper);
    for token in &tokens {
        if INDIRECTION_TOKENS.contains(&token.kind()) {
            modifiers.push(ctx.text(*token)?);
        }
    }
    if ARRAY_DECLARATORS.contains(&wrapper.kind()) {
        modifiers.push("*".to_string());
    }
    for token in tokens.iter().filter(|token| token.kind() == "type_qualifier") {
        modifiers.push(ctx.text(*token)?);
    }
    Ok(())
}
