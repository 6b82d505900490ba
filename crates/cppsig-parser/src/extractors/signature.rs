//! Reassembles a `function_definition` into a [`FunctionSymbol`].

use tree_sitter::Node;

use super::ExtractCtx;
use super::declarator::reconstruct_type;
use super::helpers::{PARAMETER_KINDS, QUALIFYING_SCOPES, ancestors, children, children_of_kind};
use super::normalize::normalize;
use crate::error::ParserError;
use crate::types::FunctionSymbol;

/// Build the record for one function definition.
///
/// Any failure is retagged with the text of the whole function so the
/// diagnostic points at the definition rather than an inner token.
pub(super) fn reconstruct_function(
    ctx: ExtractCtx<'_>,
    function: Node<'_>,
    keep_source_text: bool,
) -> Result<FunctionSymbol, ParserError> {
    build(ctx, function, keep_source_text).map_err(|error| error.retag(ctx.raw_text(function)))
}

fn build(
    ctx: ExtractCtx<'_>,
    function: Node<'_>,
    keep_source_text: bool,
) -> Result<FunctionSymbol, ParserError> {
    let return_type = reconstruct_type(ctx, function)?;

    let declarator = ctx
        .catalog
        .function_declarator
        .first(function, ctx.bytes())
        .ok_or_else(|| ctx.missing("function_declarator", function))?;
    let base_name = declarator
        .child_by_field_name("declarator")
        .ok_or_else(|| ctx.missing("declarator", declarator))?;
    let qualified_symbol_name = qualify(ctx, declarator, &ctx.text(base_name)?)?;

    let short_name = ctx
        .catalog
        .identifier
        .first(declarator, ctx.bytes())
        .ok_or_else(|| ctx.missing("identifier", declarator))?;
    let symbol_name = normalize(&ctx.text(short_name)?);

    // Exception specifiers are separate node kinds and never reach here.
    let modifiers = children_of_kind(declarator, "type_qualifier")
        .into_iter()
        .map(|qualifier| ctx.text(qualifier).map(|text| normalize(&text)))
        .collect::<Result<Vec<_>, _>>()?;

    let parameters = ctx
        .catalog
        .parameter_list
        .first(declarator, ctx.bytes())
        .ok_or_else(|| ctx.missing("parameter_list", declarator))?;
    let param_list = children(parameters)
        .into_iter()
        .filter(|parameter| PARAMETER_KINDS.contains(&parameter.kind()))
        .map(|parameter| reconstruct_type(ctx, parameter))
        .collect::<Result<Vec<_>, _>>()?;

    let source_text = if keep_source_text {
        Some(signature_text(ctx, function)?)
    } else {
        None
    };

    Ok(FunctionSymbol {
        return_type,
        symbol_name,
        qualified_symbol_name,
        param_list,
        modifiers,
        source_text,
    })
}

/// Prefix `base_name` with enclosing namespace, class and struct names,
/// outermost first. Anonymous scopes contribute nothing.
fn qualify(ctx: ExtractCtx<'_>, declarator: Node<'_>, base_name: &str) -> Result<String, ParserError> {
    let mut scopes: Vec<_> = ancestors(declarator)
        .filter(|ancestor| QUALIFYING_SCOPES.contains(&ancestor.kind()))
        .filter_map(|scope| scope.child_by_field_name("name"))
        .collect();
    scopes.reverse();

    let qualifiers = scopes
        .into_iter()
        .map(|name| ctx.text(name).map(|text| normalize(&text)))
        .collect::<Result<Vec<_>, _>>()?;

    if qualifiers.is_empty() {
        Ok(normalize(base_name))
    } else {
        Ok(normalize(&format!("{}::{base_name}", qualifiers.join("::"))))
    }
}

/// Function text with the body cut out, whitespace collapsed.
fn signature_text(ctx: ExtractCtx<'_>, function: Node<'_>) -> Result<String, ParserError> {
    let range = function.byte_range();
    let text = match function.child_by_field_name("body") {
        Some(body) => {
            let mut text = ctx.source.decode(range.start..body.start_byte())?;
            text.push_str(&ctx.source.decode(body.end_byte()..range.end)?);
            text
        }
        None => ctx.text(function)?,
    };
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}
