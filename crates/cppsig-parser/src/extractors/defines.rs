//! `#define` extraction.

use tree_sitter::Node;

use super::ExtractCtx;
use super::patterns::PatternMatch;
use crate::error::ParserError;
use crate::types::PreprocessDefine;

/// Lazily yield every macro that has a replacement value.
pub(crate) fn extract_defines<'a>(
    ctx: ExtractCtx<'a>,
    root: Node<'a>,
) -> impl Iterator<Item = PreprocessDefine> + 'a {
    ctx.catalog
        .preproc_def
        .matches(root, ctx.bytes())
        .into_iter()
        .filter_map(move |m| match define_from_match(ctx, &m) {
            Ok(define) => Some(define),
            Err(error) => {
                tracing::debug!(%error, "skipping define");
                None
            }
        })
}

fn define_from_match(
    ctx: ExtractCtx<'_>,
    m: &PatternMatch<'_, '_>,
) -> Result<PreprocessDefine, ParserError> {
    let define = m
        .node("preproc_def")
        .ok_or_else(|| ParserError::MissingCapture {
            capture: "preproc_def",
            text: String::new(),
        })?;
    let name = m.node("name").ok_or_else(|| ctx.missing("name", define))?;
    let value = m.node("value").ok_or_else(|| ctx.missing("value", define))?;
    Ok(PreprocessDefine {
        name: ctx.text(name)?.trim().to_owned(),
        value: ctx.text(value)?.trim().to_owned(),
    })
}
