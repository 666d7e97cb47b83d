//! `{label name attrs /}` and `{label name attrs}` ... `{/label}`

use super::fetch_name;
use crate::error::CompileError;
use crate::node::DirectiveNode;
use crate::unit::CompileUnit;

const OPEN_LITERAL: &str = "let ctx = ctx.with_label(ctx.control(%node.word)?.label(None)); \
    if let Some(label) = ctx.label() { \
    out.push_str(&label.clone().add_attributes(%node.array).to_html()); }";

const OPEN_EXPRESSION: &str = "let input = ctx.resolve_control(%node.word)?; \
    let ctx = ctx.with_input(input).with_label(input.label(None)); \
    if let Some(label) = ctx.label() { \
    out.push_str(&label.clone().add_attributes(%node.array).to_html()); }";

/// Renders the whole element.
const RENDER_ELEMENT: &str = ".to_html()";

/// Renders only the opening tag, for labels with a body.
const RENDER_START_TAG: &str = ".start_tag()";

const CLOSE: &str = r#"out.push_str("</label>");"#;

pub(super) fn open(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    let name = fetch_name(node, CompileError::missing_name)?;
    let template = if name.is_expression() {
        OPEN_EXPRESSION
    } else {
        OPEN_LITERAL
    };
    node.opening_code = unit.writer(&mut node.tokenizer).write(template, &[])?;
    Ok(())
}

pub(super) fn close(node: &mut DirectiveNode, _unit: &mut CompileUnit) -> Result<(), CompileError> {
    if node.content.is_none() {
        return Ok(());
    }

    let at = node.opening_code.rfind(RENDER_ELEMENT).ok_or_else(|| {
        CompileError::Internal("label opening code has no render call".to_owned())
    })?;
    node.opening_code
        .replace_range(at..at + RENDER_ELEMENT.len(), RENDER_START_TAG);
    CLOSE.clone_into(&mut node.closing_code);
    Ok(())
}
