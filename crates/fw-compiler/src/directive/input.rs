//! `{input name:modifier attrs}` and `<tag n:input="name:modifier">`
//!
//! Modifiers after the name are forwarded to the control in order; for a
//! radio list the first selects an item and the second overrides its caption.

use crate::error::CompileError;
use crate::node::DirectiveNode;
use crate::tokenizer::Token;
use crate::unit::CompileUnit;
use crate::writer::{AttrArg, WriterArg, format_word};

const INLINE_LITERAL: &str = "out.push_str(&ctx.control(%0.word)?\
    .get_control(&[%1.raw]).add_attributes(%node.array).to_html());";

const INLINE_EXPRESSION: &str = "let input = ctx.resolve_control(%0.word)?; \
    let ctx = ctx.with_input(input); \
    out.push_str(&ctx.input()?.get_control(&[%1.raw]).add_attributes(%node.array).to_html());";

const ATTR_LITERAL: &str = "out.push_str(&ctx.control(%0.word)?";

const ATTR_EXPRESSION: &str = "let input = ctx.resolve_control(%0.word)?; \
    let ctx = ctx.with_input(input); \
    out.push_str(&ctx.input()?";

const ATTR_CONTROL: &str = ".get_control(&[%1.raw])";
const ATTR_LABEL: &str = ".get_label(&[%1.raw])";
const ATTR_MERGE: &str = ".add_attributes(%2.var)";
const ATTR_END: &str = ".attributes());";

/// Name and formatted modifiers of `name:modifier:...`.
struct InputRef {
    name: String,
    is_expression: bool,
    modifiers: String,
}

/// Split the leading word on `:`.
///
/// Returns `None` when there is no word or the name part is empty.
fn fetch_input_ref(node: &mut DirectiveNode) -> Option<InputRef> {
    let word = node.tokenizer.fetch_word()?;
    let mut parts = word.split(':');
    let name = parts.next().filter(|name| !name.is_empty())?.to_owned();
    let modifiers = parts.map(format_word).collect::<Vec<_>>().join(", ");
    Some(InputRef {
        is_expression: Token::parse(&name).is_expression(),
        name,
        modifiers,
    })
}

pub(super) fn open(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    let input = fetch_input_ref(node).ok_or_else(|| CompileError::missing_name(&node.name))?;
    let template = if input.is_expression {
        INLINE_EXPRESSION
    } else {
        INLINE_LITERAL
    };
    let args = [WriterArg::Text(input.name), WriterArg::Text(input.modifiers)];
    node.opening_code = unit.writer(&mut node.tokenizer).write(template, &args)?;
    Ok(())
}

pub(super) fn attribute(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    let input = fetch_input_ref(node).ok_or_else(|| CompileError::MissingName {
        directive: format!("{}{}", unit.attribute_prefix(), node.name),
    })?;
    let element = node.html_element.clone().unwrap_or_default();

    let mut template = String::from(if input.is_expression {
        ATTR_EXPRESSION
    } else {
        ATTR_LITERAL
    });
    template.push_str(if element.name.eq_ignore_ascii_case("label") {
        ATTR_LABEL
    } else {
        ATTR_CONTROL
    });
    if !element.attrs.is_empty() {
        template.push_str(ATTR_MERGE);
    }
    template.push_str(ATTR_END);

    // Literal attributes stay in the markup; nulling them drops the control's
    // own copies, validation rules included.
    let merged = element
        .attrs
        .into_iter()
        .map(|(name, _)| (name, AttrArg::Null))
        .collect();
    let args = [
        WriterArg::Text(input.name),
        WriterArg::Text(input.modifiers),
        WriterArg::Attrs(merged),
    ];
    node.opening_code = unit.writer(&mut node.tokenizer).write(&template, &args)?;
    Ok(())
}
