//! `{form name attrs}` ... `{/form}`

use super::fetch_name;
use crate::error::CompileError;
use crate::node::DirectiveNode;
use crate::unit::CompileUnit;

const OPEN_LITERAL: &str = "let form = ctx.lookup_form(%node.word)?; \
    let ctx = ctx.enter_form(form); \
    %runtime::render_form_begin(out, form, %node.array);";

const OPEN_EXPRESSION: &str = "let form = ctx.resolve_form(%node.word)?; \
    let ctx = ctx.enter_form(form); \
    %runtime::render_form_begin(out, form, %node.array);";

const CLOSE: &str = "%runtime::render_form_end(out, ctx.form()?);";

pub(super) fn open(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    let name = fetch_name(node, CompileError::missing_form_name)?;
    let template = if name.is_expression() {
        OPEN_EXPRESSION
    } else {
        OPEN_LITERAL
    };
    unit.stack_mut().bind_form(name);
    node.opening_code = unit.writer(&mut node.tokenizer).write(template, &[])?;
    Ok(())
}

pub(super) fn close(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    node.closing_code = unit.writer(&mut node.tokenizer).write(CLOSE, &[])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::tokenizer::Token;
    use pretty_assertions::assert_eq;

    fn compile(args: &str) -> (DirectiveNode, CompileUnit) {
        let mut unit = CompileUnit::new(&CompilerConfig::default());
        let mut node = DirectiveNode::new("form", args, 1);
        open(&mut node, &mut unit).unwrap();
        close(&mut node, &mut unit).unwrap();
        (node, unit)
    }

    #[test]
    fn test_literal_name_is_looked_up() {
        let (node, unit) = compile("signup class=wide");
        assert_eq!(
            node.opening_code,
            concat!(
                r#"let form = ctx.lookup_form("signup")?; "#,
                "let ctx = ctx.enter_form(form); ",
                r#"::fw_runtime::render_form_begin(out, form, &[("class", Some("wide".into()))]);"#
            )
        );
        assert_eq!(
            node.closing_code,
            "::fw_runtime::render_form_end(out, ctx.form()?);"
        );
        assert_eq!(
            unit.stack().current().form,
            Some(Token::Literal("signup".to_owned()))
        );
    }

    #[test]
    fn test_expression_name_is_evaluated() {
        let (node, _) = compile("$search_form");
        assert!(
            node.opening_code
                .starts_with("let form = ctx.resolve_form(search_form)?;")
        );
        assert!(!node.opening_code.contains("lookup_form"));
        assert!(node.opening_code.ends_with("render_form_begin(out, form, &[]);"));
    }

    #[test]
    fn test_custom_runtime_path() {
        let mut unit = CompileUnit::new(&CompilerConfig::new().with_runtime_path("crate::rt"));
        let mut node = DirectiveNode::new("form", "f", 1);
        close(&mut node, &mut unit).unwrap();
        assert_eq!(node.closing_code, "crate::rt::render_form_end(out, ctx.form()?);");
    }
}
