//! `{formContainer name}` ... `{/formContainer}`
//!
//! The generated code opens a block that shadows `ctx` with the container
//! binding; the closing brace brings the outer binding back into scope. The
//! compile-time stack follows the same nesting.

use super::fetch_name;
use crate::error::CompileError;
use crate::node::DirectiveNode;
use crate::unit::CompileUnit;

const OPEN_LITERAL: &str = "{ let form_container = ctx.container()?.container(%node.word)?; \
    let ctx = ctx.enter_container(form_container);";

const OPEN_EXPRESSION: &str = "{ let form_container = ctx.resolve_container(%node.word)?; \
    let ctx = ctx.enter_container(form_container);";

const CLOSE: &str = "}";

pub(super) fn open(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    let name = fetch_name(node, CompileError::missing_form_name)?;
    let template = if name.is_expression() {
        OPEN_EXPRESSION
    } else {
        OPEN_LITERAL
    };
    unit.stack_mut().push_container(name);
    node.opening_code = unit.writer(&mut node.tokenizer).write(template, &[])?;
    Ok(())
}

pub(super) fn close(node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
    unit.stack_mut().pop_container()?;
    CLOSE.clone_into(&mut node.closing_code);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::tokenizer::Token;

    fn node(args: &str) -> DirectiveNode {
        DirectiveNode::new("formContainer", args, 1)
    }

    #[test]
    fn test_literal_container() {
        let mut unit = CompileUnit::new(&CompilerConfig::default());
        let mut n = node("address");
        open(&mut n, &mut unit).unwrap();
        assert_eq!(
            n.opening_code,
            r#"{ let form_container = ctx.container()?.container("address")?; let ctx = ctx.enter_container(form_container);"#
        );
        close(&mut n, &mut unit).unwrap();
        assert_eq!(n.closing_code, "}");
    }

    #[test]
    fn test_expression_container() {
        let mut unit = CompileUnit::new(&CompilerConfig::default());
        let mut n = node("$group");
        open(&mut n, &mut unit).unwrap();
        assert!(n.opening_code.contains("ctx.resolve_container(group)?"));
    }

    #[test]
    fn test_nested_close_restores_outer_container() {
        let mut unit = CompileUnit::new(&CompilerConfig::default());
        let before = unit.stack().current().clone();

        let mut outer = node("a");
        open(&mut outer, &mut unit).unwrap();
        let mut inner = node("b");
        open(&mut inner, &mut unit).unwrap();

        close(&mut inner, &mut unit).unwrap();
        assert_eq!(
            unit.stack().current().container,
            Some(Token::Literal("a".to_owned()))
        );

        close(&mut outer, &mut unit).unwrap();
        assert_eq!(unit.stack().current(), &before);
        assert_eq!(unit.stack().depth(), 0);
    }

    #[test]
    fn test_close_without_open_is_internal_error() {
        let mut unit = CompileUnit::new(&CompilerConfig::default());
        let mut n = node("a");
        assert!(matches!(
            close(&mut n, &mut unit),
            Err(CompileError::Internal(_))
        ));
    }
}
