//! Compile-time context stack.
//!
//! Tracks which form and container the code generated at a given point of the
//! template refers to. `formContainer` pushes the previous binding and its
//! closing tag pops it back, mirroring the block scope the generated code
//! opens and closes.

use crate::error::CompileError;
use crate::tokenizer::Token;

/// Form and container bound at a point of the template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextBinding {
    /// Current form, set by `{form}`.
    pub form: Option<Token>,
    /// Current container, set by `{formContainer}`; `None` means the form root.
    pub container: Option<Token>,
}

/// Stack of saved bindings, local to one compilation.
#[derive(Debug, Default)]
pub struct ContextStack {
    current: ContextBinding,
    saved: Vec<ContextBinding>,
}

impl ContextStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding in effect.
    #[must_use]
    pub fn current(&self) -> &ContextBinding {
        &self.current
    }

    /// Number of saved bindings.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Bind a form; the container resets to the form root.
    pub fn bind_form(&mut self, form: Token) {
        self.current = ContextBinding {
            form: Some(form),
            container: None,
        };
    }

    /// Save the current binding and enter `container`.
    pub fn push_container(&mut self, container: Token) {
        let previous = self.current.clone();
        self.saved.push(previous);
        self.current.container = Some(container);
        tracing::trace!(depth = self.saved.len(), "Pushed container binding");
    }

    /// Restore the binding saved by the matching [`push_container`](Self::push_container).
    pub fn pop_container(&mut self) -> Result<(), CompileError> {
        self.current = self.saved.pop().ok_or_else(|| {
            CompileError::Internal("container binding stack underflow".to_owned())
        })?;
        tracing::trace!(depth = self.saved.len(), "Popped container binding");
        Ok(())
    }

    /// Check that every push was popped.
    pub fn finish(&self) -> Result<(), CompileError> {
        if self.saved.is_empty() {
            Ok(())
        } else {
            Err(CompileError::Internal(format!(
                "{} container binding(s) left on the stack",
                self.saved.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> Token {
        Token::Literal(s.to_owned())
    }

    #[test]
    fn test_nested_containers_restore() {
        let mut stack = ContextStack::new();
        stack.bind_form(literal("order"));
        let before = stack.current().clone();

        stack.push_container(literal("a"));
        stack.push_container(literal("b"));
        assert_eq!(stack.current().container, Some(literal("b")));
        assert_eq!(stack.depth(), 2);

        stack.pop_container().unwrap();
        assert_eq!(stack.current().container, Some(literal("a")));

        stack.pop_container().unwrap();
        assert_eq!(stack.current(), &before);
        assert!(stack.finish().is_ok());
    }

    #[test]
    fn test_underflow_is_internal_error() {
        let mut stack = ContextStack::new();
        assert!(matches!(
            stack.pop_container(),
            Err(CompileError::Internal(_))
        ));
    }

    #[test]
    fn test_unbalanced_finish() {
        let mut stack = ContextStack::new();
        stack.push_container(literal("a"));
        assert!(stack.finish().is_err());
    }
}
