//! Form directives.
//!
//! The closed set of directives the compiler understands:
//!
//! - `{form name attrs}` ... `{/form}`
//! - `{formContainer name}` ... `{/formContainer}`
//! - `{label name attrs /}` or `{label name attrs}` ... `{/label}`
//! - `{input name:modifier attrs}` and the attribute form `<input n:input="name">`
//!
//! Each directive reads its name from [`DirectiveNode::tokenizer`], classifies
//! it as a literal key or an expression, and writes Rust code into
//! [`DirectiveNode::opening_code`] / [`DirectiveNode::closing_code`].

mod container;
mod form;
mod input;
mod label;

use crate::error::CompileError;
use crate::node::DirectiveNode;
use crate::tokenizer::Token;
use crate::unit::CompileUnit;

/// A form directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `{form}`: binds the current form and renders its tags.
    Form,
    /// `{formContainer}`: binds a nested container for its body.
    FormContainer,
    /// `{label}`: renders a control's label.
    Label,
    /// `{input}` / `n:input`: renders a control.
    Input,
}

impl Directive {
    /// All directives.
    pub const ALL: [Self; 4] = [Self::Form, Self::FormContainer, Self::Label, Self::Input];

    /// Look up a directive by its template name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Template name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::FormContainer => "formContainer",
            Self::Label => "label",
            Self::Input => "input",
        }
    }

    /// Whether the directive takes a closing tag.
    #[must_use]
    pub fn is_paired(self) -> bool {
        !matches!(self, Self::Input)
    }

    /// Whether the directive can be written as an element attribute.
    #[must_use]
    pub fn supports_attribute(self) -> bool {
        matches!(self, Self::Input)
    }

    /// Compile the opening tag.
    pub fn open(self, node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
        match self {
            Self::Form => form::open(node, unit)?,
            Self::FormContainer => container::open(node, unit)?,
            Self::Label => label::open(node, unit)?,
            Self::Input => input::open(node, unit)?,
        }
        tracing::debug!(directive = self.name(), line = node.line, "Compiled opening tag");
        Ok(())
    }

    /// Compile the closing tag.
    ///
    /// The compiler calls this only for paired directives, after setting
    /// [`DirectiveNode::content`].
    pub fn close(self, node: &mut DirectiveNode, unit: &mut CompileUnit) -> Result<(), CompileError> {
        match self {
            Self::Form => form::close(node, unit),
            Self::FormContainer => container::close(node, unit),
            Self::Label => label::close(node, unit),
            Self::Input => Ok(()),
        }
    }

    /// Compile the attribute form on [`DirectiveNode::html_element`].
    pub fn attribute(
        self,
        node: &mut DirectiveNode,
        unit: &mut CompileUnit,
    ) -> Result<(), CompileError> {
        match self {
            Self::Input => input::attribute(node, unit),
            _ => Err(CompileError::Internal(format!(
                "{{{}}} has no attribute form",
                self.name()
            ))),
        }
    }
}

/// Fetch the leading name token and rewind the tokenizer for the code writer.
fn fetch_name(
    node: &mut DirectiveNode,
    missing: fn(&str) -> CompileError,
) -> Result<Token, CompileError> {
    let name = node
        .tokenizer
        .fetch_token()
        .ok_or_else(|| missing(&node.name))?;
    node.tokenizer.reset();
    Ok(name)
}
