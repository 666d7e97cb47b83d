//! Compile errors.

/// Error aborting a template compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CompileError {
    /// A directive is missing its required name argument.
    #[error("Missing name in {directive}.")]
    MissingName {
        /// Directive as written in the template, e.g. `{label}` or `n:input`.
        directive: String,
    },

    /// `{form}` or `{formContainer}` without a name.
    #[error("Missing form name in {directive}.")]
    MissingFormName {
        /// Directive as written in the template.
        directive: String,
    },

    /// A closing tag without a matching opening directive.
    #[error("line {line}: unexpected {{/{name}}}")]
    UnexpectedClose {
        /// Directive name.
        name: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// A closing tag that does not match the innermost open directive.
    #[error("line {line}: unexpected {{/{found}}}, expected {{/{expected}}}")]
    MismatchedClose {
        /// Name of the innermost open directive.
        expected: String,
        /// Name found in the closing tag.
        found: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// A paired directive that is never closed.
    #[error("line {line}: missing {{/{name}}}")]
    UnclosedDirective {
        /// Directive name.
        name: String,
        /// Line number of the opening tag (1-indexed).
        line: usize,
    },

    /// Compiler bug: malformed code template or unbalanced context stack.
    #[error("internal compiler error: {0}")]
    Internal(String),
}

impl CompileError {
    /// Missing-name error for a directive in `{name}` form.
    pub(crate) fn missing_name(directive: &str) -> Self {
        Self::MissingName {
            directive: format!("{{{directive}}}"),
        }
    }

    /// Missing-name error for `{form}` and `{formContainer}`.
    pub(crate) fn missing_form_name(directive: &str) -> Self {
        Self::MissingFormName {
            directive: format!("{{{directive}}}"),
        }
    }
}
