//! Render errors.

use fw_forms::FormError;

/// Error raised by compiled template code at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A directive needs a form but none is bound.
    #[error("no form is bound; use {{form}} first")]
    NoCurrentForm,

    /// A directive needs a container but none is bound.
    #[error("no form container is bound")]
    NoCurrentContainer,

    /// `ctx.input()` was used before any control was resolved.
    #[error("no input is bound")]
    NoCurrentInput,

    /// Form model lookup failed.
    #[error(transparent)]
    Form(#[from] FormError),
}
