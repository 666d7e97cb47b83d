//! Per-compilation state.

use crate::config::CompilerConfig;
use crate::context::ContextStack;
use crate::error::CompileError;
use crate::tokenizer::ArgTokenizer;
use crate::writer::CodeWriter;

/// State shared by the directives of one compiled template.
///
/// Created fresh for every compilation and never shared between templates.
#[derive(Debug)]
pub struct CompileUnit {
    stack: ContextStack,
    runtime_path: String,
    attribute_prefix: String,
}

impl CompileUnit {
    /// Create a unit for one compilation.
    #[must_use]
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            stack: ContextStack::new(),
            runtime_path: config.runtime_path.clone(),
            attribute_prefix: config.attribute_prefix.clone(),
        }
    }

    /// Context stack of this compilation.
    #[must_use]
    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    pub(crate) fn stack_mut(&mut self) -> &mut ContextStack {
        &mut self.stack
    }

    /// Prefix of attribute-form directives.
    #[must_use]
    pub fn attribute_prefix(&self) -> &str {
        &self.attribute_prefix
    }

    /// Code writer over one directive's arguments.
    pub(crate) fn writer<'a>(&'a self, tokenizer: &'a mut ArgTokenizer) -> CodeWriter<'a> {
        CodeWriter::new(tokenizer, &self.runtime_path)
    }

    /// Check that the context stack is balanced.
    pub fn finish(&self) -> Result<(), CompileError> {
        self.stack.finish()
    }
}
