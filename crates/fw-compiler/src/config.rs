//! Compiler configuration.

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::fw_runtime";

/// Default prefix of attribute-form directives (`n:input`).
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "n:";

/// Configuration for the template compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Path under which generated code reaches the runtime helpers.
    ///
    /// Default: `::fw_runtime`
    pub runtime_path: String,
    /// Prefix of directives written as element attributes.
    ///
    /// Default: `n:`
    pub attribute_prefix: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_owned(),
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_owned(),
        }
    }

    /// Set the runtime path.
    #[must_use]
    pub fn with_runtime_path(mut self, runtime_path: impl Into<String>) -> Self {
        self.runtime_path = runtime_path.into();
        self
    }

    /// Set the attribute-form prefix.
    #[must_use]
    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.runtime_path, "::fw_runtime");
        assert_eq!(config.attribute_prefix, "n:");
    }

    #[test]
    fn test_builder() {
        let config = CompilerConfig::new()
            .with_runtime_path("crate::forms")
            .with_attribute_prefix("fw:");
        assert_eq!(config.runtime_path, "crate::forms");
        assert_eq!(config.attribute_prefix, "fw:");
    }
}
