//! Form model errors.

/// Error resolving a component in the form model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No component with this name exists.
    #[error("component '{name}' does not exist")]
    ComponentNotFound {
        /// Requested component name.
        name: String,
    },

    /// No form with this name is registered.
    #[error("form '{name}' does not exist")]
    FormNotFound {
        /// Requested form name.
        name: String,
    },

    /// The component exists but is a container, not a control.
    #[error("component '{name}' is not a control")]
    NotAControl {
        /// Component name.
        name: String,
    },

    /// The component exists but is a control, not a container.
    #[error("component '{name}' is not a container")]
    NotAContainer {
        /// Component name.
        name: String,
    },
}
