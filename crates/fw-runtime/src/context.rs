//! Render-time context.
//!
//! Generated code threads a [`RenderContext`] through every statement. Binding
//! a form, container, input or label returns a new context that the code
//! shadows with `let ctx = ...`, so a `formContainer` block restores the outer
//! binding when its scope ends.

use fw_forms::{Container, Control, Form, FormRegistry};
use fw_html::Html;

use crate::RenderError;

/// Current form, container, input and label of a template render.
#[derive(Clone, Debug)]
pub struct RenderContext<'a> {
    registry: &'a FormRegistry,
    form: Option<&'a Form>,
    container: Option<&'a Container>,
    input: Option<&'a Control>,
    label: Option<Html>,
}

/// Value a directive expression can resolve to a form model object.
///
/// Implemented for direct references (used as-is) and for names (looked up
/// in the registry or the current container).
pub trait Resolve<'a, T> {
    /// Resolve against `ctx`.
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a T, RenderError>;
}

impl<'a, T> Resolve<'a, T> for &'a T {
    fn resolve(self, _ctx: &RenderContext<'a>) -> Result<&'a T, RenderError> {
        Ok(self)
    }
}

impl<'a> Resolve<'a, Form> for &str {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Form, RenderError> {
        ctx.lookup_form(self)
    }
}

impl<'a> Resolve<'a, Form> for &String {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Form, RenderError> {
        ctx.lookup_form(self)
    }
}

impl<'a> Resolve<'a, Container> for &str {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Container, RenderError> {
        Ok(ctx.container()?.container(self)?)
    }
}

impl<'a> Resolve<'a, Container> for &String {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Container, RenderError> {
        self.as_str().resolve(ctx)
    }
}

impl<'a> Resolve<'a, Control> for &str {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Control, RenderError> {
        ctx.control(self)
    }
}

impl<'a> Resolve<'a, Control> for &String {
    fn resolve(self, ctx: &RenderContext<'a>) -> Result<&'a Control, RenderError> {
        ctx.control(self)
    }
}

impl<'a> RenderContext<'a> {
    /// Create a context with nothing bound.
    #[must_use]
    pub fn new(registry: &'a FormRegistry) -> Self {
        Self {
            registry,
            form: None,
            container: None,
            input: None,
            label: None,
        }
    }

    /// Forms available to the template.
    #[must_use]
    pub fn registry(&self) -> &'a FormRegistry {
        self.registry
    }

    /// Look up a form by name.
    pub fn lookup_form(&self, name: &str) -> Result<&'a Form, RenderError> {
        Ok(self.registry.form(name)?)
    }

    /// Resolve a form reference or name.
    pub fn resolve_form(&self, form: impl Resolve<'a, Form>) -> Result<&'a Form, RenderError> {
        form.resolve(self)
    }

    /// Resolve a container reference, or a name in the current container.
    pub fn resolve_container(
        &self,
        container: impl Resolve<'a, Container>,
    ) -> Result<&'a Container, RenderError> {
        container.resolve(self)
    }

    /// Resolve a control reference, or a name in the current container.
    pub fn resolve_control(
        &self,
        control: impl Resolve<'a, Control>,
    ) -> Result<&'a Control, RenderError> {
        control.resolve(self)
    }

    /// Bind a form; its root becomes the current container.
    #[must_use]
    pub fn enter_form(&self, form: &'a Form) -> Self {
        Self {
            form: Some(form),
            container: Some(form.root()),
            ..self.clone()
        }
    }

    /// Bind a nested container.
    #[must_use]
    pub fn enter_container(&self, container: &'a Container) -> Self {
        Self {
            container: Some(container),
            ..self.clone()
        }
    }

    /// Bind the current input.
    #[must_use]
    pub fn with_input(&self, input: &'a Control) -> Self {
        Self {
            input: Some(input),
            ..self.clone()
        }
    }

    /// Bind the current label.
    #[must_use]
    pub fn with_label(&self, label: Option<Html>) -> Self {
        Self {
            label,
            ..self.clone()
        }
    }

    /// Current form.
    pub fn form(&self) -> Result<&'a Form, RenderError> {
        self.form.ok_or(RenderError::NoCurrentForm)
    }

    /// Current container.
    pub fn container(&self) -> Result<&'a Container, RenderError> {
        self.container.ok_or(RenderError::NoCurrentContainer)
    }

    /// Current input.
    pub fn input(&self) -> Result<&'a Control, RenderError> {
        self.input.ok_or(RenderError::NoCurrentInput)
    }

    /// Current label, if the last `{label}` produced one.
    #[must_use]
    pub fn label(&self) -> Option<&Html> {
        self.label.as_ref()
    }

    /// Control in the current container.
    pub fn control(&self, name: &str) -> Result<&'a Control, RenderError> {
        Ok(self.container()?.control(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_forms::FormError;

    fn registry() -> FormRegistry {
        let mut form = Form::new("signup");
        form.add_text("email", "E-mail");
        form.add_container("address").add_text("city", "City");
        let mut registry = FormRegistry::new();
        registry.add(form);
        registry
    }

    #[test]
    fn test_nothing_bound() {
        let registry = registry();
        let ctx = RenderContext::new(&registry);
        assert_eq!(ctx.form().unwrap_err(), RenderError::NoCurrentForm);
        assert_eq!(ctx.container().unwrap_err(), RenderError::NoCurrentContainer);
        assert_eq!(ctx.input().unwrap_err(), RenderError::NoCurrentInput);
        assert!(ctx.label().is_none());
    }

    #[test]
    fn test_enter_form_binds_root() {
        let registry = registry();
        let ctx = RenderContext::new(&registry);
        let form = ctx.lookup_form("signup").unwrap();
        let ctx = ctx.enter_form(form);
        assert_eq!(ctx.control("email").unwrap().html_name(), "email");
    }

    #[test]
    fn test_container_scope_restores_outer() {
        let registry = registry();
        let ctx = RenderContext::new(&registry);
        let ctx = ctx.enter_form(ctx.lookup_form("signup").unwrap());
        {
            let address = ctx.container().unwrap().container("address").unwrap();
            let ctx = ctx.enter_container(address);
            assert_eq!(ctx.control("city").unwrap().html_name(), "address[city]");
            assert!(ctx.control("email").is_err());
        }
        assert!(ctx.control("email").is_ok());
    }

    #[test]
    fn test_resolve_reference_and_name() {
        let registry = registry();
        let ctx = RenderContext::new(&registry);
        let form = registry.form("signup").unwrap();
        assert_eq!(ctx.resolve_form(form).unwrap().name(), "signup");
        assert_eq!(ctx.resolve_form("signup").unwrap().name(), "signup");

        let ctx = ctx.enter_form(form);
        let name = "email".to_owned();
        assert_eq!(ctx.resolve_control(&name).unwrap().name(), "email");
        assert_eq!(
            ctx.resolve_container("address").unwrap().name(),
            "address"
        );
    }

    #[test]
    fn test_unknown_form() {
        let registry = registry();
        let ctx = RenderContext::new(&registry);
        assert_eq!(
            ctx.lookup_form("login").unwrap_err(),
            RenderError::Form(FormError::FormNotFound {
                name: "login".to_owned()
            })
        );
    }
}
