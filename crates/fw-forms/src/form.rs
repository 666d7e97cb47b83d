//! Forms.

use std::ops::{Deref, DerefMut};

use fw_html::Html;

use crate::Container;

/// A form: the root [`Container`] plus the `<form>` element template.
///
/// Dereferences to its root container, so controls are added and looked up
/// directly on the form.
#[derive(Clone, Debug)]
pub struct Form {
    root: Container,
    element: Html,
}

impl Form {
    /// Create an empty form posting to the current URL.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut element = Html::el("form");
        element.set("action", "").set("method", "post");
        Self {
            root: Container::root(name, format!("frm-{name}")),
            element,
        }
    }

    /// Form name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Set the submission method (`get` or `post`).
    pub fn set_method(&mut self, method: &str) -> &mut Self {
        self.element.set("method", method.to_ascii_lowercase());
        self
    }

    /// Submission method as stored on the element template.
    #[must_use]
    pub fn method(&self) -> &str {
        self.element.get_str("method").unwrap_or("post")
    }

    /// Whether the form submits with GET (case-insensitive).
    #[must_use]
    pub fn is_get(&self) -> bool {
        self.method().eq_ignore_ascii_case("get")
    }

    /// Set the action URL.
    pub fn set_action(&mut self, action: &str) -> &mut Self {
        self.element.set("action", action);
        self
    }

    /// Action URL from the element template.
    #[must_use]
    pub fn action(&self) -> &str {
        self.element.get_str("action").unwrap_or_default()
    }

    /// `<form>` element template.
    #[must_use]
    pub fn element_prototype(&self) -> &Html {
        &self.element
    }

    /// Mutable `<form>` element template.
    pub fn element_prototype_mut(&mut self) -> &mut Html {
        &mut self.element
    }

    /// Root container.
    #[must_use]
    pub fn root(&self) -> &Container {
        &self.root
    }
}

impl Deref for Form {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.root
    }
}

impl DerefMut for Form {
    fn deref_mut(&mut self) -> &mut Container {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = Form::new("login");
        assert_eq!(form.name(), "login");
        assert_eq!(form.method(), "post");
        assert!(!form.is_get());
        assert_eq!(form.action(), "");
    }

    #[test]
    fn test_method_is_case_insensitive() {
        let mut form = Form::new("search");
        form.set_method("GET");
        assert!(form.is_get());
        assert_eq!(form.method(), "get");
    }

    #[test]
    fn test_method_set_on_prototype() {
        let mut form = Form::new("search");
        form.element_prototype_mut().set("method", "Get");
        assert!(form.is_get());
    }

    #[test]
    fn test_control_ids_include_form_name() {
        let mut form = Form::new("login");
        form.add_text("user", "User");
        assert_eq!(form.control("user").unwrap().html_id(), "frm-login-user");
    }
}
