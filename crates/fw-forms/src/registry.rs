//! Page-level form registry.

use crate::{Form, FormError};

/// Named forms available to a template.
#[derive(Clone, Debug, Default)]
pub struct FormRegistry {
    forms: Vec<Form>,
}

impl FormRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form, replacing one with the same name.
    pub fn add(&mut self, form: Form) -> &mut Self {
        if let Some(slot) = self.forms.iter_mut().find(|f| f.name() == form.name()) {
            *slot = form;
        } else {
            self.forms.push(form);
        }
        self
    }

    /// Look up a form by name.
    pub fn form(&self, name: &str) -> Result<&Form, FormError> {
        self.forms
            .iter()
            .find(|form| form.name() == name)
            .ok_or_else(|| FormError::FormNotFound {
                name: name.to_owned(),
            })
    }
}
