//! Form and control model.
//!
//! A [`FormRegistry`] holds the named forms of a page. Each [`Form`] is a
//! [`Container`] of [`Component`]s: controls or nested containers. Controls
//! render themselves into [`fw_html::Html`] elements; the rendered marker on
//! each control lets several rendering paths agree on at-most-once emission.
//!
//! # Example
//!
//! ```
//! use fw_forms::{Form, FormRegistry};
//!
//! let mut form = Form::new("search");
//! form.set_method("get").set_action("/search?q=rust&page=2");
//! form.add_text("q", "Query");
//!
//! let mut registry = FormRegistry::new();
//! registry.add(form);
//!
//! let form = registry.form("search").unwrap();
//! assert!(form.contains("q"));
//! assert!(!form.contains("page"));
//! ```

mod container;
mod control;
mod error;
mod form;
mod kind;
mod radio;
mod registry;

pub use container::{Component, Container};
pub use control::{Control, VALIDATION_RULES_ATTR};
pub use error::FormError;
pub use form::Form;
pub use kind::ControlKind;
pub use registry::FormRegistry;
