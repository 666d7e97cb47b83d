//! Render-time support for compiled form templates.
//!
//! Code generated by `fw-compiler` calls into this crate: it threads a
//! [`RenderContext`] through the template and calls [`render_form_begin`] and
//! [`render_form_end`] around each form.
//!
//! # Example
//!
//! ```
//! use fw_forms::{Form, FormRegistry};
//! use fw_runtime::{RenderContext, render_form_begin, render_form_end};
//!
//! let mut form = Form::new("search");
//! form.set_method("get").set_action("/search?q=rust&page=2");
//! form.add_text("q", "Query");
//! let mut registry = FormRegistry::new();
//! registry.add(form);
//!
//! let ctx = RenderContext::new(&registry);
//! let form = ctx.lookup_form("search").unwrap();
//! let mut out = String::new();
//! render_form_begin(&mut out, form, &[]);
//! render_form_end(&mut out, form);
//!
//! assert!(out.starts_with(r#"<form action="/search" method="get">"#));
//! assert!(out.contains(r#"<input type="hidden" name="page" value="2">"#));
//! ```

mod context;
mod error;
mod query;
mod render;

pub use context::{RenderContext, Resolve};
pub use error::RenderError;
pub use query::{parse_query, query_of};
pub use render::{LEGACY_BROWSER_MARKER, render_form_begin, render_form_end};
