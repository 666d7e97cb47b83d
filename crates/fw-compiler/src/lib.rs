//! Compiler for form directives in templates.
//!
//! Turns templates containing `{form}`, `{formContainer}`, `{label}` and
//! `{input}` (plus the attribute form `<input n:input="name">`) into Rust
//! code that renders the forms through the `fw-runtime` crate.
//!
//! # Architecture
//!
//! - [`Compiler`] scans a template and drives the directives
//! - [`Directive`] compiles one directive into a [`DirectiveNode`]'s code
//! - [`CodeWriter`] expands code-fragment templates with argument placeholders
//! - [`ContextStack`] tracks which form and container are bound while compiling
//!
//! Directive names are classified by [`Token`]: `signup` is a literal key
//! looked up at render time, `$form` is a Rust expression used as-is.
//!
//! # Example
//!
//! ```
//! use fw_compiler::{Compiler, CompilerConfig};
//!
//! let template = "{form signup}{label email /}{input email}{/form}";
//! let compiled = Compiler::new(CompilerConfig::default()).compile(template).unwrap();
//! let source = compiled.to_rust_source("render_signup", "::fw_runtime");
//! assert!(source.contains("render_form_begin"));
//! ```

mod compiler;
mod config;
mod context;
pub mod directive;
mod error;
mod node;
mod parser;
mod tokenizer;
mod unit;
mod writer;

pub use compiler::{CompiledTemplate, Compiler, Segment};
pub use config::{CompilerConfig, DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_RUNTIME_PATH};
pub use context::{ContextBinding, ContextStack};
pub use directive::Directive;
pub use error::CompileError;
pub use node::{DirectiveNode, HtmlElement};
pub use tokenizer::{ArgTokenizer, EXPRESSION_SIGIL, Token};
pub use unit::CompileUnit;
pub use writer::{AttrArg, CodeWriter, WriterArg, format_attrs, format_token, format_word, parse_attrs};
