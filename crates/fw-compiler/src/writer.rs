//! Placeholder code writer.
//!
//! Expands code-fragment templates into Rust source. Placeholders:
//!
//! | Placeholder   | Expansion |
//! |---------------|-----------|
//! | `%node.word`  | next word of the directive arguments, as a word |
//! | `%node.array` | remaining words, as an attribute list |
//! | `%N.word`     | positional argument `N`, as a word |
//! | `%N.raw`      | positional argument `N`, verbatim |
//! | `%N.var`      | positional argument `N`, as a value |
//! | `%runtime`    | path of the runtime crate |
//!
//! A word is a quoted string literal for [`Token::Literal`] and the bare
//! expression for [`Token::Expression`]. Attribute lists expand to a slice
//! expression `&[("name", Some(value.into())), ...]` accepted by
//! `Html::add_attributes`.

use crate::error::CompileError;
use crate::tokenizer::{ArgTokenizer, Token};

/// Value of a single attribute in a generated attribute list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrArg {
    /// `name=value`
    Value(Token),
    /// Bare `name`, rendered as a boolean flag.
    Flag,
    /// Explicitly absent: removes the attribute when merged.
    Null,
}

/// Positional argument passed to [`CodeWriter::write`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterArg {
    /// Plain text: a raw word for `.word`, code for `.raw`, a string for `.var`.
    Text(String),
    /// Ordered attribute list.
    Attrs(Vec<(String, AttrArg)>),
}

/// Expands placeholder templates against one directive's arguments.
pub struct CodeWriter<'a> {
    tokenizer: &'a mut ArgTokenizer,
    runtime_path: &'a str,
}

impl<'a> CodeWriter<'a> {
    /// Create a writer reading `%node.*` words from `tokenizer`.
    pub fn new(tokenizer: &'a mut ArgTokenizer, runtime_path: &'a str) -> Self {
        Self {
            tokenizer,
            runtime_path,
        }
    }

    /// Expand `template`.
    ///
    /// An unknown placeholder or a missing argument is a bug in the calling
    /// directive and is reported as [`CompileError::Internal`].
    ///
    /// # Example
    ///
    /// ```
    /// use fw_compiler::{ArgTokenizer, CodeWriter};
    ///
    /// let mut tokens = ArgTokenizer::new("email class=wide required");
    /// let code = CodeWriter::new(&mut tokens, "rt")
    ///     .write("f(%node.word, %node.array)", &[])
    ///     .unwrap();
    /// assert_eq!(
    ///     code,
    ///     r#"f("email", &[("class", Some("wide".into())), ("required", Some(true.into()))])"#
    /// );
    /// ```
    pub fn write(&mut self, template: &str, args: &[WriterArg]) -> Result<String, CompileError> {
        let mut out = String::with_capacity(template.len() + 32);
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let (expansion, consumed) = if let Some(tail) = after.strip_prefix("runtime") {
                (self.runtime_path.to_owned(), after.len() - tail.len())
            } else if let Some(tail) = after.strip_prefix("node.word") {
                let token = self.tokenizer.fetch_token().ok_or_else(|| {
                    CompileError::Internal("%node.word with no words left".to_owned())
                })?;
                (format_token(&token), after.len() - tail.len())
            } else if let Some(tail) = after.strip_prefix("node.array") {
                let attrs = parse_attrs(&self.tokenizer.fetch_all());
                (format_attrs(&attrs), after.len() - tail.len())
            } else if let Some((index, mode, tail)) = split_positional(after) {
                let arg = args.get(index).ok_or_else(|| {
                    CompileError::Internal(format!("placeholder %{index} has no argument"))
                })?;
                (format_arg(arg, mode)?, after.len() - tail.len())
            } else {
                ("%".to_owned(), 0)
            };

            out.push_str(&expansion);
            rest = &after[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Format a word: quoted literal or bare expression.
#[must_use]
pub fn format_word(word: &str) -> String {
    format_token(&Token::parse(word))
}

/// Format a classified token.
#[must_use]
pub fn format_token(token: &Token) -> String {
    match token {
        Token::Literal(text) => quote(text),
        Token::Expression(expr) => expr.clone(),
    }
}

/// Parse `name=value` and bare `name` words into an attribute list.
#[must_use]
pub fn parse_attrs(words: &[String]) -> Vec<(String, AttrArg)> {
    words
        .iter()
        .map(|word| match word.split_once('=') {
            Some((name, value)) => (name.to_owned(), AttrArg::Value(Token::parse(value))),
            None => (word.clone(), AttrArg::Flag),
        })
        .collect()
}

/// Format an attribute list as a slice expression.
#[must_use]
pub fn format_attrs(attrs: &[(String, AttrArg)]) -> String {
    let items: Vec<String> = attrs
        .iter()
        .map(|(name, value)| {
            let value = match value {
                AttrArg::Value(Token::Literal(text)) => format!("Some({}.into())", quote(text)),
                AttrArg::Value(Token::Expression(expr)) => format!("Some(({expr}).into())"),
                AttrArg::Flag => "Some(true.into())".to_owned(),
                AttrArg::Null => "None".to_owned(),
            };
            format!("({}, {value})", quote(name))
        })
        .collect();
    format!("&[{}]", items.join(", "))
}

/// Rust string literal for `text`.
fn quote(text: &str) -> String {
    format!("{text:?}")
}

/// Format mode of a positional placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Word,
    Raw,
    Var,
}

/// Split `N.mode` off the start of `s`.
fn split_positional(s: &str) -> Option<(usize, Mode, &str)> {
    let digits = s.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let index = s[..digits].parse().ok()?;
    let after = s[digits..].strip_prefix('.')?;
    [("word", Mode::Word), ("raw", Mode::Raw), ("var", Mode::Var)]
        .into_iter()
        .find_map(|(name, mode)| after.strip_prefix(name).map(|tail| (index, mode, tail)))
}

fn format_arg(arg: &WriterArg, mode: Mode) -> Result<String, CompileError> {
    match (arg, mode) {
        (WriterArg::Text(text), Mode::Word) => Ok(format_word(text)),
        (WriterArg::Text(text), Mode::Raw) => Ok(text.clone()),
        (WriterArg::Text(text), Mode::Var) => Ok(quote(text)),
        (WriterArg::Attrs(attrs), Mode::Raw | Mode::Var) => Ok(format_attrs(attrs)),
        (WriterArg::Attrs(_), Mode::Word) => Err(CompileError::Internal(
            "attribute list cannot be formatted as a word".to_owned(),
        )),
    }
}
