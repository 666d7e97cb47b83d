//! Directive nodes.

use crate::ArgTokenizer;

/// HTML element carrying an attribute-form directive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlElement {
    /// Tag name as written.
    pub name: String,
    /// Literal attributes in source order, excluding the directive attribute.
    /// Bare attributes have no value.
    pub attrs: Vec<(String, Option<String>)>,
}

impl HtmlElement {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Add a literal attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.attrs.push((name.into(), value.map(str::to_owned)));
        self
    }
}

/// One occurrence of a directive during compilation.
///
/// Directives fill in `opening_code` and `closing_code`; the compiler splices
/// them into the program. A block directive may rewrite its own
/// `opening_code` when its closing tag is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveNode {
    /// Directive name (`form`, `label`, ...).
    pub name: String,
    /// Cursor over the raw argument string.
    pub tokenizer: ArgTokenizer,
    /// Body text between the opening and closing tags (`None` when empty).
    pub content: Option<String>,
    /// Code emitted at the opening tag.
    pub opening_code: String,
    /// Code emitted at the closing tag.
    pub closing_code: String,
    /// Element carrying the directive when used as an attribute.
    pub html_element: Option<HtmlElement>,
    /// Line of the opening tag (1-indexed).
    pub line: usize,
}

impl DirectiveNode {
    /// Create a node for `{name args}`.
    #[must_use]
    pub fn new(name: impl Into<String>, args: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            tokenizer: ArgTokenizer::new(args),
            content: None,
            opening_code: String::new(),
            closing_code: String::new(),
            html_element: None,
            line,
        }
    }

    /// Create a node for a directive written as an element attribute.
    #[must_use]
    pub fn attribute(
        name: impl Into<String>,
        args: impl Into<String>,
        element: HtmlElement,
        line: usize,
    ) -> Self {
        Self {
            html_element: Some(element),
            ..Self::new(name, args, line)
        }
    }

    /// Raw argument string.
    #[must_use]
    pub fn args(&self) -> &str {
        self.tokenizer.source()
    }
}
