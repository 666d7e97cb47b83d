//! Minimal HTML element builder.
//!
//! [`Html`] is an element template with ordered attributes and children. Form
//! and control prototypes are stored as `Html` values and cloned before every
//! render, so in-place attribute changes never leak into persistent state.
//!
//! # Example
//!
//! ```
//! use fw_html::Html;
//!
//! let mut input = Html::el("input");
//! input.set("type", "text").set("name", "email");
//! input.add_attributes(&[("class", Some("wide".into())), ("name", None)]);
//!
//! assert_eq!(input.to_html(), r#"<input type="text" class="wide">"#);
//! ```

mod attr;
mod escape;

use std::fmt;

pub use attr::AttrValue;
pub use escape::escape_html;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Child node of an [`Html`] element.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Child {
    /// Text, escaped on output.
    Text(String),
    /// Pre-rendered HTML, emitted verbatim.
    Raw(String),
    /// Nested element.
    Element(Html),
}

/// HTML element with ordered attributes.
///
/// An element with an empty name renders only its children. This is used as a
/// neutral wrapper, e.g. for the item list of a radio button group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Html {
    name: String,
    attrs: Vec<(String, AttrValue)>,
    children: Vec<Child>,
}

impl Html {
    /// Create an element with the given tag name.
    #[must_use]
    pub fn el(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Tag name (empty for a neutral wrapper).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a void element (`<input>`, `<br>`, ...).
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS
            .iter()
            .any(|void| void.eq_ignore_ascii_case(&self.name))
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_owned(), value));
        }
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Get an attribute value as text.
    ///
    /// Returns `None` for missing attributes and boolean flags.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Remove an attribute.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.attrs.retain(|(key, _)| key != name);
        self
    }

    /// Merge attributes in order.
    ///
    /// `None` and `Some(AttrValue::Bool(false))` remove the attribute, any
    /// other value overwrites it.
    pub fn add_attributes(&mut self, attrs: &[(&str, Option<AttrValue>)]) -> &mut Self {
        for (name, value) in attrs {
            match value {
                None | Some(AttrValue::Bool(false)) => {
                    self.remove(name);
                }
                Some(value) => {
                    self.set(name, value.clone());
                }
            }
        }
        self
    }

    /// Append escaped text content.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append pre-rendered HTML.
    pub fn add_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.children.push(Child::Raw(html.into()));
        self
    }

    /// Append a child element.
    pub fn add(&mut self, child: Html) -> &mut Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Insert a child element at `index` (clamped to the child count).
    pub fn insert(&mut self, index: usize, child: Html) -> &mut Self {
        let index = index.min(self.children.len());
        self.children.insert(index, Child::Element(child));
        self
    }

    /// Render the attribute list: ` name="value"` pairs in insertion order.
    #[must_use]
    pub fn attributes(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Text(text) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(text));
                    out.push('"');
                }
            }
        }
        out
    }

    /// Render the opening tag (empty for a neutral wrapper).
    #[must_use]
    pub fn start_tag(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!("<{}{}>", self.name, self.attributes())
    }

    /// Render the closing tag (empty for void elements and neutral wrappers).
    #[must_use]
    pub fn end_tag(&self) -> String {
        if self.name.is_empty() || self.is_void() {
            return String::new();
        }
        format!("</{}>", self.name)
    }

    /// Render the element with its children.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = self.start_tag();
        if !self.is_void() {
            for child in &self.children {
                match child {
                    Child::Text(text) => out.push_str(&escape_html(text)),
                    Child::Raw(html) => out.push_str(html),
                    Child::Element(element) => out.push_str(&element.to_html()),
                }
            }
        }
        out.push_str(&self.end_tag());
        out
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_void_element() {
        let mut input = Html::el("input");
        input.set("type", "hidden").set("name", "page").set("value", "2");
        assert_eq!(
            input.to_html(),
            r#"<input type="hidden" name="page" value="2">"#
        );
        assert_eq!(input.end_tag(), "");
    }

    #[test]
    fn test_set_keeps_position() {
        let mut el = Html::el("form");
        el.set("action", "/a").set("method", "get").set("action", "/b");
        assert_eq!(el.start_tag(), r#"<form action="/b" method="get">"#);
    }

    #[test]
    fn test_add_attributes_none_removes() {
        let mut el = Html::el("input");
        el.set("class", "x").set("data-nette-rules", "[]");
        el.add_attributes(&[("data-nette-rules", None), ("id", Some("a".into()))]);
        assert_eq!(el.attributes(), r#" class="x" id="a""#);
    }

    #[test]
    fn test_boolean_attributes() {
        let mut el = Html::el("input");
        el.set("disabled", true).set("checked", false);
        assert_eq!(el.start_tag(), "<input disabled>");
    }

    #[test]
    fn test_children_and_escaping() {
        let mut label = Html::el("label");
        label.set("for", "frm-name").add_text("Name <required>");
        assert_eq!(
            label.to_html(),
            r#"<label for="frm-name">Name &lt;required&gt;</label>"#
        );
    }

    #[test]
    fn test_insert_child_first() {
        let mut label = Html::el("label");
        label.add_text("Yes");
        let mut radio = Html::el("input");
        radio.set("type", "radio");
        label.insert(0, radio);
        assert_eq!(label.to_html(), r#"<label><input type="radio">Yes</label>"#);
    }

    #[test]
    fn test_neutral_wrapper() {
        let mut wrapper = Html::el("");
        wrapper.add_html("<br>").add_text("a&b");
        assert_eq!(wrapper.start_tag(), "");
        assert_eq!(wrapper.to_html(), "<br>a&amp;b");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Html::el("form");
        original.set("action", "/search?q=x");
        let mut copy = original.clone();
        copy.set("action", "/search");
        assert_eq!(original.get_str("action"), Some("/search?q=x"));
        assert_eq!(copy.get_str("action"), Some("/search"));
    }
}
