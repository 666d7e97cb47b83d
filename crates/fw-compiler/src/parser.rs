//! Template scanning.
//!
//! Finds form directive tags (`{form x}`, `{/form}`, `{label x /}`) and start
//! tags of HTML elements carrying an attribute-form directive
//! (`<input n:input="x">`). Everything else is template text.

use crate::directive::Directive;

/// Literal attribute of a scanned element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawAttr {
    pub name: String,
    pub value: Option<String>,
    /// Source text including leading whitespace.
    pub raw: String,
}

/// Tag found in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedTag {
    /// `{name args}` or `{name args /}`
    Open {
        directive: Directive,
        args: String,
        self_closing: bool,
    },
    /// `{/name}`
    Close { directive: Directive },
    /// `<name ... prefix:directive="args" ...>`
    Element {
        name: String,
        directive: Directive,
        args: String,
        /// Other attributes in source order.
        attrs: Vec<RawAttr>,
        /// Source text after the last attribute (`>` or ` />`).
        tail: String,
    },
}

/// Find the next tag in `s`.
///
/// Returns the tag with its start and end byte offsets, or `None` if the rest
/// of `s` is plain text.
pub(crate) fn next_tag(s: &str, attribute_prefix: &str) -> Option<(ParsedTag, usize, usize)> {
    let mut from = 0;
    while let Some(offset) = s[from..].find(['{', '<']) {
        let start = from + offset;
        let rest = &s[start..];
        let parsed = if rest.starts_with('{') {
            parse_brace(rest)
        } else {
            parse_element(rest, attribute_prefix)
        };
        if let Some((tag, len)) = parsed {
            return Some((tag, start, start + len));
        }
        from = start + 1;
    }
    None
}

/// Parse `{...}` at the start of `s`.
fn parse_brace(s: &str) -> Option<(ParsedTag, usize)> {
    let end = find_unquoted(s, 1, '}')?;
    let content = &s[1..end];

    if let Some(name) = content.strip_prefix('/') {
        let directive = Directive::from_name(name.trim_end())?;
        if !directive.is_paired() {
            return None;
        }
        return Some((ParsedTag::Close { directive }, end + 1));
    }

    let name_end = content
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(content.len());
    let directive = Directive::from_name(&content[..name_end])?;

    // `{name /}` or `{name args /}`; a slash ending a value (`action=/find/`) is data.
    let mut args = content[name_end..].trim();
    let self_closing = args
        .strip_suffix('/')
        .is_some_and(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace));
    if self_closing {
        args = args[..args.len() - 1].trim_end();
    }

    Some((
        ParsedTag::Open {
            directive,
            args: args.to_owned(),
            self_closing,
        },
        end + 1,
    ))
}

/// Parse an HTML start tag at the start of `s`.
///
/// Only elements with an attribute-form directive are returned.
fn parse_element(s: &str, attribute_prefix: &str) -> Option<(ParsedTag, usize)> {
    let name_len = s[1..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
        .unwrap_or(s.len() - 1);
    let name = &s[1..=name_len];
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut attrs = Vec::new();
    let mut pos = 1 + name_len;
    let tail_start;
    loop {
        let rest = &s[pos..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with('>') || trimmed.starts_with("/>") {
            tail_start = pos;
            pos += rest.len() - trimmed.len() + if trimmed.starts_with('>') { 1 } else { 2 };
            break;
        }
        let (attr, len) = parse_attr(rest)?;
        attrs.push(attr);
        pos += len;
    }

    let (index, directive) = attrs.iter().enumerate().find_map(|(i, attr)| {
        let name = attr.name.strip_prefix(attribute_prefix)?;
        Directive::from_name(name)
            .filter(|d| d.supports_attribute())
            .map(|d| (i, d))
    })?;
    let args = attrs.remove(index).value.unwrap_or_default();

    Some((
        ParsedTag::Element {
            name: name.to_owned(),
            directive,
            args,
            attrs,
            tail: s[tail_start..pos].to_owned(),
        },
        pos,
    ))
}

/// Parse one attribute with its leading whitespace.
///
/// Supports `name`, `name=value`, `name="value"`, `name='value'`.
fn parse_attr(s: &str) -> Option<(RawAttr, usize)> {
    let leading = s.len() - s.trim_start().len();
    if leading == 0 {
        return None;
    }
    let body = &s[leading..];
    let name_len = body
        .find(|c: char| c.is_whitespace() || c == '=' || c == '>')
        .unwrap_or(body.len());
    if name_len == 0 || name_len == body.len() {
        return None;
    }
    let name = &body[..name_len];

    let after_name = &body[name_len..];
    let (value, value_len) = if let Some(after_eq) = after_name.strip_prefix('=') {
        let (value, len) = parse_attr_value(after_eq)?;
        (Some(value), len + 1)
    } else {
        (None, 0)
    };

    let len = leading + name_len + value_len;
    Some((
        RawAttr {
            name: name.to_owned(),
            value: value.map(str::to_owned),
            raw: s[..len].to_owned(),
        },
        len,
    ))
}

/// Parse an attribute value; returns the value and the bytes consumed.
fn parse_attr_value(s: &str) -> Option<(&str, usize)> {
    match s.chars().next()? {
        quote @ ('"' | '\'') => {
            let end = s[1..].find(quote)? + 1;
            Some((&s[1..end], end + 1))
        }
        _ => {
            let end = s
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(s.len());
            Some((&s[..end], end))
        }
    }
}

/// Byte index of the first `target` at or after `from` that is not inside quotes.
fn find_unquoted(s: &str, from: usize, target: char) -> Option<usize> {
    let mut quote = None;
    for (i, c) in s[from..].char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == target => return Some(from + i),
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag() {
        let (tag, start, end) = next_tag("<p>{form signup class=x}</p>", "n:").unwrap();
        assert_eq!(
            tag,
            ParsedTag::Open {
                directive: Directive::Form,
                args: "signup class=x".to_owned(),
                self_closing: false,
            }
        );
        assert_eq!((start, end), (3, 24));
    }

    #[test]
    fn test_self_closing_label() {
        let (tag, _, _) = next_tag("{label name /}", "n:").unwrap();
        assert_eq!(
            tag,
            ParsedTag::Open {
                directive: Directive::Label,
                args: "name".to_owned(),
                self_closing: true,
            }
        );
    }

    #[test]
    fn test_trailing_slash_in_value_is_not_self_closing() {
        let (tag, _, _) = next_tag("{form search action=/find/}", "n:").unwrap();
        assert_eq!(
            tag,
            ParsedTag::Open {
                directive: Directive::Form,
                args: "search action=/find/".to_owned(),
                self_closing: false,
            }
        );
    }

    #[test]
    fn test_close_tag() {
        let (tag, _, _) = next_tag("{/formContainer}", "n:").unwrap();
        assert_eq!(
            tag,
            ParsedTag::Close {
                directive: Directive::FormContainer
            }
        );
    }

    #[test]
    fn test_unknown_braces_are_text() {
        assert!(next_tag("{if $x} {$var} {/if} {/input} { form}", "n:").is_none());
    }

    #[test]
    fn test_quoted_brace_in_args() {
        let (tag, _, end) = next_tag("{form f title='a}b'}rest", "n:").unwrap();
        assert!(matches!(tag, ParsedTag::Open { ref args, .. } if args == "f title='a}b'"));
        assert_eq!(end, 20);
    }

    #[test]
    fn test_element_with_attribute_directive() {
        let src = r#"<input type=text n:input="email" class='wide' required>"#;
        let (tag, start, end) = next_tag(src, "n:").unwrap();
        assert_eq!((start, end), (0, src.len()));
        let ParsedTag::Element {
            name,
            directive,
            args,
            attrs,
            tail,
        } = tag
        else {
            panic!("expected element");
        };
        assert_eq!(name, "input");
        assert_eq!(directive, Directive::Input);
        assert_eq!(args, "email");
        let names: Vec<_> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["type", "class", "required"]);
        assert_eq!(attrs[1].value.as_deref(), Some("wide"));
        assert_eq!(attrs[1].raw, " class='wide'");
        assert_eq!(attrs[2].value, None);
        assert_eq!(tail, ">");
    }

    #[test]
    fn test_element_without_directive_is_text() {
        assert!(next_tag(r#"<div class="x"><br/></div>"#, "n:").is_none());
    }

    #[test]
    fn test_self_closing_element_tail() {
        let (tag, _, _) = next_tag(r#"<input n:input="a" />"#, "n:").unwrap();
        assert!(matches!(tag, ParsedTag::Element { ref tail, .. } if tail == " />"));
    }

    #[test]
    fn test_custom_prefix() {
        assert!(next_tag(r#"<input n:input="a">"#, "fw:").is_none());
        assert!(next_tag(r#"<input fw:input="a">"#, "fw:").is_some());
    }
}
