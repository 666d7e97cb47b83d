//! Form begin and end rendering.

use std::sync::LazyLock;

use fw_forms::Form;
use fw_html::{AttrValue, Html};
use regex::Regex;

use crate::query::{parse_query, query_of};

/// Disabled dummy input for forms with fewer than two free-text inputs.
///
/// Old Internet Explorer versions submit a single-text-input form on Enter
/// without the submit button's value.
pub const LEGACY_BROWSER_MARKER: &str =
    r#"<!--[if IE]><input type=IEbug disabled style="display:none"><![endif]-->"#;

/// First query string in a URL, up to the fragment.
static QUERY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?[^#]*").unwrap());

/// Render the `<form>` start tag.
///
/// The form's element template is cloned before `attrs` are merged. For GET
/// forms the query string is removed from the action; [`render_form_end`]
/// emits its parameters as hidden fields instead.
pub fn render_form_begin(out: &mut String, form: &Form, attrs: &[(&str, Option<AttrValue>)]) {
    let mut el = form.element_prototype().clone();
    if form.is_get() {
        let action = QUERY_RE.replace(form.action(), "");
        el.set("action", action.into_owned());
    }
    el.add_attributes(attrs);
    out.push_str(&el.start_tag());
}

/// Render hidden fields and the `</form>` end tag.
///
/// Emits, inside one `<div>`:
/// 1. for GET forms, a hidden input per action query parameter that has no
///    control of the same name, in query order
/// 2. every hidden control not yet rendered, marking it rendered
/// 3. [`LEGACY_BROWSER_MARKER`] if the form has fewer than two free-text
///    inputs
///
/// The `<div>` is omitted when there is nothing to put in it.
pub fn render_form_end(out: &mut String, form: &Form) {
    let mut s = String::new();

    if form.is_get() {
        let params = query_of(form.action()).map(parse_query).unwrap_or_default();
        for (name, value) in params {
            if form.contains(&name) {
                continue;
            }
            tracing::debug!(form = form.name(), param = %name, "Preserving GET parameter");
            let mut input = Html::el("input");
            input
                .set("type", "hidden")
                .set("name", name)
                .set("value", value);
            s.push_str(&input.to_html());
        }
    }

    for control in form.controls(true, |c| c.kind().is_hidden()) {
        if !control.is_rendered() {
            s.push_str(&control.get_control(&[]).to_html());
        }
    }

    let text_inputs = form.controls(true, |c| c.kind().is_text_input()).len();
    if text_inputs < 2 {
        tracing::trace!(form = form.name(), text_inputs, "Adding legacy browser marker");
        s.push_str(LEGACY_BROWSER_MARKER);
    }

    if !s.is_empty() {
        out.push_str("<div>");
        out.push_str(&s);
        out.push_str("</div>\n");
    }
    out.push_str(&form.element_prototype().end_tag());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_post_begin_keeps_action() {
        let mut form = Form::new("f");
        form.set_action("/save?id=3");
        let mut out = String::new();
        render_form_begin(&mut out, &form, &[]);
        assert_eq!(out, r#"<form action="/save?id=3" method="post">"#);
    }

    #[test]
    fn test_get_begin_strips_query_keeps_fragment() {
        let mut form = Form::new("f");
        form.set_method("GET").set_action("/search?q=x&page=2#results");
        let mut out = String::new();
        render_form_begin(&mut out, &form, &[("class", Some("search".into()))]);
        assert_eq!(
            out,
            r#"<form action="/search#results" method="get" class="search">"#
        );
        assert_eq!(form.action(), "/search?q=x&page=2#results");
    }

    #[test]
    fn test_begin_attrs_override_prototype() {
        let form = Form::new("f");
        let mut out = String::new();
        render_form_begin(&mut out, &form, &[("method", Some("get".into())), ("action", None)]);
        assert_eq!(out, r#"<form method="get">"#);
    }

    #[test]
    fn test_end_without_extras() {
        let mut form = Form::new("f");
        form.add_text("a", "A");
        form.add_text("b", "B");
        let mut out = String::new();
        render_form_end(&mut out, &form);
        assert_eq!(out, "</form>\n");
    }

    #[test]
    fn test_end_with_marker_only() {
        let form = Form::new("f");
        let mut out = String::new();
        render_form_end(&mut out, &form);
        assert_eq!(out, format!("<div>{LEGACY_BROWSER_MARKER}</div>\n</form>\n"));
    }
}
