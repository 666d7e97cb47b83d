use fw_compiler::{Compiler, DEFAULT_RUNTIME_PATH};
use fw_forms::{Form, FormRegistry};
use fw_runtime::{LEGACY_BROWSER_MARKER, RenderContext, render_form_begin, render_form_end};
use pretty_assertions::assert_eq;

fn end(form: &Form) -> String {
    let mut out = String::new();
    render_form_end(&mut out, form);
    out
}

fn search_form() -> Form {
    let mut form = Form::new("search");
    form.set_method("get").set_action("/search?q=x&page=2");
    form.add_text("q", "Query");
    form
}

#[test]
fn test_get_form_preserves_missing_query_parameter() {
    let form = search_form();
    let out = end(&form);
    assert_eq!(
        out,
        format!(
            "<div><input type=\"hidden\" name=\"page\" value=\"2\">{LEGACY_BROWSER_MARKER}</div>\n</form>\n"
        )
    );
    assert_eq!(out.matches(r#"type="hidden""#).count(), 1);
}

#[test]
fn test_get_form_keeps_query_order() {
    let mut form = Form::new("search");
    form.set_method("get")
        .set_action("/list?sort=name&q=x&dir=asc&sort=date");
    form.add_text("q", "Query");
    form.add_text("limit", "Limit");
    assert_eq!(
        end(&form),
        concat!(
            "<div>",
            r#"<input type="hidden" name="sort" value="name">"#,
            r#"<input type="hidden" name="dir" value="asc">"#,
            r#"<input type="hidden" name="sort" value="date">"#,
            "</div>\n</form>\n"
        )
    );
}

#[test]
fn test_post_form_ignores_query() {
    let mut form = Form::new("edit");
    form.set_action("/edit?id=7");
    form.add_text("title", "Title");
    form.add_text("slug", "Slug");
    assert_eq!(end(&form), "</form>\n");
}

#[test]
fn test_hidden_controls_rendered_once() {
    let mut form = Form::new("edit");
    form.add_text("title", "Title");
    form.add_text("slug", "Slug");
    form.add_hidden("token", "abc");
    form.add_hidden("id", "7");
    form.add_hidden("step", "2");

    form.control("id").unwrap().set_rendered(true);
    let step = form.control("step").unwrap().get_control(&[]).to_html();
    assert_eq!(step, r#"<input type="hidden" name="step" id="frm-edit-step" value="2">"#);

    let first = end(&form);
    assert_eq!(
        first,
        "<div><input type=\"hidden\" name=\"token\" id=\"frm-edit-token\" value=\"abc\"></div>\n</form>\n"
    );
    assert!(form.control("token").unwrap().is_rendered());

    let second = end(&form);
    assert_eq!(second, "</form>\n");
}

#[test]
fn test_nested_hidden_controls_included() {
    let mut form = Form::new("order");
    form.add_text("a", "A");
    form.add_text("b", "B");
    form.add_container("meta").add_hidden("step", "2");
    assert_eq!(
        end(&form),
        "<div><input type=\"hidden\" name=\"meta[step]\" id=\"frm-order-meta-step\" value=\"2\"></div>\n</form>\n"
    );
}

#[test]
fn test_legacy_marker_depends_on_text_input_count() {
    let mut form = Form::new("f");
    assert!(end(&form).contains(LEGACY_BROWSER_MARKER));

    form.add_text("a", "A");
    form.add_textarea("note", "Note");
    assert!(end(&form).contains(LEGACY_BROWSER_MARKER));

    form.add_container("inner").add_password("b", "B");
    assert!(!end(&form).contains(LEGACY_BROWSER_MARKER));
}

#[test]
fn test_get_begin_strips_query() {
    let form = search_form();
    let mut out = String::new();
    render_form_begin(&mut out, &form, &[]);
    assert_eq!(out, r#"<form action="/search" method="get">"#);
    assert_eq!(form.action(), "/search?q=x&page=2");
}

const SIGNUP_TEMPLATE: &str = concat!(
    "{form signup class=wide}\n",
    "{label email /}{input email}\n",
    r#"<input class="big" data-nette-rules="x" n:input="phone">"#,
    "\n",
    "{formContainer address}{input city}{/formContainer}\n",
    "{/form}"
);

const EDIT_TEMPLATE: &str = "{form edit}{input token}{/form}";

// Compiler output for the templates above, checked by
// `test_fixtures_match_compiler_output`.
include!("fixtures/signup.rs");
include!("fixtures/edit.rs");

fn compile_to_rust(template: &str, function_name: &str) -> String {
    Compiler::default()
        .compile(template)
        .unwrap()
        .to_rust_source(function_name, DEFAULT_RUNTIME_PATH)
}

#[test]
fn test_fixtures_match_compiler_output() {
    assert_eq!(
        compile_to_rust(SIGNUP_TEMPLATE, "render_signup"),
        include_str!("fixtures/signup.rs")
    );
    assert_eq!(
        compile_to_rust(EDIT_TEMPLATE, "render_edit"),
        include_str!("fixtures/edit.rs")
    );
}

fn signup_registry() -> FormRegistry {
    let mut form = Form::new("signup");
    form.add_text("email", "E-mail").with_rules("[required]");
    form.add_text("phone", "Phone").with_rules("[phone]");
    form.add_container("address").add_text("city", "City");
    form.add_hidden("token", "t1");
    let mut registry = FormRegistry::new();
    registry.add(form);
    registry
}

#[test]
fn test_compiled_template_shape() {
    let registry = signup_registry();
    let mut out = String::new();
    render_signup(&mut out, RenderContext::new(&registry)).unwrap();
    assert_eq!(
        out,
        concat!(
            r#"<form action="" method="post" class="wide">"#,
            "\n",
            r#"<label for="frm-signup-email">E-mail</label>"#,
            r#"<input type="text" name="email" id="frm-signup-email" data-nette-rules="[required]" value="">"#,
            "\n",
            r#"<input type="text" name="phone" id="frm-signup-phone" value="" class="big" data-nette-rules="x">"#,
            "\n",
            r#"<input type="text" name="address[city]" id="frm-signup-address-city" value="">"#,
            "\n",
            r#"<div><input type="hidden" name="token" id="frm-signup-token" value="t1"></div>"#,
            "\n</form>\n"
        )
    );
}

fn edit_registry() -> FormRegistry {
    let mut form = Form::new("edit");
    form.add_text("title", "Title");
    form.add_text("slug", "Slug");
    form.add_hidden("token", "abc");
    let mut registry = FormRegistry::new();
    registry.add(form);
    registry
}

#[test]
fn test_hidden_input_rendered_in_template_is_not_repeated() {
    let registry = edit_registry();
    let mut out = String::new();
    render_edit(&mut out, RenderContext::new(&registry)).unwrap();
    assert_eq!(
        out,
        concat!(
            r#"<form action="" method="post">"#,
            r#"<input type="hidden" name="token" id="frm-edit-token" value="abc">"#,
            "</form>\n"
        )
    );
    assert_eq!(out.matches(r#"name="token""#).count(), 1);
    assert!(registry.form("edit").unwrap().control("token").unwrap().is_rendered());
}

#[test]
fn test_compiled_template_missing_form() {
    let registry = FormRegistry::new();
    let mut out = String::new();
    let err = render_signup(&mut out, RenderContext::new(&registry)).unwrap_err();
    assert_eq!(err.to_string(), "form 'signup' does not exist");
}
