#[allow(unused_variables, clippy::all)]
pub fn render_signup(out: &mut String, ctx: ::fw_runtime::RenderContext<'_>) -> Result<(), ::fw_runtime::RenderError> {
    let form = ctx.lookup_form("signup")?; let ctx = ctx.enter_form(form); ::fw_runtime::render_form_begin(out, form, &[("class", Some("wide".into()))]);
    out.push_str("\n");
    let ctx = ctx.with_label(ctx.control("email")?.label(None)); if let Some(label) = ctx.label() { out.push_str(&label.clone().add_attributes(&[]).to_html()); }
    out.push_str(&ctx.control("email")?.get_control(&[]).add_attributes(&[]).to_html());
    out.push_str("\n<input");
    out.push_str(&ctx.control("phone")?.get_control(&[]).add_attributes(&[("class", None), ("data-nette-rules", None)]).attributes());
    out.push_str(" class=\"big\" data-nette-rules=\"x\">\n");
    { let form_container = ctx.container()?.container("address")?; let ctx = ctx.enter_container(form_container);
    out.push_str(&ctx.control("city")?.get_control(&[]).add_attributes(&[]).to_html());
    }
    out.push_str("\n");
    ::fw_runtime::render_form_end(out, ctx.form()?);
    Ok(())
}
