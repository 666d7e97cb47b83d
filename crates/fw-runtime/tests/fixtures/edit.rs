#[allow(unused_variables, clippy::all)]
pub fn render_edit(out: &mut String, ctx: ::fw_runtime::RenderContext<'_>) -> Result<(), ::fw_runtime::RenderError> {
    let form = ctx.lookup_form("edit")?; let ctx = ctx.enter_form(form); ::fw_runtime::render_form_begin(out, form, &[]);
    out.push_str(&ctx.control("token")?.get_control(&[]).add_attributes(&[]).to_html());
    ::fw_runtime::render_form_end(out, ctx.form()?);
    Ok(())
}
