//! Form controls.

use std::cell::Cell;

use fw_html::Html;

use crate::ControlKind;
use crate::radio;

/// Attribute carrying serialized validation rules for client-side scripts.
pub const VALIDATION_RULES_ATTR: &str = "data-nette-rules";

/// A single form control.
///
/// Controls are created through [`Container`](crate::Container) builder
/// methods, which assign the HTML `name` and `id` from the control's position
/// in the form tree.
#[derive(Clone, Debug)]
pub struct Control {
    name: String,
    kind: ControlKind,
    caption: Option<String>,
    value: Option<String>,
    rules: Option<String>,
    html_name: String,
    html_id: String,
    prototype: Html,
    rendered: Cell<bool>,
}

impl Control {
    pub(crate) fn new(name: &str, kind: ControlKind, html_name: String, html_id: String) -> Self {
        let mut prototype = match kind {
            ControlKind::TextArea => Html::el("textarea"),
            ControlKind::Select { .. } => Html::el("select"),
            _ => Html::el("input"),
        };
        if let Some(input_type) = kind.input_type() {
            prototype.set("type", input_type);
        }
        Self {
            name: name.to_owned(),
            kind,
            caption: None,
            value: None,
            rules: None,
            html_name,
            html_id,
            prototype,
            rendered: Cell::new(false),
        }
    }

    /// Component name within its container.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Control kind.
    #[must_use]
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    /// HTML `name` attribute (includes parent container names).
    #[must_use]
    pub fn html_name(&self) -> &str {
        &self.html_name
    }

    /// HTML `id` attribute.
    #[must_use]
    pub fn html_id(&self) -> &str {
        &self.html_id
    }

    /// Label caption.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Set the label caption.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.caption = Some(caption.into());
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Set the current value.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Attach serialized validation rules, rendered as [`VALIDATION_RULES_ATTR`].
    pub fn with_rules(&mut self, rules: impl Into<String>) -> &mut Self {
        self.rules = Some(rules.into());
        self
    }

    /// Control element template.
    #[must_use]
    pub fn control_prototype(&self) -> &Html {
        &self.prototype
    }

    /// Mutable control element template, for extra attributes.
    pub fn control_prototype_mut(&mut self) -> &mut Html {
        &mut self.prototype
    }

    /// Whether some rendering path already emitted this control.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered.get()
    }

    /// Set the rendered marker.
    pub fn set_rendered(&self, rendered: bool) {
        self.rendered.set(rendered);
    }

    /// Label element with an optional caption override.
    ///
    /// Returns `None` for controls without a label (hidden fields, buttons,
    /// checkboxes).
    #[must_use]
    pub fn label(&self, caption: Option<&str>) -> Option<Html> {
        if !self.kind.has_label() {
            return None;
        }
        let mut label = self.base_label(caption);
        if matches!(self.kind, ControlKind::RadioList { .. }) {
            label.remove("for");
        }
        Some(label)
    }

    /// Label element for attribute-form rendering.
    ///
    /// `parts[0]` overrides the caption. Controls without a label yield an
    /// empty `<label>` element so the caller always has attributes to merge.
    #[must_use]
    pub fn get_label(&self, parts: &[&str]) -> Html {
        self.label(parts.first().copied())
            .unwrap_or_else(|| Html::el("label"))
    }

    /// Control element.
    ///
    /// For radio lists `parts[0]` selects a single item and `parts[1]`
    /// overrides its caption; other kinds ignore `parts`. Sets the rendered
    /// marker.
    #[must_use]
    pub fn get_control(&self, parts: &[&str]) -> Html {
        self.rendered.set(true);

        let mut el = self.prototype.clone();
        el.set("name", self.html_name.as_str());
        el.set("id", self.html_id.as_str());
        if let Some(rules) = &self.rules {
            el.set(VALIDATION_RULES_ATTR, rules.as_str());
        }

        match &self.kind {
            ControlKind::Text | ControlKind::Hidden => {
                el.set("value", self.value.as_deref().unwrap_or_default());
            }
            ControlKind::Password | ControlKind::Upload => {}
            ControlKind::TextArea => {
                el.add_text(self.value.as_deref().unwrap_or_default());
            }
            ControlKind::Checkbox => {
                el.set("checked", self.value.as_deref().is_some_and(is_truthy));
            }
            ControlKind::Submit | ControlKind::Button => {
                el.set("value", self.caption.as_deref().unwrap_or_default());
            }
            ControlKind::Select { items } => {
                for (key, caption) in items {
                    let mut option = Html::el("option");
                    option
                        .set("value", key.as_str())
                        .set("selected", self.value.as_deref() == Some(key.as_str()))
                        .add_text(caption.as_str());
                    el.add(option);
                }
            }
            ControlKind::RadioList { items } => {
                return radio::render(self, el, items, parts.first().copied(), parts.get(1).copied());
            }
        }
        el
    }

    /// Label with `for` pointing at this control.
    pub(crate) fn base_label(&self, caption: Option<&str>) -> Html {
        let mut label = Html::el("label");
        label.set("for", self.html_id.as_str());
        if let Some(text) = caption.or(self.caption.as_deref()) {
            label.add_text(text);
        }
        label
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "" | "0" | "false" | "off")
}
