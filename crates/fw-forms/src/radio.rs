//! Radio button group rendering.

use fw_html::Html;

use crate::Control;
use crate::control::VALIDATION_RULES_ATTR;

/// Separator emitted after each radio item.
const SEPARATOR: &str = "<br>";

/// Render a radio list.
///
/// Without `key`, every item is rendered as `<label><input>caption</label>`
/// followed by a separator inside a neutral wrapper. With `key`, only that
/// item's label element is returned. Validation rules ride on the first
/// rendered radio only.
pub(crate) fn render(
    control: &Control,
    mut radio: Html,
    items: &[(String, String)],
    key: Option<&str>,
    caption: Option<&str>,
) -> Html {
    let mut container = Html::el("");

    for (item_key, item_caption) in items {
        if key.is_some_and(|key| key != item_key) {
            continue;
        }

        let id = format!("{}-{item_key}", control.html_id());
        radio
            .set("checked", control.value() == Some(item_key.as_str()))
            .set("value", item_key.as_str())
            .set("id", id.as_str());

        let mut label = control.base_label(Some(caption.unwrap_or(item_caption)));
        label.set("for", id);
        label.insert(0, radio.clone());

        if key.is_some() {
            return label;
        }

        container.add_html(label.to_html() + SEPARATOR);
        radio.remove(VALIDATION_RULES_ATTR);
    }

    container
}
