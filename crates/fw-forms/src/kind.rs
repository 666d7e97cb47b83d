//! Control kinds.

/// Kind of a form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Password input (never renders its value).
    Password,
    /// Multi-line text area.
    TextArea,
    /// Hidden field.
    Hidden,
    /// Single checkbox.
    Checkbox,
    /// Group of radio buttons, `(key, caption)` in display order.
    RadioList {
        /// Options as `(key, caption)` pairs.
        items: Vec<(String, String)>,
    },
    /// Select box, `(key, caption)` in display order.
    Select {
        /// Options as `(key, caption)` pairs.
        items: Vec<(String, String)>,
    },
    /// Submit button.
    Submit,
    /// Plain button.
    Button,
    /// File upload.
    Upload,
}

impl ControlKind {
    /// Whether this is a free-text input (`<input type=text|password>`).
    #[must_use]
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Text | Self::Password)
    }

    /// Whether this is a hidden field.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Whether controls of this kind have a `<label>`.
    #[must_use]
    pub fn has_label(&self) -> bool {
        !matches!(
            self,
            Self::Hidden | Self::Checkbox | Self::Submit | Self::Button
        )
    }

    /// `type` attribute of the `<input>` element, if rendered as one.
    pub(crate) fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Password => Some("password"),
            Self::Hidden => Some("hidden"),
            Self::Checkbox => Some("checkbox"),
            Self::RadioList { .. } => Some("radio"),
            Self::Submit => Some("submit"),
            Self::Button => Some("button"),
            Self::Upload => Some("file"),
            Self::TextArea | Self::Select { .. } => None,
        }
    }
}
