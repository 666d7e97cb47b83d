//! Component containers.

use crate::{Control, ControlKind, FormError};

/// Child of a [`Container`].
#[derive(Clone, Copy, Debug)]
pub enum Component<'a> {
    /// A form control.
    Control(&'a Control),
    /// A nested container.
    Container(&'a Container),
}

impl<'a> Component<'a> {
    /// Component name within its parent.
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            Self::Control(control) => control.name(),
            Self::Container(container) => container.name(),
        }
    }

    /// The control, if this component is one.
    #[must_use]
    pub fn as_control(self) -> Option<&'a Control> {
        match self {
            Self::Control(control) => Some(control),
            Self::Container(_) => None,
        }
    }

    /// The container, if this component is one.
    #[must_use]
    pub fn as_container(self) -> Option<&'a Container> {
        match self {
            Self::Container(container) => Some(container),
            Self::Control(_) => None,
        }
    }
}

/// Index of a child in its typed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Control(usize),
    Container(usize),
}

/// Ordered set of named components.
///
/// Adding a component under an existing name replaces it in place.
#[derive(Clone, Debug)]
pub struct Container {
    name: String,
    /// HTML name prefix of children; `None` at the form root.
    name_prefix: Option<String>,
    id_prefix: String,
    controls: Vec<Control>,
    containers: Vec<Container>,
    /// Children in document order.
    order: Vec<Slot>,
}

impl Container {
    pub(crate) fn root(name: &str, id_prefix: String) -> Self {
        Self {
            name: name.to_owned(),
            name_prefix: None,
            id_prefix,
            controls: Vec::new(),
            containers: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Container name within its parent (the form name at the root).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a control of the given kind.
    pub fn add(&mut self, name: &str, kind: ControlKind) -> &mut Control {
        let control = Control::new(
            name,
            kind,
            self.child_html_name(name),
            self.child_id(name),
        );
        let index = match self.existing(name) {
            Some((_, Slot::Control(index))) => {
                self.controls[index] = control;
                index
            }
            existing => {
                self.controls.push(control);
                let index = self.controls.len() - 1;
                self.place(existing.map(|(at, _)| at), Slot::Control(index));
                index
            }
        };
        &mut self.controls[index]
    }

    /// Add a nested container.
    pub fn add_container(&mut self, name: &str) -> &mut Container {
        let container = Self {
            name: name.to_owned(),
            name_prefix: Some(self.child_html_name(name)),
            id_prefix: self.child_id(name),
            controls: Vec::new(),
            containers: Vec::new(),
            order: Vec::new(),
        };
        let index = match self.existing(name) {
            Some((_, Slot::Container(index))) => {
                self.containers[index] = container;
                index
            }
            existing => {
                self.containers.push(container);
                let index = self.containers.len() - 1;
                self.place(existing.map(|(at, _)| at), Slot::Container(index));
                index
            }
        };
        &mut self.containers[index]
    }

    /// Add a single-line text input.
    pub fn add_text(&mut self, name: &str, caption: &str) -> &mut Control {
        self.add(name, ControlKind::Text).set_caption(caption)
    }

    /// Add a password input.
    pub fn add_password(&mut self, name: &str, caption: &str) -> &mut Control {
        self.add(name, ControlKind::Password).set_caption(caption)
    }

    /// Add a text area.
    pub fn add_textarea(&mut self, name: &str, caption: &str) -> &mut Control {
        self.add(name, ControlKind::TextArea).set_caption(caption)
    }

    /// Add a hidden field with a value.
    pub fn add_hidden(&mut self, name: &str, value: &str) -> &mut Control {
        self.add(name, ControlKind::Hidden).set_value(value)
    }

    /// Add a checkbox.
    pub fn add_checkbox(&mut self, name: &str, caption: &str) -> &mut Control {
        self.add(name, ControlKind::Checkbox).set_caption(caption)
    }

    /// Add a group of radio buttons.
    pub fn add_radio_list(
        &mut self,
        name: &str,
        caption: &str,
        items: &[(&str, &str)],
    ) -> &mut Control {
        let items = items
            .iter()
            .map(|(key, caption)| ((*key).to_owned(), (*caption).to_owned()))
            .collect();
        self.add(name, ControlKind::RadioList { items })
            .set_caption(caption)
    }

    /// Add a select box.
    pub fn add_select(&mut self, name: &str, caption: &str, items: &[(&str, &str)]) -> &mut Control {
        let items = items
            .iter()
            .map(|(key, caption)| ((*key).to_owned(), (*caption).to_owned()))
            .collect();
        self.add(name, ControlKind::Select { items })
            .set_caption(caption)
    }

    /// Add a submit button.
    pub fn add_submit(&mut self, name: &str, caption: &str) -> &mut Control {
        self.add(name, ControlKind::Submit).set_caption(caption)
    }

    /// Look up a direct child.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<Component<'_>> {
        self.children().find(|c| c.name() == name)
    }

    /// Whether a direct child with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.component(name).is_some()
    }

    /// Look up a direct child control.
    pub fn control(&self, name: &str) -> Result<&Control, FormError> {
        match self.component(name) {
            Some(Component::Control(control)) => Ok(control),
            Some(Component::Container(_)) => Err(FormError::NotAControl {
                name: name.to_owned(),
            }),
            None => Err(FormError::ComponentNotFound {
                name: name.to_owned(),
            }),
        }
    }

    /// Look up a direct child container.
    pub fn container(&self, name: &str) -> Result<&Container, FormError> {
        match self.component(name) {
            Some(Component::Container(container)) => Ok(container),
            Some(Component::Control(_)) => Err(FormError::NotAContainer {
                name: name.to_owned(),
            }),
            None => Err(FormError::ComponentNotFound {
                name: name.to_owned(),
            }),
        }
    }

    /// Components in document order.
    ///
    /// With `deep`, the children of nested containers follow the container
    /// itself.
    #[must_use]
    pub fn components(&self, deep: bool) -> Vec<Component<'_>> {
        let mut found = Vec::new();
        self.collect(deep, &mut found);
        found
    }

    /// Controls in document order that match `filter`.
    pub fn controls(&self, deep: bool, filter: impl Fn(&Control) -> bool) -> Vec<&Control> {
        self.components(deep)
            .into_iter()
            .filter_map(Component::as_control)
            .filter(|control| filter(control))
            .collect()
    }

    fn children(&self) -> impl Iterator<Item = Component<'_>> {
        self.order.iter().map(|slot| match *slot {
            Slot::Control(index) => Component::Control(&self.controls[index]),
            Slot::Container(index) => Component::Container(&self.containers[index]),
        })
    }

    fn collect<'a>(&'a self, deep: bool, found: &mut Vec<Component<'a>>) {
        for component in self.children() {
            found.push(component);
            if let (true, Component::Container(container)) = (deep, component) {
                container.collect(deep, found);
            }
        }
    }

    /// Document position and slot of the child called `name`.
    fn existing(&self, name: &str) -> Option<(usize, Slot)> {
        let at = self.children().position(|c| c.name() == name)?;
        Some((at, self.order[at]))
    }

    /// Put `slot` at document position `at`, dropping the child of the other
    /// kind stored there, or append it.
    fn place(&mut self, at: Option<usize>, slot: Slot) {
        let Some(at) = at else {
            self.order.push(slot);
            return;
        };
        let removed = std::mem::replace(&mut self.order[at], slot);
        match removed {
            Slot::Control(index) => {
                self.controls.remove(index);
            }
            Slot::Container(index) => {
                self.containers.remove(index);
            }
        }
        for other in &mut self.order {
            match (removed, other) {
                (Slot::Control(gone), Slot::Control(index))
                | (Slot::Container(gone), Slot::Container(index))
                    if *index > gone =>
                {
                    *index -= 1;
                }
                _ => {}
            }
        }
    }

    fn child_html_name(&self, name: &str) -> String {
        match &self.name_prefix {
            Some(prefix) => format!("{prefix}[{name}]"),
            None => name.to_owned(),
        }
    }

    fn child_id(&self, name: &str) -> String {
        format!("{}-{name}", self.id_prefix)
    }
}
