use crate::dom::ClassToggle;

/// Mobile sidebar: a trigger button that swaps itself for the link panel.
pub(crate) struct MobilePanel<E> {
    button: E,
    panel: E,
    hidden_class: String,
}

impl<E: ClassToggle> MobilePanel<E> {
    pub fn new(button: E, panel: E, hidden_class: impl Into<String>) -> Self {
        Self {
            button,
            panel,
            hidden_class: hidden_class.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.panel.has_class(&self.hidden_class)
    }

    pub fn set_open(&self, open: bool) {
        if open {
            self.button.add_class(&self.hidden_class);
            self.panel.remove_class(&self.hidden_class);
        } else {
            self.panel.add_class(&self.hidden_class);
            self.button.remove_class(&self.hidden_class);
        }
    }

    pub fn on_trigger_click(&self) {
        self.set_open(true);
    }

    /// Document-wide click; `inside` is whether the target lies within the sidebar container.
    pub fn on_document_click(&self, inside: bool) {
        if !inside && self.is_open() {
            self.set_open(false);
        }
    }
}
