use crate::config::UiConfig;
use crate::dom::{by_id, query_all, query_in, ClassToggle, EventSource};
use crate::error::DomError;
use std::rc::Rc;
use web_sys::{Document, Element};

const OPEN_SHAPE: &[&str] = &["rounded-t-lg"];
const CLOSED_SHAPE: &[&str] = &["rounded-lg", "mb-2"];

/// The collapsible navbar shown on small screens.
pub(crate) struct MobileNavbar<E> {
    pub navbar: E,
    pub dropdown: E,
    pub open_icon: E,
    pub close_icon: E,
    pub hidden_class: String,
}

impl<E: ClassToggle> MobileNavbar<E> {
    pub fn is_open(&self) -> bool {
        !self.dropdown.has_class(&self.hidden_class)
    }

    pub fn set_open(&self, open: bool) {
        let hidden = self.hidden_class.as_str();
        if open {
            self.navbar.remove_classes(CLOSED_SHAPE);
            self.navbar.add_classes(OPEN_SHAPE);
            self.dropdown.remove_class(hidden);
            self.open_icon.add_class(hidden);
            self.close_icon.remove_class(hidden);
        } else {
            self.navbar.add_classes(CLOSED_SHAPE);
            self.navbar.remove_classes(OPEN_SHAPE);
            self.dropdown.add_class(hidden);
            self.open_icon.remove_class(hidden);
            self.close_icon.add_class(hidden);
        }
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open());
    }
}

pub(crate) fn attach(doc: &Document, cfg: &UiConfig) -> Result<(), DomError> {
    let button = by_id(doc, "mobile-navbar-button")?;
    let navbar = Rc::new(MobileNavbar {
        navbar: by_id(doc, "navbar")?,
        dropdown: by_id(doc, "mobile-navbar-dropdown")?,
        open_icon: query_in(&button, "#open-button")?,
        close_icon: query_in(&button, "#close-button")?,
        hidden_class: cfg.hidden_class.clone(),
    });
    button.listen("click", move |_ev| navbar.toggle());

    for item in query_all(doc, ".mobile-navbar-dropdown-item")? {
        let hidden = cfg.hidden_class.clone();
        let it = item.clone();
        item.listen("click", move |_ev| {
            if let Some(child) = child_dropdown(&it) {
                child.toggle_class(&hidden);
            }
        });
    }

    log::debug!("mobile navbar attached");
    Ok(())
}

/// The nested `ul` that belongs to a dropdown item.
fn child_dropdown(item: &Element) -> Option<Element> {
    item.parent_element()?.query_selector("ul").ok()?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    fn closed() -> MobileNavbar<FakeElement> {
        MobileNavbar {
            navbar: FakeElement::with_classes(&["rounded-lg", "mb-2", "bg-slate-800"]),
            dropdown: FakeElement::with_classes(&["hidden"]),
            open_icon: FakeElement::default(),
            close_icon: FakeElement::with_classes(&["hidden"]),
            hidden_class: "hidden".to_string(),
        }
    }

    #[test]
    fn test_toggle_opens_closed_navbar() {
        let n = closed();
        n.toggle();
        assert!(n.is_open());
        assert_eq!(
            n.navbar.classes(),
            vec!["bg-slate-800".to_string(), "rounded-t-lg".to_string()]
        );
        assert!(n.open_icon.has_class("hidden"));
        assert!(!n.close_icon.has_class("hidden"));
    }

    #[test]
    fn test_toggle_twice_restores_closed_state() {
        let n = closed();
        n.toggle();
        n.toggle();
        assert!(!n.is_open());
        assert_eq!(
            n.navbar.classes(),
            vec![
                "bg-slate-800".to_string(),
                "mb-2".to_string(),
                "rounded-lg".to_string()
            ]
        );
        assert!(!n.open_icon.has_class("hidden"));
        assert!(n.close_icon.has_class("hidden"));
    }
}
