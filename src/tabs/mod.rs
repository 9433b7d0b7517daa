use crate::config::UiConfig;
use crate::dom::{query_all, ClassToggle, EventSource};
use crate::error::DomError;
use std::rc::Rc;
use web_sys::{Document, Element};

const BUTTON_SELECTOR: &str = ".tab-button";
const CONTENT_SELECTOR: &str = ".tab-content";
const ACTIVE_TAB_PARAM: &str = "active_tab";

/// Class sets for tab buttons; pages pick one with `<body data-tab-style="...">`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum TabStyle {
    #[default]
    Default,
    Profile,
}

impl TabStyle {
    pub(crate) fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("profile") => TabStyle::Profile,
            _ => TabStyle::Default,
        }
    }

    pub(crate) fn active_classes(self) -> &'static [&'static str] {
        match self {
            TabStyle::Default => &[
                "bg-slate-800",
                "text-white",
                "shadow-slate-700/50",
                "pointer-events-none",
            ],
            TabStyle::Profile => &["bg-slate-600", "text-white"],
        }
    }

    pub(crate) fn inactive_classes(self) -> &'static [&'static str] {
        match self {
            TabStyle::Default => &[
                "bg-gray-200",
                "hover:scale-105",
                "hover:bg-slate-800",
                "hover:text-gray-200",
            ],
            TabStyle::Profile => &["text-gray-400"],
        }
    }
}

/// Value of `active_tab` in a `location.search` string, URL-decoded.
pub(crate) fn active_tab_param(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let k = urlencoding::decode(&k.replace('+', " ")).ok()?.into_owned();
            let v = urlencoding::decode(&v.replace('+', " ")).ok()?.into_owned();
            Some((k, v))
        })
        .find(|(k, v)| k == ACTIVE_TAB_PARAM && !v.is_empty())
        .map(|(_, v)| v)
}

/// Hides every tab content and restyles every button, then shows `target` for `chosen`.
pub(crate) fn change_tab<E: ClassToggle>(
    buttons: &[E],
    contents: &[E],
    chosen: &E,
    target: Option<&E>,
    style: TabStyle,
    hidden_class: &str,
) {
    for c in contents {
        c.add_class(hidden_class);
    }
    for b in buttons {
        b.remove_classes(style.active_classes());
        b.add_classes(style.inactive_classes());
    }

    chosen.add_classes(style.active_classes());
    chosen.remove_classes(style.inactive_classes());
    if let Some(t) = target {
        t.remove_class(hidden_class);
    }
}

struct TabGroup {
    doc: Document,
    buttons: Vec<Element>,
    style: TabStyle,
    hidden_class: String,
}

impl TabGroup {
    fn select(&self, button: &Element) {
        let contents = match query_all(&self.doc, CONTENT_SELECTOR) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("tabs: {e}");
                return;
            }
        };
        let target = button
            .get_attribute("data-table")
            .and_then(|id| self.doc.get_element_by_id(&id));
        if target.is_none() {
            log::warn!("tabs: button {:?} has no content panel", button.id());
        }
        change_tab(
            &self.buttons,
            &contents,
            button,
            target.as_ref(),
            self.style,
            &self.hidden_class,
        );
    }
}

pub(crate) fn attach(doc: &Document, cfg: &UiConfig) -> Result<(), DomError> {
    let buttons = query_all(doc, BUTTON_SELECTOR)?;
    let Some(first) = buttons.first().cloned() else {
        return Err(DomError::Missing(BUTTON_SELECTOR.to_string()));
    };

    let style = TabStyle::from_attr(
        doc.body()
            .and_then(|b| b.get_attribute("data-tab-style"))
            .as_deref(),
    );
    let group = Rc::new(TabGroup {
        doc: doc.clone(),
        buttons,
        style,
        hidden_class: cfg.hidden_class.clone(),
    });

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let initial = active_tab_param(&search)
        .and_then(|id| doc.get_element_by_id(&id))
        .unwrap_or(first);
    group.select(&initial);

    for b in group.buttons.iter() {
        let g = Rc::clone(&group);
        let button = b.clone();
        b.listen("click", move |_ev| g.select(&button));
    }

    log::debug!("tabs attached ({} buttons, {:?})", group.buttons.len(), style);
    Ok(())
}
