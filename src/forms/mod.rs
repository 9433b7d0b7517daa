use crate::config::UiConfig;
use crate::dom::{cast, query_all, query_in, ClassToggle, EventSource};
use crate::error::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

/// Shows the spinner on a form's submit button and styles it as busy.
pub(crate) fn mark_submitting<E: ClassToggle>(button: &E, spinner: Option<&E>, cfg: &UiConfig) {
    if let Some(s) = spinner {
        s.remove_class(&cfg.hidden_class);
    }
    button.add_classes(cfg.submit_busy_classes.as_slice());
}

fn on_submit(form: &Element, cfg: &UiConfig) -> Result<(), DomError> {
    let button = query_in(form, ":scope button[type='submit']")?;
    let spinner = button.query_selector(":scope svg")?;
    mark_submitting(&button, spinner.as_ref(), cfg);
    cast::<HtmlButtonElement>(button, "submit button", "HtmlButtonElement")?.set_disabled(true);
    Ok(())
}

/// Selected file name, or `None` when the selection was cleared.
fn selected_file_name(input: &HtmlInputElement) -> Option<String> {
    Some(input.files()?.item(0)?.name())
}

fn on_file_change(input: &HtmlInputElement) {
    let Some(name) = selected_file_name(input) else {
        return;
    };
    let Some(labels) = input.labels() else {
        return;
    };
    for i in 0..labels.length() {
        let label = labels.get(i).and_then(|n| n.dyn_into::<Element>().ok());
        if let Some(text) = label.and_then(|l| l.query_selector(".file-label").ok().flatten()) {
            text.set_text_content(Some(&name));
        }
    }
}

pub(crate) fn attach(doc: &Document, cfg: &UiConfig) -> Result<(), DomError> {
    let forms = query_all(doc, "form")?;
    for form in forms.iter() {
        let cfg = cfg.clone();
        let f = form.clone();
        form.listen("submit", move |_ev| {
            if let Err(e) = on_submit(&f, &cfg) {
                log::warn!("form loading indicator: {e}");
            }
        });
    }

    let inputs = query_all(doc, ".file-input")?;
    for el in inputs.iter() {
        let input: HtmlInputElement = cast(el.clone(), ".file-input", "HtmlInputElement")?;
        let i = input.clone();
        input.listen("change", move |_ev| on_file_change(&i));
    }

    log::debug!("forms attached ({} forms, {} file inputs)", forms.len(), inputs.len());
    Ok(())
}
