use crate::dom::{cast, query_all, EventSource};
use crate::error::DomError;
use web_sys::{Document, HtmlAnchorElement};

/// In-page anchors copy their full URL to the clipboard when clicked.
pub(crate) fn attach(doc: &Document) -> Result<(), DomError> {
    let anchors = query_all(doc, r##"a[href^="#"]"##)?;
    for el in anchors.iter() {
        let anchor: HtmlAnchorElement = cast(el.clone(), "in-page anchor", "HtmlAnchorElement")?;
        let href = anchor.clone();
        anchor.listen("click", move |_ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            // Result is not awaited; navigation to the anchor proceeds regardless.
            let _ = window.navigator().clipboard().write_text(&href.href());
        });
    }
    log::debug!("anchor copy attached ({} anchors)", anchors.len());
    Ok(())
}
