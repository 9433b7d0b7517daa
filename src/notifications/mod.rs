//! Navbar notification dropdown: mark one or all notifications read.

mod api;

use crate::dom::{by_id, event_element, query_all, EventSource};
use crate::error::{ApiResult, DomError};
use api::NotificationClient;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

const MARK_ALL_ID: &str = "markAllAsReadButton";
const MARK_ONE_SELECTOR: &str = ".notificationMarkReadButton";
const ITEM_SELECTOR: &str = ".notification-list-item";
const COUNTER_ID: &str = "notifications-count";
const DIVIDER_ID: &str = "notificationDivider";

/// The parts of the dropdown a mark-read response touches.
pub(crate) trait NotificationView {
    type Item;

    fn remove_item(&self, item: &Self::Item);
    fn remove_all_items(&self);
    fn count(&self) -> Option<u32>;
    fn set_count(&self, count: u32);
    fn remove_counter(&self);
    fn remove_mark_all_entry(&self);
    fn remove_divider(&self);
}

/// Returns whether the view was changed. On failure the dropdown is left as it is.
pub(crate) fn apply_mark_all<V: NotificationView>(view: &V, result: ApiResult<serde_json::Value>) -> bool {
    if let Err(e) = result {
        log::error!("mark all notifications read: {e}");
        return false;
    }

    view.remove_all_items();
    view.remove_counter();
    view.remove_mark_all_entry();
    view.remove_divider();
    true
}

pub(crate) fn apply_mark_one<V: NotificationView>(
    view: &V,
    item: &V::Item,
    result: ApiResult<serde_json::Value>,
) -> bool {
    if let Err(e) = result {
        log::error!("mark notification read: {e}");
        return false;
    }

    view.remove_item(item);
    match view.count() {
        Some(n) if n <= 1 => {
            view.remove_counter();
            view.remove_mark_all_entry();
        }
        Some(n) => view.set_count(n - 1),
        None => log::warn!("notification counter missing or not a number"),
    }
    true
}

/// The live dropdown. Items are mark-read buttons; their list entry is what gets removed.
struct DomNotifications {
    doc: Document,
}

impl DomNotifications {
    fn remove_closest_li(el: &Element) {
        if let Ok(Some(li)) = el.closest("li") {
            li.remove();
        }
    }
}

impl NotificationView for DomNotifications {
    type Item = Element;

    fn remove_item(&self, item: &Element) {
        Self::remove_closest_li(item);
    }

    fn remove_all_items(&self) {
        for el in query_all(&self.doc, ITEM_SELECTOR).unwrap_or_default() {
            el.remove();
        }
    }

    fn count(&self) -> Option<u32> {
        self.doc
            .get_element_by_id(COUNTER_ID)?
            .text_content()?
            .trim()
            .parse()
            .ok()
    }

    fn set_count(&self, count: u32) {
        if let Some(el) = self.doc.get_element_by_id(COUNTER_ID) {
            el.set_text_content(Some(&count.to_string()));
        }
    }

    fn remove_counter(&self) {
        if let Some(el) = self.doc.get_element_by_id(COUNTER_ID) {
            el.remove();
        }
    }

    fn remove_mark_all_entry(&self) {
        if let Some(el) = self.doc.get_element_by_id(MARK_ALL_ID) {
            Self::remove_closest_li(&el);
        }
    }

    fn remove_divider(&self) {
        if let Some(el) = self.doc.get_element_by_id(DIVIDER_ID) {
            el.remove();
        }
    }
}

/// The clicked button and its `data-url`.
fn clicked_button(ev: &web_sys::Event) -> Option<(Element, String)> {
    let button = event_element(ev)?.closest("button").ok()??;
    let url = button.get_attribute("data-url")?;
    Some((button, url))
}

pub(crate) fn attach(doc: &Document) -> Result<(), DomError> {
    let client = NotificationClient::from_location();
    let mark_all = by_id(doc, MARK_ALL_ID).ok();
    let mark_one = query_all(doc, MARK_ONE_SELECTOR)?;
    if mark_all.is_none() && mark_one.is_empty() {
        return Err(DomError::Missing(format!("#{MARK_ALL_ID}")));
    }

    if let Some(button) = mark_all {
        let client = client.clone();
        let doc = doc.clone();
        button.listen("click", move |ev| {
            let Some((_, url)) = clicked_button(&ev) else {
                log::warn!("mark-all button without data-url");
                return;
            };
            let client = client.clone();
            let view = DomNotifications { doc: doc.clone() };
            spawn_local(async move {
                let result = client.mark_read(&url).await;
                apply_mark_all(&view, result);
            });
        });
    }

    for button in mark_one.iter() {
        // Keeps focus inside the dropdown so it stays open.
        button.listen("mousedown", |ev| ev.prevent_default());

        let client = client.clone();
        let doc = doc.clone();
        button.listen("click", move |ev| {
            let Some((button, url)) = clicked_button(&ev) else {
                log::warn!("mark-read button without data-url");
                return;
            };
            let client = client.clone();
            let view = DomNotifications { doc: doc.clone() };
            spawn_local(async move {
                let result = client.mark_read(&url).await;
                apply_mark_one(&view, &button, result);
            });
        });
    }

    log::debug!("notifications attached ({} items)", mark_one.len());
    Ok(())
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::dom::document;
    use crate::error::{ApiError, ApiErrorKind};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_dropdown() -> Document {
        let doc = document().expect("document");
        doc.body().expect("body").set_inner_html(
            r#"<span id="notifications-count">2</span>
               <ul>
                 <li class="notification-list-item"><button id="n1" class="notificationMarkReadButton" data-url="/n/1/read/">1</button></li>
                 <li class="notification-list-item"><button id="n2" class="notificationMarkReadButton" data-url="/n/2/read/">2</button></li>
                 <li id="notificationDivider"></li>
                 <li><button id="markAllAsReadButton" data-url="/n/read-all/">all</button></li>
               </ul>"#,
        );
        doc
    }

    #[wasm_bindgen_test]
    fn test_mark_all_success_empties_live_dropdown() {
        let doc = mount_dropdown();
        let view = DomNotifications { doc: doc.clone() };
        assert!(apply_mark_all(&view, Ok(serde_json::json!({}))));

        assert!(query_all(&doc, ITEM_SELECTOR).expect("items").is_empty());
        assert!(doc.get_element_by_id(COUNTER_ID).is_none());
        assert!(doc.get_element_by_id(MARK_ALL_ID).is_none());
        assert!(doc.get_element_by_id(DIVIDER_ID).is_none());
    }

    #[wasm_bindgen_test]
    fn test_mark_all_failure_keeps_live_dropdown() {
        let doc = mount_dropdown();
        let view = DomNotifications { doc: doc.clone() };
        let failed = Err(ApiError {
            kind: ApiErrorKind::Network,
            message: "offline".to_string(),
        });
        assert!(!apply_mark_all(&view, failed));

        assert_eq!(query_all(&doc, ITEM_SELECTOR).expect("items").len(), 2);
        assert!(doc.get_element_by_id(COUNTER_ID).is_some());
    }

    #[wasm_bindgen_test]
    fn test_mark_one_updates_live_counter() {
        let doc = mount_dropdown();
        let view = DomNotifications { doc: doc.clone() };
        let first = by_id(&doc, "n1").expect("button");
        assert!(apply_mark_one(&view, &first, Ok(serde_json::json!({}))));

        assert_eq!(query_all(&doc, ITEM_SELECTOR).expect("items").len(), 1);
        let counter = by_id(&doc, COUNTER_ID).expect("counter");
        assert_eq!(counter.text_content().as_deref(), Some("1"));
    }
}
