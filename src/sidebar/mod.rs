//! Content-page sidebar: floating desktop table of contents, mobile
//! drop-in panel, and scroll-driven highlighting of the current section.

mod geometry;
mod panel;
mod tracker;

use geometry::SidebarGeometry;
use panel::MobilePanel;
use tracker::{handle_scroll, ScrollTracker};

use crate::config::UiConfig;
use crate::dom::{
    by_id, cast, query, query_all, query_all_in, query_in, AnimationFrames, ClassToggle,
    EventSource, Measured,
};
use crate::error::DomError;
use leptos::ev;
use leptos::prelude::window_event_listener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const DESKTOP_ID: &str = "content-page-sidebar-desktop";
const MOBILE_ID: &str = "content-page-sidebar-mobile";
const CONTENT_ID: &str = "content-div";
const HEADINGS: &str = ".content-page-body h2, .content-page-body h3";
const THRESHOLD_HEADING: &str = ".content-page-body h2";

pub(crate) fn attach(doc: &Document, cfg: &UiConfig) -> Result<(), DomError> {
    let desktop = by_id(doc, DESKTOP_ID)?;
    let mobile = by_id(doc, MOBILE_ID)?;
    let content = by_id(doc, CONTENT_ID)?;

    attach_mobile_panel(doc, &mobile, cfg)?;
    let reposition = positioner(desktop.clone(), content, cfg)?;

    // Placement follows the viewport even when the link lists cannot be tracked.
    let tracked = attach_tracker(doc, &desktop, &mobile, cfg);
    let refresh = tracked.as_ref().ok().cloned();
    on_viewport_resize(move || {
        reposition();
        if let Some((tracker, threshold_heading)) = &refresh {
            tracker
                .borrow_mut()
                .set_threshold(threshold_heading.height());
        }
    });
    tracked?;

    log::debug!("sidebar attached");
    Ok(())
}

fn attach_mobile_panel(doc: &Document, container: &Element, cfg: &UiConfig) -> Result<(), DomError> {
    let button = query_in(container, ".sidebar-button")?;
    let panel = query_in(container, ".sidebar-panel")?;
    let mobile = Rc::new(MobilePanel::new(button.clone(), panel, cfg.hidden_class.clone()));

    let m = Rc::clone(&mobile);
    button.listen("click", move |_ev| m.on_trigger_click());

    let container = container.clone();
    doc.listen("click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        mobile.on_document_click(container.contains(target.as_ref()));
    });
    Ok(())
}

/// Places the desktop sidebar now and returns the closure that re-places it.
fn positioner(
    desktop: Element,
    content: Element,
    cfg: &UiConfig,
) -> Result<impl Fn() + 'static, DomError> {
    let list = query_in(&desktop, "ul")?;
    let desktop: HtmlElement = cast(desktop, DESKTOP_ID, "HtmlElement")?;
    let cfg = cfg.clone();

    let reposition = move || {
        let Some(viewport_width) = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
        else {
            return;
        };
        let geometry = SidebarGeometry::compute(
            viewport_width,
            content.get_bounding_client_rect().right(),
            f64::from(desktop.offset_width()),
            &cfg,
        );
        let _ = desktop.style().set_property("right", &geometry.css_right());
        if geometry.pinned {
            list.add_class(&cfg.sidebar_contrast_class);
        } else {
            list.remove_class(&cfg.sidebar_contrast_class);
        }
    };
    reposition();
    Ok(reposition)
}

fn attach_tracker(
    doc: &Document,
    desktop: &Element,
    mobile: &Element,
    cfg: &UiConfig,
) -> Result<(Rc<RefCell<ScrollTracker<Element, Element>>>, Element), DomError> {
    let headings = query_all(doc, HEADINGS)?;
    // First entry of each list links to the top of the page, not a heading.
    let desktop_links = query_all_in(desktop, "li")?.into_iter().skip(1).collect();
    let mobile_links = query_all_in(mobile, "li")?.into_iter().skip(1).collect();
    let threshold_heading = query(doc, THRESHOLD_HEADING)?;
    let threshold = threshold_heading.height();

    let tracker = Rc::new(RefCell::new(ScrollTracker::new(
        headings,
        desktop_links,
        mobile_links,
        cfg.active_link_class.clone(),
        threshold,
    )?));
    tracker.borrow_mut().update();
    log::debug!(
        "sidebar tracker: threshold {threshold}px, active {:?}",
        tracker.borrow().state().active
    );

    let t = Rc::clone(&tracker);
    let _ = window_event_listener(ev::scroll, move |_ev| {
        handle_scroll(&t, &AnimationFrames);
    });
    Ok((tracker, threshold_heading))
}

/// Listens on `visualViewport` resize, or plain window resize where it is unavailable.
fn on_viewport_resize(handler: impl Fn() + 'static) {
    match web_sys::window().and_then(|w| w.visual_viewport()) {
        Some(vv) => vv.listen("resize", move |_ev| handler()),
        None => {
            let _ = window_event_listener(ev::resize, move |_ev| handler());
        }
    }
}
