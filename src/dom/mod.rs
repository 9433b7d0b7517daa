//! Thin seams over the browser DOM.
//!
//! Widgets are written against [`ClassToggle`], [`Measured`] and
//! [`FrameScheduler`] so their state transitions can be driven from native
//! unit tests with the fakes in [`fake`].

use crate::error::DomError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, NodeList};

pub(crate) trait ClassToggle {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn add_classes<S: AsRef<str>>(&self, classes: &[S]) {
        for c in classes {
            self.add_class(c.as_ref());
        }
    }

    fn remove_classes<S: AsRef<str>>(&self, classes: &[S]) {
        for c in classes {
            self.remove_class(c.as_ref());
        }
    }

    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

/// `class` may hold several space-separated tokens; each is applied on its own.
impl ClassToggle for Element {
    fn add_class(&self, class: &str) {
        let list = self.class_list();
        for token in class.split_whitespace() {
            if let Err(e) = list.add_1(token) {
                log::warn!("could not add class {token:?}: {:?}", e);
            }
        }
    }

    fn remove_class(&self, class: &str) {
        let list = self.class_list();
        for token in class.split_whitespace() {
            if let Err(e) = list.remove_1(token) {
                log::warn!("could not remove class {token:?}: {:?}", e);
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        let list = self.class_list();
        let mut tokens = class.split_whitespace().peekable();
        tokens.peek().is_some() && tokens.all(|t| list.contains(t))
    }
}

/// Viewport-relative vertical metrics of an element.
pub(crate) trait Measured {
    fn top(&self) -> f64;
    fn height(&self) -> f64;
}

impl Measured for Element {
    fn top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn height(&self) -> f64 {
        self.get_bounding_client_rect().height()
    }
}

/// Runs work on the next animation frame.
pub(crate) trait FrameScheduler {
    fn next_frame(&self, work: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    fn next_frame(&self, work: Box<dyn FnOnce()>) {
        leptos::prelude::request_animation_frame(work);
    }
}

/// Anything events can be listened on. Listeners stay registered for the page lifetime.
pub(crate) trait EventSource {
    fn listen(&self, event: &str, handler: impl FnMut(web_sys::Event) + 'static);
}

impl<T: AsRef<EventTarget>> EventSource for T {
    fn listen(&self, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(e) = self
            .as_ref()
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for {event}: {:?}", e);
        }
        cb.forget();
    }
}

pub(crate) fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

pub(crate) fn by_id(doc: &Document, id: &str) -> Result<Element, DomError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{id}")))
}

pub(crate) fn query(doc: &Document, selector: &str) -> Result<Element, DomError> {
    doc.query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Result<Element, DomError> {
    root.query_selector(selector)?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

pub(crate) fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(doc.query_selector_all(selector)?))
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub(crate) fn cast<T: JsCast>(el: Element, what: &str, ty: &'static str) -> Result<T, DomError> {
    el.dyn_into::<T>()
        .map_err(|_| DomError::WrongType(what.to_string(), ty))
}

/// The element an event was dispatched to, if it is an element.
pub(crate) fn event_element(ev: &web_sys::Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}
