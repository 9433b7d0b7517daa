use crate::dom::{ClassToggle, FrameScheduler, Measured};
use crate::error::DomError;
use std::cell::RefCell;
use std::rc::Rc;

/// Index of the heading whose section is being read.
///
/// `tops` are viewport-relative heading tops in document order. The first
/// heading below `threshold` marks the boundary; the one before it is active.
/// When the boundary is the very first heading, or no heading is below the
/// threshold at all, the last heading is active.
pub(crate) fn compute_active_index(tops: &[f64], threshold: f64) -> Option<usize> {
    let last = tops.len().checked_sub(1)?;
    match tops.iter().position(|&top| top > threshold) {
        Some(0) | None => Some(last),
        Some(i) => Some(i - 1),
    }
}

/// Scroll highlight state owned by one tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HighlightState {
    pub active: Option<usize>,
    /// A recomputation is already queued for the next frame.
    pub ticking: bool,
}

impl HighlightState {
    /// Returns true when the caller should queue a recomputation.
    pub(crate) fn request_frame(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }
}

/// Keeps one desktop/mobile sidebar link pair highlighted for the heading in view.
pub(crate) struct ScrollTracker<H, L> {
    headings: Vec<H>,
    desktop: Vec<L>,
    mobile: Vec<L>,
    active_class: String,
    threshold: f64,
    state: HighlightState,
}

impl<H: Measured, L: ClassToggle> ScrollTracker<H, L> {
    pub fn new(
        headings: Vec<H>,
        desktop: Vec<L>,
        mobile: Vec<L>,
        active_class: impl Into<String>,
        threshold: f64,
    ) -> Result<Self, DomError> {
        if desktop.len() != headings.len() || mobile.len() != headings.len() {
            return Err(DomError::UnpairedLinks {
                headings: headings.len(),
                desktop: desktop.len(),
                mobile: mobile.len(),
            });
        }

        Ok(Self {
            headings,
            desktop,
            mobile,
            active_class: active_class.into(),
            threshold,
            state: HighlightState::default(),
        })
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Scroll handler: returns true if a frame should be scheduled.
    pub fn on_scroll(&mut self) -> bool {
        self.state.request_frame()
    }

    /// Measures headings and moves the highlight. Clears the pending-frame flag.
    pub fn update(&mut self) -> Option<usize> {
        let tops: Vec<f64> = self.headings.iter().map(Measured::top).collect();
        let active = compute_active_index(&tops, self.threshold);

        for link in self.desktop.iter().chain(self.mobile.iter()) {
            link.remove_class(&self.active_class);
        }
        if let Some(i) = active {
            self.desktop[i].add_class(&self.active_class);
            self.mobile[i].add_class(&self.active_class);
        }

        self.state.active = active;
        self.state.ticking = false;
        active
    }
}

/// Scroll event entry point for a shared tracker: at most one recomputation per frame.
pub(crate) fn handle_scroll<H, L, S>(tracker: &Rc<RefCell<ScrollTracker<H, L>>>, frames: &S)
where
    H: Measured + 'static,
    L: ClassToggle + 'static,
    S: FrameScheduler,
{
    if !tracker.borrow_mut().on_scroll() {
        return;
    }
    let t = Rc::clone(tracker);
    frames.next_frame(Box::new(move || {
        t.borrow_mut().update();
    }));
}
