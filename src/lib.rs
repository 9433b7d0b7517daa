mod anchors;
mod config;
mod dom;
mod error;
mod forms;
mod navbar;
mod notifications;
mod sidebar;
mod tabs;

use crate::config::UiConfig;
use crate::dom::EventSource;
use crate::error::DomError;
use web_sys::Document;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

/// Attaches every widget whose markup is present on the page.
fn boot(doc: &Document, cfg: &UiConfig) {
    report("navbar", navbar::attach(doc, cfg));
    report("notifications", notifications::attach(doc));
    report("tabs", tabs::attach(doc, cfg));
    report("sidebar", sidebar::attach(doc, cfg));
    report("anchors", anchors::attach(doc));
    report("forms", forms::attach(doc, cfg));
}

fn report(widget: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => {}
        // Most pages carry only some of the widgets.
        Err(DomError::Missing(what)) => log::debug!("{widget}: not on this page ({what})"),
        Err(e) => log::warn!("{widget} not attached: {e}"),
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_boot_on_bare_page_attaches_nothing_and_does_not_panic() {
        let doc = dom::document().expect("document");
        doc.body().expect("body").set_inner_html("<p>plain page</p>");
        boot(&doc, &UiConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_config_defaults_without_global() {
        assert_eq!(UiConfig::load(), UiConfig::default());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    // Level is narrowed once the page config has been read.
    let _ = console_log::init_with_level(log::Level::Trace);
    let cfg = UiConfig::load();
    log::set_max_level(cfg.level().to_level_filter());

    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("site-ui: {e}");
            return;
        }
    };

    if doc.ready_state() == "loading" {
        let d = doc.clone();
        doc.listen("DOMContentLoaded", move |_ev| boot(&d, &cfg));
    } else {
        boot(&doc, &cfg);
    }
}
