use serde::{Deserialize, Serialize};

/// Class names, margins and log level shared by every widget.
///
/// Defaults match the site templates. A page may override any subset by
/// defining `window.SITE_UI = { ... }` before the module loads, e.g.
/// `{ "active_link_class": "text-amber-300", "log_level": "debug" }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct UiConfig {
    pub hidden_class: String,

    /// Marks the sidebar link of the heading currently in view.
    pub active_link_class: String,
    /// Applied to the desktop sidebar list while it sits on top of the content.
    pub sidebar_contrast_class: String,
    /// Gap kept between content and sidebar when the sidebar is pinned.
    pub sidebar_pinned_margin_px: f64,
    /// Extra gap kept when there is room to float the sidebar clear of the content.
    pub sidebar_clear_margin_px: f64,

    pub submit_busy_classes: Vec<String>,

    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hidden_class: "hidden".to_string(),
            active_link_class: "text-white".to_string(),
            sidebar_contrast_class: "bg-slate-700".to_string(),
            sidebar_pinned_margin_px: 5.0,
            sidebar_clear_margin_px: 15.0,
            submit_busy_classes: vec!["text-white".to_string(), "bg-gray-800".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub(crate) const GLOBAL_NAME: &'static str = "SITE_UI";

    pub(crate) fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads `window.SITE_UI`, falling back to defaults when it is absent or unusable.
    pub(crate) fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Some(raw) = window.get(Self::GLOBAL_NAME) else {
            return Self::default();
        };
        if raw.is_undefined() || !raw.is_object() {
            return Self::default();
        }

        let json = js_sys::JSON::stringify(&raw)
            .ok()
            .and_then(|s| s.as_string());
        match json.as_deref().map(Self::from_json) {
            Some(Ok(cfg)) => cfg,
            Some(Err(e)) => {
                log::warn!("ignoring window.{}: {e}", Self::GLOBAL_NAME);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub(crate) fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let cfg = UiConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(cfg, UiConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let cfg = UiConfig::from_json(r#"{"active_link_class": "text-amber-300"}"#)
            .expect("partial config should parse");
        assert_eq!(cfg.active_link_class, "text-amber-300");
        assert_eq!(cfg.hidden_class, "hidden");
        assert_eq!(cfg.sidebar_pinned_margin_px, 5.0);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        assert!(UiConfig::from_json(r#"{"sidebar_clear_margin_px": "wide"}"#).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut cfg = UiConfig::default();
        assert_eq!(cfg.level(), log::Level::Info);
        cfg.log_level = "debug".to_string();
        assert_eq!(cfg.level(), log::Level::Debug);
        cfg.log_level = "chatty".to_string();
        assert_eq!(cfg.level(), log::Level::Info);
    }
}
