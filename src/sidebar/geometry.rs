use crate::config::UiConfig;

/// Where the desktop sidebar goes for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SidebarGeometry {
    /// CSS `right` offset in px.
    pub right_px: f64,
    /// Sidebar overlaps the content column and needs a contrasting background.
    pub pinned: bool,
}

impl SidebarGeometry {
    pub(crate) fn compute(
        viewport_width: f64,
        content_right: f64,
        sidebar_width: f64,
        cfg: &UiConfig,
    ) -> Self {
        let gap = viewport_width - content_right;
        if gap < sidebar_width {
            Self {
                right_px: gap + cfg.sidebar_pinned_margin_px,
                pinned: true,
            }
        } else {
            Self {
                right_px: gap - sidebar_width - cfg.sidebar_clear_margin_px,
                pinned: false,
            }
        }
    }

    pub(crate) fn css_right(&self) -> String {
        format!("{}px", self.right_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_gap_pins_sidebar_with_contrast() {
        let g = SidebarGeometry::compute(1200.0, 1100.0, 200.0, &UiConfig::default());
        assert!(g.pinned);
        assert_eq!(g.right_px, 105.0);
        assert_eq!(g.css_right(), "105px");
    }

    #[test]
    fn test_wide_gap_floats_sidebar_clear_of_content() {
        let g = SidebarGeometry::compute(1600.0, 1100.0, 200.0, &UiConfig::default());
        assert!(!g.pinned);
        assert_eq!(g.right_px, 285.0);
    }

    #[test]
    fn test_gap_equal_to_width_is_not_pinned() {
        let g = SidebarGeometry::compute(1300.0, 1100.0, 200.0, &UiConfig::default());
        assert!(!g.pinned);
        assert_eq!(g.right_px, -15.0);
    }

    #[test]
    fn test_margins_follow_config() {
        let cfg = UiConfig {
            sidebar_pinned_margin_px: 8.0,
            ..UiConfig::default()
        };
        let g = SidebarGeometry::compute(1000.0, 950.0, 200.0, &cfg);
        assert_eq!(g.right_px, 58.0);
    }
}
