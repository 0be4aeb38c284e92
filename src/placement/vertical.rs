use crate::config::PlacementConfig;
use crate::geometry::ScrollMetrics;

/// Edge of the dialog the caret is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretEdge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlacement {
    /// Offset from the container top; set only when the dialog sits below the anchor.
    pub top: Option<f64>,
    /// Offset from the container bottom; set only when the dialog is flipped above.
    pub bottom: Option<f64>,
    pub flipped: bool,
    pub caret_edge: CaretEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadIconFlip {
    Unchanged,
    Flip,
    Reset,
}

pub fn flip_dialog(
    config: &PlacementConfig,
    anchor_y: f64,
    container_height: f64,
) -> VerticalPlacement {
    let placement = if anchor_y <= container_height / 2.0 {
        VerticalPlacement {
            top: Some(anchor_y - config.icon_dot_height),
            bottom: None,
            flipped: false,
            caret_edge: CaretEdge::Top,
        }
    } else {
        // The dialog's bottom edge clears the icon drawn above the anchor.
        let icon_padding = config.icon_height + config.icon_dot_height / 2.0;
        VerticalPlacement {
            top: None,
            bottom: Some(container_height - anchor_y + icon_padding),
            flipped: true,
            caret_edge: CaretEdge::Bottom,
        }
    };
    tracing::debug!(
        anchor_y,
        container_height,
        flipped = placement.flipped,
        "flipped dialog"
    );
    placement
}

/// Largest height the dialog and its comment list may take before scrolling.
pub fn fit_dialog_height(config: &PlacementConfig, container_client_height: f64) -> f64 {
    (container_client_height * config.max_height_ratio - config.chrome_allowance).max(0.0)
}

/// Scroll offset that brings the newest comment into view. A flipped dialog
/// stacks upward, so its newest comment sits at the far scroll extreme.
pub fn scroll_to_last_comment(metrics: ScrollMetrics, flipped: bool) -> f64 {
    if flipped {
        metrics.scroll_height
    } else {
        (metrics.scroll_height - metrics.client_height).max(0.0)
    }
}

pub fn thread_icon_flip(flipped: bool, hidden: bool) -> ThreadIconFlip {
    match (flipped, hidden) {
        (false, _) => ThreadIconFlip::Unchanged,
        (true, false) => ThreadIconFlip::Flip,
        (true, true) => ThreadIconFlip::Reset,
    }
}
