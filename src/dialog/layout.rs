use crate::config::PlacementConfig;
use crate::geometry::{ContainerMetrics, DialogBounds, ScreenPoint, ScrollMetrics};
use crate::placement::{
    centered_dialog_x, fit_dialog_height, flip_dialog, position_caret, scroll_to_last_comment,
    thread_icon_flip, CaretOffset, ThreadIconFlip, VerticalPlacement,
};

/// Host measurements needed to lay a dialog out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogFrame {
    /// Anchor position in container coordinates.
    pub anchor: ScreenPoint,
    pub dialog_width: f64,
    pub dialog_height: f64,
    pub page_width: f64,
    pub container: ContainerMetrics,
    pub comments_scroll: ScrollMetrics,
}

/// Positional state a rendering layer projects onto the dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogLayout {
    pub dialog_x: f64,
    pub caret: CaretOffset,
    pub vertical: VerticalPlacement,
    pub max_height: f64,
    pub thread_icon: ThreadIconFlip,
    pub scroll_top: f64,
    width: f64,
    height: f64,
    container_height: f64,
}

impl DialogLayout {
    pub(super) fn compute(config: &PlacementConfig, frame: &DialogFrame, hidden: bool) -> Self {
        let caret = position_caret(
            config,
            centered_dialog_x(frame.anchor.x, frame.dialog_width),
            frame.dialog_width,
            frame.anchor.x,
            frame.page_width,
        );
        let container_height = frame.container.client_height;
        let vertical = flip_dialog(config, frame.anchor.y, container_height);
        let max_height = fit_dialog_height(config, container_height);
        Self {
            dialog_x: caret.dialog_x,
            caret: caret.caret,
            vertical,
            max_height,
            thread_icon: thread_icon_flip(vertical.flipped, hidden),
            scroll_top: 0.0,
            width: frame.dialog_width,
            height: frame.dialog_height.min(max_height),
            container_height,
        }
    }

    pub fn flipped(&self) -> bool {
        self.vertical.flipped
    }

    pub(super) fn refresh_thread_icon(&mut self, hidden: bool) {
        self.thread_icon = thread_icon_flip(self.vertical.flipped, hidden);
    }

    pub(super) fn scroll_to_last_comment(&mut self, metrics: ScrollMetrics) {
        self.scroll_top = scroll_to_last_comment(metrics, self.vertical.flipped);
    }

    /// Rectangle the dialog occupies in container coordinates.
    pub fn bounds(&self) -> DialogBounds {
        let y = match (self.vertical.top, self.vertical.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => self.container_height - bottom - self.height,
            (None, None) => 0.0,
        };
        DialogBounds::new(self.dialog_x, y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(anchor: ScreenPoint) -> DialogFrame {
        DialogFrame {
            anchor,
            dialog_width: 81.0,
            dialog_height: 60.0,
            page_width: 1000.0,
            container: ContainerMetrics::new(1000.0, 800.0),
            comments_scroll: ScrollMetrics::new(500.0, 300.0),
        }
    }

    #[test]
    fn layout_below_anchor_has_bounds_starting_at_top() {
        let config = PlacementConfig::default();
        let below_frame = frame(ScreenPoint::new(100.0, 100.0));
        let layout = DialogLayout::compute(&config, &below_frame, false);
        assert!(!layout.flipped());
        assert_eq!(layout.caret, CaretOffset::Centered);
        assert_eq!(layout.max_height, 370.0);
        assert_eq!(layout.thread_icon, ThreadIconFlip::Unchanged);
        assert_eq!(layout.bounds(), DialogBounds::new(59.5, 92.0, 81.0, 60.0));
    }

    #[test]
    fn flipped_layout_ends_above_anchor() {
        let config = PlacementConfig::default();
        let flipped_frame = frame(ScreenPoint::new(100.0, 700.0));
        let layout = DialogLayout::compute(&config, &flipped_frame, false);
        assert!(layout.flipped());
        assert_eq!(layout.thread_icon, ThreadIconFlip::Flip);
        // bottom = 800 - 700 + 35 = 135, so the dialog spans [605, 665].
        assert_eq!(layout.bounds(), DialogBounds::new(59.5, 605.0, 81.0, 60.0));
        assert!(!layout.bounds().contains(ScreenPoint::new(100.0, 700.0)));
    }

    #[test]
    fn scroll_respects_flip() {
        let config = PlacementConfig::default();
        let flipped_frame = frame(ScreenPoint::new(100.0, 700.0));
        let mut layout = DialogLayout::compute(&config, &flipped_frame, false);
        layout.scroll_to_last_comment(ScrollMetrics::new(500.0, 300.0));
        assert_eq!(layout.scroll_top, 500.0);

        let below_frame = frame(ScreenPoint::new(100.0, 100.0));
        let mut layout = DialogLayout::compute(&config, &below_frame, false);
        layout.scroll_to_last_comment(ScrollMetrics::new(500.0, 300.0));
        assert_eq!(layout.scroll_top, 200.0);
    }
}
