use crate::config::PlacementConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaretOffset {
    /// Caret sits in the horizontal middle of the dialog.
    Centered,
    /// Caret left offset from the dialog's left edge, in pixels.
    Pixels(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPlacement {
    pub dialog_x: f64,
    pub caret: CaretOffset,
}

pub fn centered_dialog_x(anchor_x: f64, dialog_width: f64) -> f64 {
    anchor_x - dialog_width / 2.0
}

/// Pushes a dialog back inside `[0, page_width]` and keeps its caret pointing
/// at the anchor. `dialog_x` is the candidate from [`centered_dialog_x`].
///
/// A dialog wider than the page overflows both sides; it is left where it is
/// with a centered caret.
pub fn position_caret(
    config: &PlacementConfig,
    dialog_x: f64,
    dialog_width: f64,
    anchor_x: f64,
    page_width: f64,
) -> CaretPlacement {
    let past_left = dialog_x < 0.0;
    let past_right = dialog_x + dialog_width > page_width;

    let placement = match (past_left, past_right) {
        (true, false) => CaretPlacement {
            dialog_x: 0.0,
            caret: CaretOffset::Pixels(anchor_x.max(config.caret_half_width)),
        },
        (false, true) => {
            let caret_x = (anchor_x - page_width + dialog_width)
                .min(dialog_width - config.caret_half_width);
            CaretPlacement {
                dialog_x: page_width - dialog_width,
                caret: CaretOffset::Pixels(caret_x),
            }
        }
        _ => CaretPlacement {
            dialog_x,
            caret: CaretOffset::Centered,
        },
    };
    tracing::debug!(
        anchor_x,
        page_width,
        dialog_x = placement.dialog_x,
        caret = ?placement.caret,
        "positioned dialog caret"
    );
    placement
}
