//! Dialog geometry: caret alignment, vertical flip, height fitting and scroll.

mod horizontal;
mod scale;
mod vertical;

pub use horizontal::{centered_dialog_x, position_caret, CaretOffset, CaretPlacement};
pub use scale::{dimension_scale, DimensionScale, PageDimensions};
pub use vertical::{
    fit_dialog_height, flip_dialog, scroll_to_last_comment, thread_icon_flip, CaretEdge,
    ThreadIconFlip, VerticalPlacement,
};
