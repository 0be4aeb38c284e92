//! Annotation types, raw location payloads, and their structural validation.

mod model;
mod validate;

pub use model::{create_location, Anchor, AnnotationType, Location, LocationDimensions};
pub use validate::{
    is_draw_location_valid, is_highlight_location_valid, is_location_valid,
    is_point_location_valid, parse_annotation_type, validate_location, ValidationFailure,
};
