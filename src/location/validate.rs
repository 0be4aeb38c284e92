use thiserror::Error;

use super::model::{Anchor, AnnotationType, Location};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("thread parameters are missing")]
    MissingParams,
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("annotation type is missing")]
    MissingType,
    #[error("annotation type `{name}` is not supported")]
    UnsupportedType { name: String },
}

fn require<T: Clone>(value: &Option<T>, field: &'static str) -> Result<T, ValidationFailure> {
    value
        .clone()
        .ok_or(ValidationFailure::MissingField { field })
}

pub fn parse_annotation_type(name: &str) -> Result<AnnotationType, ValidationFailure> {
    AnnotationType::parse(name).ok_or_else(|| ValidationFailure::UnsupportedType {
        name: name.to_string(),
    })
}

/// Checks presence only; values are neither coerced nor range-checked.
pub fn validate_location(
    annotation_type: AnnotationType,
    location: &Location,
) -> Result<Anchor, ValidationFailure> {
    match annotation_type {
        AnnotationType::Point => Ok(Anchor::Point {
            x: require(&location.x, "x")?,
            y: require(&location.y, "y")?,
        }),
        AnnotationType::Highlight | AnnotationType::HighlightComment => Ok(Anchor::Highlight {
            quad_points: require(&location.quad_points, "quadPoints")?,
        }),
        AnnotationType::Draw => Ok(Anchor::Draw {
            min_x: require(&location.min_x, "minX")?,
            min_y: require(&location.min_y, "minY")?,
            max_x: require(&location.max_x, "maxX")?,
            max_y: require(&location.max_y, "maxY")?,
        }),
    }
}

pub fn is_location_valid(annotation_type: Option<AnnotationType>, location: &Location) -> bool {
    annotation_type
        .is_some_and(|annotation_type| validate_location(annotation_type, location).is_ok())
}

pub fn is_point_location_valid(location: &Location) -> bool {
    is_location_valid(Some(AnnotationType::Point), location)
}

pub fn is_highlight_location_valid(location: &Location) -> bool {
    is_location_valid(Some(AnnotationType::Highlight), location)
}

pub fn is_draw_location_valid(location: &Location) -> bool {
    is_location_valid(Some(AnnotationType::Draw), location)
}
