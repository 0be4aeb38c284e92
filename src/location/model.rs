use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationType {
    #[serde(rename = "point")]
    Point,
    #[serde(rename = "highlight")]
    Highlight,
    #[serde(rename = "highlight-comment")]
    HighlightComment,
    #[serde(rename = "draw")]
    Draw,
}

impl AnnotationType {
    /// Unknown names map to `None` so callers treat them as invalid.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "point" => Some(Self::Point),
            "highlight" => Some(Self::Highlight),
            "highlight-comment" => Some(Self::HighlightComment),
            "draw" => Some(Self::Draw),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Highlight => "highlight",
            Self::HighlightComment => "highlight-comment",
            Self::Draw => "draw",
        }
    }

    /// Plain highlights and highlights with comments share one anchor shape.
    pub const fn is_highlight(self) -> bool {
        matches!(self, Self::Highlight | Self::HighlightComment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationDimensions {
    pub x: f64,
    pub y: f64,
}

/// Location payload as delivered by the viewer. Every geometric field is
/// optional so incomplete payloads can be represented and rejected; unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quad_points: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<LocationDimensions>,
}

/// Geometry of a location that passed validation for its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    Point {
        x: f64,
        y: f64,
    },
    Highlight {
        quad_points: serde_json::Value,
    },
    Draw {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}

/// Builds a point location, attaching page dimensions only when known.
pub fn create_location(x: f64, y: f64, dimensions: Option<LocationDimensions>) -> Location {
    Location {
        x: Some(x),
        y: Some(y),
        dimensions,
        ..Location::default()
    }
}
