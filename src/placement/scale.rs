use crate::location::LocationDimensions;

/// Differences at or below this many pixels come from float math, not resizes.
const SUBPIXEL_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScale {
    pub x: f64,
    pub y: f64,
}

/// Ratio between the page size an annotation was saved against and the
/// current unzoomed page size, or `None` when no rescaling is needed.
pub fn dimension_scale(
    saved: Option<LocationDimensions>,
    page: PageDimensions,
    zoom_scale: f64,
    height_padding: f64,
) -> Option<DimensionScale> {
    let saved = saved?;
    if zoom_scale <= 0.0 || saved.x == 0.0 || saved.y == 0.0 {
        return None;
    }

    let width = page.width / zoom_scale;
    let height = (page.height - height_padding) / zoom_scale;
    let resized = (width - saved.x).abs() > SUBPIXEL_TOLERANCE
        || (height - saved.y).abs() > SUBPIXEL_TOLERANCE;
    resized.then(|| DimensionScale {
        x: width / saved.x,
        y: height / saved.y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT_PADDING: f64 = 30.0;
    const SAVED: LocationDimensions = LocationDimensions { x: 100.0, y: 100.0 };

    #[test]
    fn matching_page_needs_no_scaling() {
        let page = PageDimensions {
            width: 100.0,
            height: 130.0,
        };
        assert_eq!(dimension_scale(Some(SAVED), page, 1.0, HEIGHT_PADDING), None);
    }

    #[test]
    fn subpixel_drift_needs_no_scaling() {
        let page = PageDimensions {
            width: 100.6,
            height: 130.4,
        };
        assert_eq!(dimension_scale(Some(SAVED), page, 1.0, HEIGHT_PADDING), None);
    }

    #[test]
    fn resized_page_yields_ratio() {
        let page = PageDimensions {
            width: 200.0,
            height: 230.0,
        };
        assert_eq!(
            dimension_scale(Some(SAVED), page, 1.0, HEIGHT_PADDING),
            Some(DimensionScale { x: 2.0, y: 2.0 })
        );
    }

    #[test]
    fn zoom_is_factored_out_before_comparing() {
        let page = PageDimensions {
            width: 200.0,
            height: 260.0,
        };
        assert_eq!(dimension_scale(Some(SAVED), page, 2.0, 60.0), None);
    }

    #[test]
    fn missing_saved_dimensions_need_no_scaling() {
        let page = PageDimensions {
            width: 200.0,
            height: 230.0,
        };
        assert_eq!(dimension_scale(None, page, 1.0, HEIGHT_PADDING), None);
    }
}
