/// Shared geometric primitives used by placement and dialog modules.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DialogBounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Host-provided measurements of the element the dialog is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    pub client_width: f64,
    pub client_height: f64,
}

impl ContainerMetrics {
    pub const fn new(client_width: f64, client_height: f64) -> Self {
        Self {
            client_width,
            client_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub const fn new(scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_height,
            client_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_bounds_contains_edges_and_interior() {
        let bounds = DialogBounds::new(10.0, 20.0, 100.0, 50.0);
        assert!(bounds.contains(ScreenPoint::new(10.0, 20.0)));
        assert!(bounds.contains(ScreenPoint::new(60.0, 45.0)));
        assert!(bounds.contains(ScreenPoint::new(110.0, 70.0)));
        assert!(!bounds.contains(ScreenPoint::new(9.5, 45.0)));
        assert!(!bounds.contains(ScreenPoint::new(60.0, 70.5)));
    }
}
