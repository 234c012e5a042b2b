//! Geometry APIs
//!
//! Element boxes as reported by the host layout (`getBoundingClientRect`).

/// Rectangle in client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    /// Longer side
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Client point translated into this box's coordinate space
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left(), client_y - self.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_point() {
        let rect = DOMRect::from_xywh(10.0, 20.0, 120.0, 40.0);
        assert_eq!(rect.to_local(15.0, 25.0), (5.0, 5.0));
        assert_eq!(rect.to_local(0.0, 0.0), (-10.0, -20.0));
        assert_eq!(rect.max_side(), 120.0);
    }
}
