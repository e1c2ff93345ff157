//! Floating-point pixel coordinates.

/// A point in pixel space, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` in direction `angle` (radians).
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Snap to the nearest integer pixel coordinate.
    pub fn to_pixel(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_axis_aligned() {
        let p = Point::new(10.0, 10.0).polar(5.0, 0.0);
        assert!((p.x - 15.0).abs() < 1e-12);
        assert!((p.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_pixel_rounds() {
        assert_eq!(Point::new(1.4, 2.6).to_pixel(), (1, 3));
        assert_eq!(Point::new(-0.6, 0.5).to_pixel(), (-1, 1));
    }
}
