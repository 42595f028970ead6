//! Geometry and collision utilities
//!
//! Pure, stateless functions shared by every game variant. All predicates use
//! strict inequality: edge-touching counts as non-collision.

use serde::Serialize;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict point-in-rect test (points on the edge are outside)
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }
}

/// True iff two axis-aligned rectangles intersect.
///
/// Symmetric in its arguments: `rect_overlap(a, b) == rect_overlap(b, a)`.
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// True iff the Euclidean distance between two centers is strictly less than
/// `threshold`. Compares squared distances, no square root on the hot path.
pub fn circle_overlap(a: (f64, f64), b: (f64, f64), threshold: f64) -> bool {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy < threshold * threshold
}

/// Teleport-style coordinate wrap: below zero jumps to `max`, above `max`
/// jumps to zero, in-range values pass through unchanged. Not modulo.
pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

/// Standard clamp to `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);

        assert!(rect_overlap(&a, &b));
        assert!(!rect_overlap(&a, &c));
    }

    #[test]
    fn test_rect_overlap_edge_touching_is_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(!rect_overlap(&a, &b));
        assert!(!rect_overlap(&b, &a));
    }

    #[test]
    fn test_point_in_rect_strict() {
        let paddle = Rect::new(10.0, 125.0, 10.0, 50.0);

        assert!(paddle.contains(15.0, 140.0));
        assert!(!paddle.contains(10.0, 140.0)); // on the left edge
        assert!(!paddle.contains(15.0, 125.0)); // on the top edge
    }

    #[test]
    fn test_circle_overlap() {
        // bullet at (100, 100), asteroid at (95, 95) with size 20:
        // distance is about 7.07, well under the threshold
        assert!(circle_overlap((100.0, 100.0), (95.0, 95.0), 20.0));
        assert!(!circle_overlap((0.0, 0.0), (30.0, 40.0), 50.0)); // exactly 50
        assert!(!circle_overlap((0.0, 0.0), (100.0, 0.0), 20.0));
    }

    #[test]
    fn test_wrap_coordinate_boundaries() {
        assert_eq!(wrap_coordinate(-1.0, 600.0), 600.0);
        assert_eq!(wrap_coordinate(601.0, 600.0), 0.0);
        assert_eq!(wrap_coordinate(300.0, 600.0), 300.0);
        assert_eq!(wrap_coordinate(0.0, 600.0), 0.0);
        assert_eq!(wrap_coordinate(600.0, 600.0), 600.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }
}
