//! Logical window coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in logical screen units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum against `min`
    pub fn clamp_min(self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

/// Outer window position and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
}

impl WindowGeometry {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Convert a screen point into window-local coordinates
    pub fn to_local(&self, global: Point) -> Point {
        global - self.position
    }

    /// True when `local` lies within `margin` of any edge, boundary included.
    pub fn is_near_edge(&self, local: Point, margin: f64) -> bool {
        local.x <= margin
            || local.y <= margin
            || self.size.width - local.x <= margin
            || self.size.height - local.y <= margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a - b, Point::new(7.0, 15.0));
        assert_eq!(a + b, Point::new(13.0, 25.0));
    }

    #[test]
    fn test_edge_detection() {
        let geometry = WindowGeometry::new(Point::new(100.0, 100.0), Size::new(800.0, 600.0));

        assert!(geometry.is_near_edge(Point::new(5.0, 300.0), 10.0));
        assert!(geometry.is_near_edge(Point::new(400.0, 595.0), 10.0));
        assert!(geometry.is_near_edge(Point::new(795.0, 300.0), 10.0));
        assert!(!geometry.is_near_edge(Point::new(400.0, 300.0), 10.0));

        // Exactly on the margin counts as an edge
        assert!(geometry.is_near_edge(Point::new(10.0, 300.0), 10.0));
        assert!(geometry.is_near_edge(Point::new(790.0, 300.0), 10.0));
        assert!(!geometry.is_near_edge(Point::new(11.0, 300.0), 10.0));
    }

    #[test]
    fn test_clamp_min() {
        let min = Size::new(400.0, 300.0);
        assert_eq!(Size::new(350.0, 500.0).clamp_min(min), Size::new(400.0, 500.0));
        assert_eq!(Size::new(900.0, 100.0).clamp_min(min), Size::new(900.0, 300.0));
    }
}
