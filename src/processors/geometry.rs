//! Geometric primitives for detected text regions.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A detection polygon represented by a collection of corner points.
///
/// Detection polygons are not necessarily axis-aligned; the `x_min`/`y_min`/
/// `x_max`/`y_max` accessors describe the axis-aligned extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// The corner points that define the polygon.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned bounding box from corner coordinates.
    ///
    /// The four corners are emitted clockwise starting at the top-left, so
    /// the result is a valid 4-point detection polygon.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Gets the minimum x-coordinate of all points, or 0.0 if there are none.
    pub fn x_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the minimum y-coordinate of all points, or 0.0 if there are none.
    pub fn y_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the maximum x-coordinate of all points, or 0.0 if there are none.
    pub fn x_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Gets the maximum y-coordinate of all points, or 0.0 if there are none.
    pub fn y_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Returns the arithmetic mean of the corner points.
    ///
    /// For the 4-point detection polygons used throughout this crate this is
    /// the center used for reading-order sorting and region matching. Returns
    /// the origin for an empty polygon.
    pub fn center(&self) -> Point {
        if self.points.is_empty() {
            return Point::new(0.0, 0.0);
        }
        let n = self.points.len() as f32;
        let sum_x: f32 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f32 = self.points.iter().map(|p| p.y).sum();
        Point::new(sum_x / n, sum_y / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox::from_coords(10.0, 20.0, 100.0, 80.0);
        assert_eq!(bbox.x_min(), 10.0);
        assert_eq!(bbox.y_min(), 20.0);
        assert_eq!(bbox.x_max(), 100.0);
        assert_eq!(bbox.y_max(), 80.0);
    }

    #[test]
    fn test_bounding_box_center_is_corner_mean() {
        let bbox = BoundingBox::from_coords(0.0, 0.0, 10.0, 20.0);
        assert_eq!(bbox.center(), Point::new(5.0, 10.0));

        // Non-axis-aligned quadrilateral
        let skewed = BoundingBox::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 2.0),
            Point::new(12.0, 10.0),
            Point::new(2.0, 8.0),
        ]);
        assert_eq!(skewed.center(), Point::new(6.0, 5.0));
    }

    #[test]
    fn test_extent_of_skewed_polygon() {
        let skewed = BoundingBox::new(vec![
            Point::new(5.0, 1.0),
            Point::new(20.0, 3.0),
            Point::new(18.0, 12.0),
            Point::new(3.0, 10.0),
        ]);
        assert_eq!(skewed.x_min(), 3.0);
        assert_eq!(skewed.y_min(), 1.0);
        assert_eq!(skewed.x_max(), 20.0);
        assert_eq!(skewed.y_max(), 12.0);
    }

    #[test]
    fn test_empty_polygon_defaults() {
        let empty = BoundingBox::new(vec![]);
        assert_eq!(empty.x_min(), 0.0);
        assert_eq!(empty.y_max(), 0.0);
        assert_eq!(empty.center(), Point::new(0.0, 0.0));
    }
}
