//! Detected text boxes and their wire representation.

use crate::core::errors::FieldMapError;
use crate::processors::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// Cached axis-aligned extent and center of a detection polygon.
///
/// This is a pure function of the polygon; it is recomputed whenever the
/// polygon changes and never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPosition {
    /// X-coordinate of the polygon center (mean of the corners).
    pub center_x: f32,
    /// Y-coordinate of the polygon center (mean of the corners).
    pub center_y: f32,
    /// Left edge of the axis-aligned extent.
    pub min_x: f32,
    /// Top edge of the axis-aligned extent.
    pub min_y: f32,
    /// Right edge of the axis-aligned extent.
    pub max_x: f32,
    /// Bottom edge of the axis-aligned extent.
    pub max_y: f32,
}

impl BoxPosition {
    /// Derives the cached position from a polygon.
    pub fn from_polygon(polygon: &BoundingBox) -> Self {
        let Point { x, y } = polygon.center();
        Self {
            center_x: x,
            center_y: y,
            min_x: polygon.x_min(),
            min_y: polygon.y_min(),
            max_x: polygon.x_max(),
            max_y: polygon.y_max(),
        }
    }
}

/// The wire shape an OCR provider produces for one detection: a 4-point
/// polygon in pixel coordinates, the recognized text, and a confidence score
/// in `[0, 1]`.
///
/// The polygon key accepts both `"polygon"` and the `"box"` spelling some
/// providers emit. A page with zero detections is a valid empty array, not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDetection {
    /// Corner points as `[x, y]` pairs.
    #[serde(alias = "box")]
    pub polygon: Vec<[f32; 2]>,
    /// Recognized text (may be empty).
    pub text: String,
    /// Recognition confidence.
    pub confidence: f32,
}

/// One OCR detection: polygon, recognized text, confidence, and the cached
/// position derived from the polygon.
///
/// The polygon and position are private so the derivation invariant cannot be
/// broken; use [`TextBox::with_polygon`] to change the geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawDetection")]
pub struct TextBox {
    polygon: BoundingBox,
    /// Recognized text (may be empty).
    pub text: String,
    /// Recognition confidence.
    pub confidence: f32,
    position: BoxPosition,
}

impl TextBox {
    /// Creates a text box, deriving the cached position from the polygon.
    ///
    /// Fails fast with [`FieldMapError::InvalidInput`] when the polygon does
    /// not have exactly 4 corner points, rather than silently coercing a
    /// malformed detection into downstream records.
    pub fn new(
        polygon: BoundingBox,
        text: impl Into<String>,
        confidence: f32,
    ) -> Result<Self, FieldMapError> {
        if polygon.points.len() != 4 {
            return Err(FieldMapError::invalid_input(format!(
                "detection polygon must have 4 corner points, got {}",
                polygon.points.len()
            )));
        }
        let position = BoxPosition::from_polygon(&polygon);
        Ok(Self {
            polygon,
            text: text.into(),
            confidence,
            position,
        })
    }

    /// The detection polygon.
    pub fn polygon(&self) -> &BoundingBox {
        &self.polygon
    }

    /// The cached position derived from the polygon.
    pub fn position(&self) -> BoxPosition {
        self.position
    }

    /// Returns a copy of this box with a new polygon, recomputing the cached
    /// position.
    pub fn with_polygon(self, polygon: BoundingBox) -> Result<Self, FieldMapError> {
        Self::new(polygon, self.text, self.confidence)
    }
}

impl TryFrom<RawDetection> for TextBox {
    type Error = FieldMapError;

    fn try_from(raw: RawDetection) -> Result<Self, Self::Error> {
        let points = raw
            .polygon
            .iter()
            .map(|&[x, y]| Point::new(x, y))
            .collect();
        Self::new(BoundingBox::new(points), raw.text, raw.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_derived_from_polygon() {
        let tb = TextBox::new(BoundingBox::from_coords(10.0, 20.0, 30.0, 40.0), "hi", 0.9).unwrap();
        let pos = tb.position();
        assert_eq!(pos.center_x, 20.0);
        assert_eq!(pos.center_y, 30.0);
        assert_eq!(pos.min_x, 10.0);
        assert_eq!(pos.max_y, 40.0);
    }

    #[test]
    fn test_rejects_wrong_polygon_arity() {
        let triangle = BoundingBox::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        let err = TextBox::new(triangle, "bad", 0.5).unwrap_err();
        assert!(matches!(err, FieldMapError::InvalidInput { .. }));
    }

    #[test]
    fn test_with_polygon_recomputes_position() {
        let tb = TextBox::new(BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0), "hi", 0.9).unwrap();
        let moved = tb
            .with_polygon(BoundingBox::from_coords(100.0, 100.0, 110.0, 110.0))
            .unwrap();
        assert_eq!(moved.position().center_x, 105.0);
        assert_eq!(moved.position().center_y, 105.0);
    }

    #[test]
    fn test_deserializes_from_provider_shape() {
        let json = r#"{
            "box": [[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [0.0, 5.0]],
            "text": "Alice",
            "confidence": 0.93
        }"#;
        let tb: TextBox = serde_json::from_str(json).unwrap();
        assert_eq!(tb.text, "Alice");
        assert_eq!(tb.position().center_x, 5.0);
        assert_eq!(tb.position().center_y, 2.5);
    }

    #[test]
    fn test_deserialization_rejects_missing_corner() {
        let json = r#"{
            "polygon": [[0.0, 0.0], [10.0, 0.0], [10.0, 5.0]],
            "text": "bad",
            "confidence": 0.5
        }"#;
        assert!(serde_json::from_str::<TextBox>(json).is_err());
    }
}
