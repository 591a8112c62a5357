//! Confidence filtering for detected text boxes.

use crate::processors::text_box::TextBox;
use tracing::debug;

/// Retains boxes with `confidence >= min_confidence`, preserving relative
/// order and leaving retained boxes untouched.
///
/// The threshold is taken as-is: values outside `[0, 1]` are not errors.
/// A threshold above 1.0 filters everything, a negative one keeps everything.
pub fn filter_by_confidence(boxes: Vec<TextBox>, min_confidence: f32) -> Vec<TextBox> {
    let before = boxes.len();
    let kept: Vec<TextBox> = boxes
        .into_iter()
        .filter(|b| b.confidence >= min_confidence)
        .collect();
    debug!(
        dropped = before - kept.len(),
        kept = kept.len(),
        min_confidence,
        "filtered low-confidence boxes"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::geometry::BoundingBox;

    fn box_with_confidence(text: &str, confidence: f32) -> TextBox {
        TextBox::new(
            BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0),
            text,
            confidence,
        )
        .unwrap()
    }

    #[test]
    fn test_filters_below_threshold() {
        let boxes = vec![
            box_with_confidence("keep", 0.9),
            box_with_confidence("drop", 0.3),
            box_with_confidence("edge", 0.5),
        ];
        let kept = filter_by_confidence(boxes, 0.5);
        let texts: Vec<&str> = kept.iter().map(|b| b.text.as_str()).collect();
        // Threshold comparison is >=, so the exact-threshold box stays.
        assert_eq!(texts, ["keep", "edge"]);
    }

    #[test]
    fn test_threshold_above_one_filters_everything() {
        let boxes = vec![
            box_with_confidence("a", 1.0),
            box_with_confidence("b", 0.99),
        ];
        assert!(filter_by_confidence(boxes, 1.1).is_empty());
    }

    #[test]
    fn test_negative_threshold_keeps_everything() {
        let boxes = vec![
            box_with_confidence("a", 0.0),
            box_with_confidence("b", 0.01),
        ];
        let kept = filter_by_confidence(boxes.clone(), -1.0);
        assert_eq!(kept, boxes);
    }

    #[test]
    fn test_order_preserved() {
        let boxes = vec![
            box_with_confidence("first", 0.9),
            box_with_confidence("gone", 0.1),
            box_with_confidence("second", 0.8),
            box_with_confidence("third", 0.7),
        ];
        let kept = filter_by_confidence(boxes, 0.5);
        let texts: Vec<&str> = kept.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }
}
