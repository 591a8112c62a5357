//! Reading-order sorting for detected text boxes.
//!
//! Approximates natural top-to-bottom, left-to-right reading order by
//! bucketing boxes into visual text lines: each box is assigned the line
//! bucket `floor(center_y / tolerance)` and buckets are ordered top to
//! bottom, then left to right by center x within a bucket. The tolerance
//! absorbs the small vertical jitter OCR detections show within one line.
//!
//! This heuristic is not layout-aware: multi-column documents, right-to-left
//! scripts, and rotated text are not handled.

use crate::processors::text_box::TextBox;

/// Default vertical tolerance in pixels for grouping boxes into a line.
pub const DEFAULT_LINE_TOLERANCE_PX: f32 = 20.0;

fn line_bucket(center_y: f32, tolerance: f32) -> i64 {
    (center_y / tolerance).floor() as i64
}

/// Sorts boxes into reading order.
///
/// A total order over the input: no boxes are dropped or duplicated, and
/// boxes with identical `(bucket, center_x)` keys retain their input relative
/// order (the sort is stable). Always succeeds, including on empty input.
pub fn sort_reading_order(mut boxes: Vec<TextBox>, line_tolerance_px: f32) -> Vec<TextBox> {
    boxes.sort_by(|a, b| {
        let bucket_a = line_bucket(a.position().center_y, line_tolerance_px);
        let bucket_b = line_bucket(b.position().center_y, line_tolerance_px);
        bucket_a
            .cmp(&bucket_b)
            .then_with(|| a.position().center_x.total_cmp(&b.position().center_x))
    });
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::geometry::BoundingBox;

    fn box_at(center_x: f32, center_y: f32, text: &str) -> TextBox {
        TextBox::new(
            BoundingBox::from_coords(center_x - 5.0, center_y - 5.0, center_x + 5.0, center_y + 5.0),
            text,
            0.9,
        )
        .unwrap()
    }

    fn texts(boxes: &[TextBox]) -> Vec<&str> {
        boxes.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_sorts_top_to_bottom_left_to_right() {
        let boxes = vec![
            box_at(200.0, 100.0, "c"),
            box_at(50.0, 10.0, "a"),
            box_at(50.0, 100.0, "b"),
        ];
        let sorted = sort_reading_order(boxes, DEFAULT_LINE_TOLERANCE_PX);
        assert_eq!(texts(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn test_vertical_jitter_within_line_tolerance() {
        // Same visual line: centers at y=42 and y=47 share bucket 2,
        // so left-to-right order wins despite the later box sitting higher.
        let boxes = vec![box_at(300.0, 42.0, "right"), box_at(20.0, 47.0, "left")];
        let sorted = sort_reading_order(boxes, DEFAULT_LINE_TOLERANCE_PX);
        assert_eq!(texts(&sorted), ["left", "right"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let boxes = vec![
            box_at(200.0, 100.0, "c"),
            box_at(50.0, 10.0, "a"),
            box_at(50.0, 100.0, "b"),
            box_at(10.0, 11.0, "a0"),
        ];
        let sorted = sort_reading_order(boxes, DEFAULT_LINE_TOLERANCE_PX);
        let resorted = sort_reading_order(sorted.clone(), DEFAULT_LINE_TOLERANCE_PX);
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn test_stable_for_identical_keys() {
        let first = box_at(50.0, 50.0, "first");
        let second = box_at(50.0, 50.0, "second");
        let sorted = sort_reading_order(vec![first, second], DEFAULT_LINE_TOLERANCE_PX);
        assert_eq!(texts(&sorted), ["first", "second"]);
    }

    #[test]
    fn test_empty_input() {
        let sorted = sort_reading_order(Vec::new(), DEFAULT_LINE_TOLERANCE_PX);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_no_boxes_dropped_or_duplicated() {
        let boxes: Vec<TextBox> = (0..10)
            .map(|i| box_at((i * 37 % 200) as f32, (i * 53 % 300) as f32, "x"))
            .collect();
        let sorted = sort_reading_order(boxes.clone(), DEFAULT_LINE_TOLERANCE_PX);
        assert_eq!(sorted.len(), boxes.len());
    }
}
