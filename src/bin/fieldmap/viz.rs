//! Overlay rendering for detections and field assignments.
//!
//! Purely a consumer of the page record: boxes and field assignments are
//! taken as decided by the mapper, never re-derived here.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use ocr_fieldmap::PageResult;
use ocr_fieldmap::processors::BoundingBox;

/// Cycling palette for per-field colors, mirrored in the text report legend.
const PALETTE: [Rgb<u8>; 6] = [
    Rgb([0, 200, 0]),
    Rgb([0, 80, 255]),
    Rgb([230, 0, 0]),
    Rgb([0, 190, 190]),
    Rgb([200, 0, 200]),
    Rgb([220, 180, 0]),
];

const DETECTION_COLOR: Rgb<u8> = Rgb([0, 200, 0]);

/// Returns the overlay color used for the field at `index`.
pub fn field_color(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}

/// Draws every filtered box that fed the mapper onto a copy of the page image.
pub fn draw_detection_overlay(image: &RgbImage, page: &PageResult) -> RgbImage {
    let mut out = image.clone();
    for text_box in &page.filtered_boxes {
        outline_polygon(&mut out, text_box.polygon(), DETECTION_COLOR);
    }
    out
}

/// Draws each mapped field's box in its palette color onto a copy of the
/// page image. Fields without an assignment draw nothing.
pub fn draw_field_overlay(image: &RgbImage, page: &PageResult) -> RgbImage {
    let mut out = image.clone();
    for (index, (_name, assignment)) in page.mapping.fields.iter().enumerate() {
        if let Some(assignment) = assignment {
            outline_polygon(&mut out, &assignment.polygon, field_color(index));
        }
    }
    out
}

/// Outlines a polygon with 2px edges.
fn outline_polygon(image: &mut RgbImage, polygon: &BoundingBox, color: Rgb<u8>) {
    let points = &polygon.points;
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        draw_line_segment_mut(image, (a.x, a.y), (b.x, b.y), color);
        draw_line_segment_mut(image, (a.x + 1.0, a.y + 1.0), (b.x + 1.0, b.y + 1.0), color);
    }
}
