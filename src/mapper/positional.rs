//! Geometric region-based field assignment.
//!
//! Each box's center, normalized by the image dimensions, is tested against
//! the configured regions in schema declaration order; the first region that
//! contains it (inclusive bounds) wins. When two boxes land in the same
//! region the higher-confidence one is kept; the displaced box is dropped
//! silently rather than recorded as unmapped, matching the documented box
//! accounting.

use crate::core::config::Region;
use crate::mapper::MappingMode;
use crate::mapper::result::{FieldAssignment, MappingResult, UnmappedBox};
use crate::processors::text_box::TextBox;
use indexmap::IndexMap;
use tracing::debug;

pub(super) fn map(
    boxes: &[TextBox],
    regions: &IndexMap<String, Region>,
    image_width: u32,
    image_height: u32,
) -> MappingResult {
    // Every configured region starts out null so the result is complete even
    // with zero detections.
    let mut fields: IndexMap<String, Option<FieldAssignment>> =
        regions.keys().map(|name| (name.clone(), None)).collect();

    let mut unmapped_boxes = Vec::new();

    for (idx, text_box) in boxes.iter().enumerate() {
        let pos = text_box.position();
        let norm_x = pos.center_x / image_width as f32;
        let norm_y = pos.center_y / image_height as f32;

        let matched = regions
            .iter()
            .find(|(_, region)| region.contains(norm_x, norm_y))
            .map(|(name, _)| name);

        let Some(name) = matched else {
            unmapped_boxes.push(UnmappedBox {
                original_index: idx,
                text: text_box.text.clone(),
                confidence: text_box.confidence,
            });
            continue;
        };

        if let Some(slot) = fields.get_mut(name.as_str()) {
            match slot {
                // Strict comparison: equal confidence retains the first-seen box.
                Some(held) if held.confidence >= text_box.confidence => {
                    debug!(
                        field = %name,
                        held = held.confidence,
                        candidate = text_box.confidence,
                        "box displaced by existing assignment"
                    );
                }
                _ => {
                    if slot.is_some() {
                        debug!(field = %name, "replacing lower-confidence assignment");
                    }
                    *slot = Some(FieldAssignment::from_box(text_box));
                }
            }
        }
    }

    // Distinct filled fields, not assignment events
    let mapped_fields = fields.values().filter(|v| v.is_some()).count();
    debug!(mapped_fields, unmapped = unmapped_boxes.len(), "positional mapping complete");

    MappingResult {
        fields,
        mapping_mode: MappingMode::Positional,
        total_boxes: boxes.len(),
        mapped_fields,
        unmapped_boxes,
    }
}
