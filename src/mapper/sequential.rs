//! Position-in-list field assignment.
//!
//! The first box in reading order fills the first field, the second box the
//! second field, and so on. No content inspection occurs; the caller is
//! responsible for having sorted the boxes into reading order.

use crate::mapper::MappingMode;
use crate::mapper::result::{FieldAssignment, MappingResult, UnmappedBox};
use crate::processors::text_box::TextBox;
use indexmap::IndexMap;
use tracing::debug;

pub(super) fn map(boxes: &[TextBox], field_names: &[String]) -> MappingResult {
    let mut fields: IndexMap<String, Option<FieldAssignment>> =
        IndexMap::with_capacity(field_names.len());

    for (idx, name) in field_names.iter().enumerate() {
        fields.insert(name.clone(), boxes.get(idx).map(FieldAssignment::from_box));
    }

    // Excess boxes beyond the last field, in original order
    let unmapped_boxes: Vec<UnmappedBox> = boxes
        .iter()
        .enumerate()
        .skip(field_names.len())
        .map(|(idx, b)| UnmappedBox {
            original_index: idx,
            text: b.text.clone(),
            confidence: b.confidence,
        })
        .collect();

    let mapped_fields = boxes.len().min(field_names.len());
    debug!(mapped_fields, unmapped = unmapped_boxes.len(), "sequential mapping complete");

    MappingResult {
        fields,
        mapping_mode: MappingMode::Sequential,
        total_boxes: boxes.len(),
        mapped_fields,
        unmapped_boxes,
    }
}
