//! Result types produced by the field mapper.

use crate::mapper::MappingMode;
use crate::processors::geometry::BoundingBox;
use crate::processors::text_box::TextBox;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One box assigned to one field.
///
/// Created only by the mapper and immutable afterwards; fields that never
/// received a box are represented as `None` in [`MappingResult::fields`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldAssignment {
    /// Recognized text copied from the source box.
    pub text: String,
    /// Confidence copied from the source box.
    pub confidence: f32,
    /// Detection polygon copied from the source box.
    pub polygon: BoundingBox,
}

impl FieldAssignment {
    pub(crate) fn from_box(text_box: &TextBox) -> Self {
        Self {
            text: text_box.text.clone(),
            confidence: text_box.confidence,
            polygon: text_box.polygon().clone(),
        }
    }
}

/// A detected box that could not be placed into any field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnmappedBox {
    /// Index of the box in the mapper's input sequence.
    pub original_index: usize,
    /// Recognized text of the box.
    pub text: String,
    /// Confidence of the box.
    pub confidence: f32,
}

/// Output of one mapping pass.
///
/// `fields` is complete, never partial: one entry per schema field
/// (sequential mode) or per configured region (positional mode), in schema
/// declaration order. Given the same boxes and schema the result is
/// bit-for-bit identical across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingResult {
    /// Field name to assignment, ordered by schema declaration order.
    pub fields: IndexMap<String, Option<FieldAssignment>>,
    /// The policy that produced this result.
    pub mapping_mode: MappingMode,
    /// Number of boxes given to this mapping pass.
    pub total_boxes: usize,
    /// Number of fields holding a non-null assignment.
    pub mapped_fields: usize,
    /// Boxes that could not be placed into any field, in input order.
    pub unmapped_boxes: Vec<UnmappedBox>,
}

impl MappingResult {
    /// Flattens the result into field name to text-only form, for consumers
    /// that only care about the textual values.
    ///
    /// Pure and order-preserving relative to `fields`; drops confidence and
    /// geometry.
    pub fn to_simple_output(&self) -> IndexMap<String, Option<String>> {
        self.fields
            .iter()
            .map(|(name, assignment)| {
                (name.clone(), assignment.as_ref().map(|a| a.text.clone()))
            })
            .collect()
    }

    /// Counts fields holding a non-null assignment.
    ///
    /// Always equals `mapped_fields`; exposed so the invariant is checkable.
    pub fn filled_field_count(&self) -> usize {
        self.fields.values().filter(|v| v.is_some()).count()
    }
}

impl fmt::Display for MappingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, assignment) in &self.fields {
            match assignment {
                Some(a) => writeln!(f, "{}: {} (confidence: {:.2})", name, a.text, a.confidence)?,
                None => writeln!(f, "{}: [not detected]", name)?,
            }
        }
        writeln!(f, "Mapping mode: {}", self.mapping_mode)?;
        writeln!(f, "Total boxes: {}", self.total_boxes)?;
        writeln!(f, "Mapped fields: {}", self.mapped_fields)?;
        if !self.unmapped_boxes.is_empty() {
            writeln!(f, "Unmapped boxes ({}):", self.unmapped_boxes.len())?;
            for b in &self.unmapped_boxes {
                writeln!(f, "  - {} (confidence: {:.2})", b.text, b.confidence)?;
            }
        }
        Ok(())
    }
}
