//! The box-to-field mapping engine.
//!
//! The mapper consumes sorted, filtered text boxes and produces a
//! [`MappingResult`]: a complete field-name-to-assignment table plus
//! bookkeeping (box counts, unmapped boxes). The assignment policy is the
//! closed [`MappingMode`] enum dispatched in one place, so the
//! fallback-on-unknown behavior is an explicit, testable branch rather than
//! an implicit default.
//!
//! The mapper owns no long-lived state across calls: [`FieldMapper::map`] is
//! a pure function of (boxes, schema, image dimensions), so pages may be
//! mapped in parallel with a shared mapper.

mod positional;
pub mod result;
mod sequential;

pub use result::{FieldAssignment, MappingResult, UnmappedBox};

use crate::core::config::MappingSchema;
use crate::core::errors::FieldMapError;
use crate::processors::text_box::TextBox;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Assignment policy for the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Boxes in reading order fill an ordered field list index by index.
    Sequential,
    /// Boxes fill the first configured page region containing their
    /// normalized center.
    Positional,
}

impl MappingMode {
    /// Resolves a configured mode string into a policy.
    ///
    /// Unrecognized values log a warning and fall back to sequential instead
    /// of failing; this lenient branch is deliberate and stands apart from
    /// the fail-fast handling of malformed schemas and detections.
    pub fn resolve(mode: &str) -> Self {
        match mode {
            "sequential" => Self::Sequential,
            "positional" => Self::Positional,
            other => {
                warn!(mode = other, "unknown mapping mode, falling back to sequential");
                Self::Sequential
            }
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

/// Maps detected text boxes to named fields under a resolved policy.
#[derive(Debug, Clone)]
pub struct FieldMapper {
    schema: MappingSchema,
    mode: MappingMode,
}

impl FieldMapper {
    /// Builds a mapper from a schema, resolving its mode string once.
    pub fn new(schema: MappingSchema) -> Self {
        let mode = MappingMode::resolve(&schema.mode);
        Self { schema, mode }
    }

    /// The resolved assignment policy.
    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    /// Maps boxes to fields.
    ///
    /// For sequential mapping the boxes must already be in reading order;
    /// the mapper does not re-sort. Positional mapping requires positive
    /// image dimensions and fails with [`FieldMapError::ConfigError`] when
    /// either is missing or zero.
    pub fn map(
        &self,
        boxes: &[TextBox],
        image_width: Option<u32>,
        image_height: Option<u32>,
    ) -> Result<MappingResult, FieldMapError> {
        match self.mode {
            MappingMode::Sequential => Ok(sequential::map(boxes, &self.schema.sequential_fields)),
            MappingMode::Positional => {
                let (width, height) = match (image_width, image_height) {
                    (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
                    _ => {
                        return Err(FieldMapError::config(
                            "positional mapping requires positive image dimensions",
                        ));
                    }
                };
                Ok(positional::map(
                    boxes,
                    &self.schema.positional_mapping,
                    width,
                    height,
                ))
            }
        }
    }
}
