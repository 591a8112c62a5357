//! Configuration for the field-mapping pipeline.
//!
//! The schema is externally supplied and read-only to the mapping core: the
//! mapper never mutates it, so one schema may be shared across threads while
//! pages are mapped in parallel.

use crate::core::errors::FieldMapError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_mode() -> String {
    "sequential".to_string()
}

fn default_line_tolerance() -> f32 {
    crate::processors::sorter::DEFAULT_LINE_TOLERANCE_PX
}

fn default_min_confidence() -> f32 {
    0.5
}

/// A normalized rectangular page region, each coordinate in `[0.0, 1.0]`
/// as a fraction of image width/height.
///
/// Serialized as a 4-element array `[x_min, y_min, x_max, y_max]`; any other
/// arity is a configuration error. Regions are allowed to overlap; tie-break
/// among overlapping regions is schema declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Region {
    /// Left edge of the region.
    pub x_min: f32,
    /// Top edge of the region.
    pub y_min: f32,
    /// Right edge of the region.
    pub x_max: f32,
    /// Bottom edge of the region.
    pub y_max: f32,
}

impl Region {
    /// Creates a new region from normalized corner coordinates.
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Tests whether a normalized point lies inside the region.
    ///
    /// Bounds are inclusive on all four sides, so a point exactly on an edge
    /// matches.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }
}

impl TryFrom<Vec<f32>> for Region {
    type Error = FieldMapError;

    fn try_from(coords: Vec<f32>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            &[x_min, y_min, x_max, y_max] => Ok(Self::new(x_min, y_min, x_max, y_max)),
            other => Err(FieldMapError::config_detailed(
                "malformed region",
                format!("expected 4 coordinates, got {}", other.len()),
            )),
        }
    }
}

impl From<Region> for Vec<f32> {
    fn from(region: Region) -> Self {
        vec![region.x_min, region.y_min, region.x_max, region.y_max]
    }
}

/// Schema describing how detected boxes become named fields.
///
/// `mode` stays a free-form string here; it is resolved into the closed
/// [`crate::mapper::MappingMode`] enum when a mapper is built, which is where
/// the unknown-mode fallback lives. Both field tables may be present; only
/// the one matching the resolved mode is consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingSchema {
    /// Mapping policy: `"sequential"` or `"positional"`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Ordered field names for sequential mapping.
    #[serde(default)]
    pub sequential_fields: Vec<String>,
    /// Field name to page region, in declaration order, for positional
    /// mapping. Declaration order is observable (overlap tie-break and output
    /// field order), so this must stay an ordered map.
    #[serde(default)]
    pub positional_mapping: IndexMap<String, Region>,
}

impl Default for MappingSchema {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            sequential_fields: Vec::new(),
            positional_mapping: IndexMap::new(),
        }
    }
}

/// Full pipeline configuration: the schema plus sorter/filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The box-to-field mapping schema.
    #[serde(default)]
    pub box_mapping: MappingSchema,
    /// Vertical tolerance in pixels for grouping boxes into one text line
    /// during reading-order sorting.
    #[serde(default = "default_line_tolerance")]
    pub line_tolerance_px: f32,
    /// Minimum detection confidence applied when the caller does not
    /// override it.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            box_mapping: MappingSchema::default(),
            line_tolerance_px: default_line_tolerance(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl PipelineConfig {
    /// Parses a pipeline configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, FieldMapError> {
        serde_json::from_str(json)
            .map_err(|e| FieldMapError::config_detailed("failed to parse configuration", e.to_string()))
    }

    /// Loads a pipeline configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FieldMapError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains_is_inclusive() {
        let region = Region::new(0.0, 0.0, 0.5, 0.5);
        assert!(region.contains(0.25, 0.25));
        assert!(region.contains(0.0, 0.25));
        assert!(region.contains(0.5, 0.25));
        assert!(region.contains(0.25, 0.0));
        assert!(region.contains(0.25, 0.5));
        assert!(!region.contains(0.51, 0.25));
    }

    #[test]
    fn test_region_rejects_wrong_arity() {
        let err = Region::try_from(vec![0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, FieldMapError::ConfigError { .. }));
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn test_region_roundtrips_through_json_array() {
        let region: Region = serde_json::from_str("[0.1, 0.2, 0.8, 0.9]").unwrap();
        assert_eq!(region, Region::new(0.1, 0.2, 0.8, 0.9));
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "[0.1,0.2,0.8,0.9]");
    }

    #[test]
    fn test_schema_preserves_region_declaration_order() {
        let json = r#"{
            "mode": "positional",
            "positional_mapping": {
                "header": [0.0, 0.0, 1.0, 0.2],
                "name": [0.0, 0.2, 0.5, 0.5],
                "email": [0.5, 0.2, 1.0, 0.5]
            }
        }"#;
        let schema: MappingSchema = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = schema.positional_mapping.keys().map(String::as_str).collect();
        assert_eq!(names, ["header", "name", "email"]);
    }

    #[test]
    fn test_pipeline_config_defaults() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(config.box_mapping.mode, "sequential");
        assert_eq!(config.line_tolerance_px, 20.0);
        assert_eq!(config.min_confidence, 0.5);
    }

    #[test]
    fn test_pipeline_config_rejects_malformed_region() {
        let json = r#"{"box_mapping": {"positional_mapping": {"name": [0.0, 0.0]}}}"#;
        let err = PipelineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, FieldMapError::ConfigError { .. }));
    }
}
