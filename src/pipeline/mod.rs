//! Per-page orchestration: raw detections -> sorter -> filter -> mapper.
//!
//! Each call owns its inputs and touches no shared mutable state, so pages
//! may be processed fully in parallel with a shared [`FieldMapper`] and
//! [`PipelineConfig`].

pub mod result;

pub use result::{DocumentResult, PageResult};

use crate::core::config::PipelineConfig;
use crate::core::errors::FieldMapError;
use crate::mapper::FieldMapper;
use crate::processors::{TextBox, filter_by_confidence, sort_reading_order};
use tracing::info;

/// Runs the mapping pipeline for one page.
///
/// The returned record keeps both the raw detections (for audit output) and
/// the sorted, filtered boxes that actually fed the mapper (for overlay
/// drawing); downstream consumers must not re-derive mapping decisions.
pub fn map_page(
    page_number: usize,
    raw_boxes: Vec<TextBox>,
    image_width: u32,
    image_height: u32,
    config: &PipelineConfig,
    mapper: &FieldMapper,
) -> Result<PageResult, FieldMapError> {
    let sorted = sort_reading_order(raw_boxes.clone(), config.line_tolerance_px);
    let filtered = filter_by_confidence(sorted, config.min_confidence);

    let mapping = mapper.map(&filtered, Some(image_width), Some(image_height))?;
    info!(
        page = page_number,
        boxes = filtered.len(),
        mapped_fields = mapping.mapped_fields,
        "page mapped"
    );

    Ok(PageResult {
        page_number,
        image_width,
        image_height,
        raw_boxes,
        filtered_boxes: filtered,
        mapping,
    })
}
