//! Loading OCR provider output.
//!
//! The OCR engine is an external collaborator; this tool consumes its
//! detections as a JSON file with one array per document page, each entry a
//! `{polygon|box, text, confidence}` record. An empty page array means zero
//! detections and is valid, not an error.

use ocr_fieldmap::FieldMapError;
use ocr_fieldmap::processors::{RawDetection, TextBox};
use std::path::Path;
use tracing::info;

/// Loads per-page detections from a provider output file.
pub fn load_detections(path: &Path) -> Result<Vec<Vec<TextBox>>, FieldMapError> {
    let data = std::fs::read_to_string(path)?;
    let pages: Vec<Vec<RawDetection>> = serde_json::from_str(&data).map_err(|e| {
        FieldMapError::invalid_input(format!(
            "malformed detections file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let boxes: Result<Vec<Vec<TextBox>>, FieldMapError> = pages
        .into_iter()
        .map(|page| page.into_iter().map(TextBox::try_from).collect())
        .collect();
    let boxes = boxes?;

    info!(
        pages = boxes.len(),
        detections = boxes.iter().map(Vec::len).sum::<usize>(),
        "loaded provider detections"
    );
    Ok(boxes)
}
