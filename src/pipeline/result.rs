//! Page- and document-level result records.
//!
//! These records are the sole interface the visualizer and output writer
//! consume; mapping decisions live in [`MappingResult`] and are never
//! re-derived downstream.

use crate::mapper::{MappingMode, MappingResult};
use crate::processors::TextBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything produced for one document page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_number: usize,
    /// Pixel width of the page image.
    pub image_width: u32,
    /// Pixel height of the page image.
    pub image_height: u32,
    /// Unfiltered detections, kept for audit/debug output.
    pub raw_boxes: Vec<TextBox>,
    /// The sorted, confidence-filtered boxes that fed the mapper, kept for
    /// overlay drawing.
    pub filtered_boxes: Vec<TextBox>,
    /// The mapping produced for this page.
    pub mapping: MappingResult,
}

/// Results for a whole input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Path of the input file.
    pub input_path: String,
    /// Whether the input was a PDF (as opposed to a single image).
    pub is_pdf: bool,
    /// Number of pages processed.
    pub total_pages: usize,
    /// The resolved mapping policy used for every page.
    pub mapping_mode: MappingMode,
    /// The confidence threshold that was applied.
    pub min_confidence: f32,
    /// Per-page results in document page order.
    pub pages: Vec<PageResult>,
}

impl fmt::Display for PageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page {}:", self.page_number)?;
        writeln!(
            f,
            "  Image dimensions: [{}, {}]",
            self.image_width, self.image_height
        )?;
        writeln!(f, "  Detected boxes: {}", self.mapping.total_boxes)?;
        writeln!(f, "  Mapped fields: {}", self.mapping.mapped_fields)?;
        writeln!(f, "  Extracted data:")?;
        for (name, value) in self.mapping.to_simple_output() {
            match value {
                Some(text) => writeln!(f, "    {}: {}", name, text)?,
                None => writeln!(f, "    {}: [not detected]", name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MappingSchema;
    use crate::mapper::FieldMapper;
    use crate::processors::geometry::BoundingBox;

    #[test]
    fn test_page_result_display_lists_fields() {
        let schema = MappingSchema {
            mode: "sequential".to_string(),
            sequential_fields: vec!["name".to_string(), "email".to_string()],
            ..MappingSchema::default()
        };
        let boxes = vec![
            TextBox::new(BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0), "Alice", 0.9).unwrap(),
        ];
        let mapping = FieldMapper::new(schema).map(&boxes, None, None).unwrap();
        let page = PageResult {
            page_number: 1,
            image_width: 100,
            image_height: 100,
            raw_boxes: boxes.clone(),
            filtered_boxes: boxes,
            mapping,
        };

        let rendered = page.to_string();
        assert!(rendered.contains("Page 1:"));
        assert!(rendered.contains("name: Alice"));
        assert!(rendered.contains("email: [not detected]"));
    }
}
