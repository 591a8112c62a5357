//! PDF rasterization.
//!
//! Pages are rendered through pdfium to RGB images at a configurable DPI so
//! the overlay drawing and positional mapping work in the same pixel space
//! the OCR provider saw.

use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("failed to initialize pdfium: {0}")]
    Init(String),

    #[error("failed to load PDF: {0}")]
    Load(String),

    #[error("failed to render page {page}: {message}")]
    Render { page: usize, message: String },

    #[error("PDF has no pages")]
    EmptyPdf,

    #[error("invalid page range: first_page {first} > last_page {last}")]
    InvalidPageRange { first: usize, last: usize },
}

/// Rendering parameters for PDF pages.
#[derive(Clone)]
pub struct PdfRenderSettings {
    /// Render resolution in dots per inch.
    pub dpi: f32,
    /// Cap on either output dimension; oversized pages are scaled down
    /// proportionally.
    pub max_dimension: u32,
    /// First page to render, 1-indexed inclusive. Defaults to the document
    /// start.
    pub first_page: Option<usize>,
    /// Last page to render, 1-indexed inclusive. Defaults to the document
    /// end.
    pub last_page: Option<usize>,
}

impl Default for PdfRenderSettings {
    fn default() -> Self {
        Self {
            dpi: 200.0,
            max_dimension: 4000,
            first_page: None,
            last_page: None,
        }
    }
}

/// Renders PDF pages to RGB images via a pdfium binding.
pub struct PdfProcessor {
    pdfium: Pdfium,
    settings: PdfRenderSettings,
}

impl PdfProcessor {
    /// Binds to a pdfium library and prepares a processor.
    ///
    /// Looks next to the binary first, then in the usual system library
    /// locations, then falls back to the platform's default lookup.
    pub fn new(settings: PdfRenderSettings) -> Result<Self, PdfError> {
        let pdfium = Pdfium::new(
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| {
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                        "/usr/lib",
                    ))
                })
                .or_else(|_| {
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                        "/usr/local/lib",
                    ))
                })
                .or_else(|_| {
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                        "/opt/homebrew/lib",
                    ))
                })
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| PdfError::Init(format!("could not find pdfium library: {}", e)))?,
        );

        Ok(Self { pdfium, settings })
    }

    /// Loads a PDF file and renders its configured page range.
    pub fn render_pdf_file(&self, path: &Path) -> Result<Vec<RgbImage>, PdfError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfError::Load(e.to_string()))?;

        self.render_document(&document)
    }

    fn render_document(&self, document: &PdfDocument) -> Result<Vec<RgbImage>, PdfError> {
        let page_count = document.pages().len() as usize;
        if page_count == 0 {
            return Err(PdfError::EmptyPdf);
        }

        let (first, last) = resolve_page_range(
            self.settings.first_page,
            self.settings.last_page,
            page_count,
        )?;

        let mut images = Vec::with_capacity(last - first + 1);
        for (index, page) in document.pages().iter().enumerate() {
            let page_number = index + 1;
            if page_number < first || page_number > last {
                continue;
            }
            let image = self.render_page(&page).map_err(|e| PdfError::Render {
                page: page_number,
                message: e.to_string(),
            })?;
            images.push(image);
        }

        Ok(images)
    }

    fn render_page(&self, page: &PdfPage) -> Result<RgbImage, PdfError> {
        // PDF page sizes are in points, 72 per inch
        let scale = self.settings.dpi / 72.0;
        let (width_px, height_px) = fit_to_max(
            (page.width().value * scale) as u32,
            (page.height().value * scale) as u32,
            self.settings.max_dimension,
        );

        let render_config = PdfRenderConfig::new()
            .set_target_width(width_px as i32)
            .set_target_height(height_px as i32)
            .render_form_data(true)
            .render_annotations(true);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfError::Render {
                page: 0,
                message: e.to_string(),
            })?;

        Ok(bitmap.as_image().to_rgb8())
    }
}

/// Clamps an optional 1-indexed inclusive page range to the document.
fn resolve_page_range(
    first_page: Option<usize>,
    last_page: Option<usize>,
    page_count: usize,
) -> Result<(usize, usize), PdfError> {
    let first = first_page.unwrap_or(1).max(1);
    let last = last_page.unwrap_or(page_count).min(page_count);
    if first > last {
        return Err(PdfError::InvalidPageRange { first, last });
    }
    Ok((first, last))
}

/// Scales dimensions down proportionally so neither exceeds `max_dimension`.
fn fit_to_max(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }
    let ratio = if width > height {
        max_dimension as f32 / width as f32
    } else {
        max_dimension as f32 / height as f32
    };
    ((width as f32 * ratio) as u32, (height as f32 * ratio) as u32)
}

/// Checks the `%PDF` magic bytes.
pub fn is_pdf_bytes(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && &bytes[0..4] == b"%PDF"
}

/// Checks for a `.pdf` extension, case-insensitively.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_ascii_lowercase() == "pdf")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_page_range_defaults_to_whole_document() {
        assert_eq!(resolve_page_range(None, None, 5).unwrap(), (1, 5));
    }

    #[test]
    fn test_page_range_clamps_to_document() {
        assert_eq!(resolve_page_range(Some(2), Some(99), 5).unwrap(), (2, 5));
        assert_eq!(resolve_page_range(Some(0), None, 5).unwrap(), (1, 5));
    }

    #[test]
    fn test_page_range_rejects_inverted_bounds() {
        assert!(matches!(
            resolve_page_range(Some(4), Some(2), 5),
            Err(PdfError::InvalidPageRange { first: 4, last: 2 })
        ));
    }

    #[test]
    fn test_fit_to_max_preserves_small_dimensions() {
        assert_eq!(fit_to_max(800, 600, 4000), (800, 600));
    }

    #[test]
    fn test_fit_to_max_scales_proportionally() {
        let (w, h) = fit_to_max(8000, 4000, 4000);
        assert_eq!(w, 4000);
        assert_eq!(h, 2000);
    }

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf_bytes(b"%PDF-1.7"));
        assert!(!is_pdf_bytes(b"PNG"));
        assert!(is_pdf_path(&PathBuf::from("scan.PDF")));
        assert!(!is_pdf_path(&PathBuf::from("scan.png")));
    }
}
