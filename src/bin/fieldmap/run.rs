//! End-to-end processing of one input file.

use crate::Cli;
use crate::detect;
use crate::output;
use crate::pdf::{PdfProcessor, PdfRenderSettings, is_pdf_bytes, is_pdf_path};
use crate::viz;
use image::RgbImage;
use ocr_fieldmap::pipeline::map_page;
use ocr_fieldmap::{DocumentResult, FieldMapError, FieldMapper, PageResult, PipelineConfig};
use rayon::prelude::*;
use std::io::Read;
use std::path::Path;
use tracing::{error, info, warn};

/// Runs the full pipeline for the CLI's input file: rasterize, ingest
/// provider detections, map each page, write overlays and results.
pub fn process_file(cli: &Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = PipelineConfig::from_file(&cli.config)?;
    if let Some(confidence) = cli.confidence {
        config.min_confidence = confidence;
    }

    let mapper = FieldMapper::new(config.box_mapping.clone());
    info!(mode = %mapper.mode(), "field mapper initialized");

    let is_pdf = input_is_pdf(&cli.input)?;
    let images: Vec<RgbImage> = if is_pdf {
        info!("rendering PDF pages to images...");
        let settings = PdfRenderSettings {
            dpi: cli.dpi,
            first_page: cli.first_page,
            last_page: cli.last_page,
            ..PdfRenderSettings::default()
        };
        let processor = PdfProcessor::new(settings)?;
        processor.render_pdf_file(&cli.input)?
    } else {
        vec![image::open(&cli.input).map_err(FieldMapError::from)?.to_rgb8()]
    };
    info!(pages = images.len(), "input rasterized");

    let detections = detect::load_detections(&cli.detections)?;
    if detections.len() != images.len() {
        return Err(Box::new(FieldMapError::invalid_input(format!(
            "detections file has {} pages but the input produced {}",
            detections.len(),
            images.len()
        ))));
    }

    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    // Pages are independent and the mapper is pure, so map and draw in
    // parallel. A failed page is skipped, not fatal for the document.
    let page_outcomes: Vec<Option<PageResult>> = images
        .into_par_iter()
        .zip(detections.into_par_iter())
        .enumerate()
        .map(|(idx, (image, raw_boxes))| {
            let page_number = idx + 1;
            match map_page(
                page_number,
                raw_boxes,
                image.width(),
                image.height(),
                &config,
                &mapper,
            ) {
                Ok(page) => {
                    if !cli.no_viz {
                        if let Err(e) = save_overlays(&image, &page, &cli.output_dir, &stem) {
                            warn!(page = page_number, error = %e, "failed to write overlays");
                        }
                    }
                    Some(page)
                }
                Err(e) => {
                    error!(page = page_number, error = %e, "page mapping failed, skipping page");
                    None
                }
            }
        })
        .collect();

    let pages: Vec<PageResult> = page_outcomes.into_iter().flatten().collect();
    if pages.is_empty() {
        return Err(Box::new(FieldMapError::invalid_input(
            "no page could be mapped",
        )));
    }

    let doc = DocumentResult {
        input_path: cli.input.display().to_string(),
        is_pdf,
        total_pages: pages.len(),
        mapping_mode: mapper.mode(),
        min_confidence: config.min_confidence,
        pages,
    };

    let saved = output::save_results(&doc, &cli.output_dir, &stem)?;
    output::print_summary(&doc, &saved);

    Ok(())
}

fn save_overlays(
    image: &RgbImage,
    page: &PageResult,
    output_dir: &Path,
    stem: &str,
) -> Result<(), FieldMapError> {
    std::fs::create_dir_all(output_dir)?;

    let boxes_path = output_dir.join(format!("{stem}_page_{}_boxes.png", page.page_number));
    viz::draw_detection_overlay(image, page)
        .save(&boxes_path)
        .map_err(FieldMapError::from)?;

    let fields_path = output_dir.join(format!("{stem}_page_{}_fields.png", page.page_number));
    viz::draw_field_overlay(image, page)
        .save(&fields_path)
        .map_err(FieldMapError::from)?;

    info!(
        page = page.page_number,
        boxes = %boxes_path.display(),
        fields = %fields_path.display(),
        "saved overlays"
    );
    Ok(())
}

/// PDF detection by extension first, then by the `%PDF` magic bytes for
/// files without a telling extension.
fn input_is_pdf(path: &Path) -> Result<bool, FieldMapError> {
    if is_pdf_path(path) {
        return Ok(true);
    }
    let mut head = [0u8; 4];
    let n = std::fs::File::open(path)?.read(&mut head)?;
    Ok(is_pdf_bytes(&head[..n]))
}
