//! fieldmap CLI
//!
//! Maps OCR text detections from scanned documents (PDFs or images) onto
//! named schema fields and writes machine-readable records plus overlay
//! visualizations.
//!
//! # Usage
//!
//! ```bash
//! fieldmap form.pdf --config fieldmap.json --detections form_detections.json
//! fieldmap scan.png --config fieldmap.json --detections scan_detections.json --confidence 0.8 --no-viz
//! fieldmap long.pdf --config fieldmap.json --detections long_detections.json --first-page 2 --last-page 4
//! ```
//!
//! The detections file is the OCR provider's output: a JSON array with one
//! entry per page, each entry an array of `{polygon|box, text, confidence}`
//! records.

mod detect;
mod output;
mod pdf;
mod run;
mod viz;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "fieldmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Map OCR detections from scanned documents onto schema fields", long_about = None)]
pub struct Cli {
    /// Input document (PDF or image)
    pub input: PathBuf,

    /// Pipeline configuration file (JSON: mapping schema, tolerances)
    #[arg(long, default_value = "fieldmap.json", env = "FIELDMAP_CONFIG")]
    pub config: PathBuf,

    /// OCR provider output: one JSON array of detections per page
    #[arg(long, env = "FIELDMAP_DETECTIONS")]
    pub detections: PathBuf,

    /// Minimum confidence threshold override (0.0-1.0)
    #[arg(long)]
    pub confidence: Option<f32>,

    /// Disable overlay rendering
    #[arg(long = "no-viz")]
    pub no_viz: bool,

    /// Directory for results and overlays
    #[arg(long, default_value = "output", env = "FIELDMAP_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// First PDF page to process (1-indexed, inclusive)
    #[arg(long)]
    pub first_page: Option<usize>,

    /// Last PDF page to process (1-indexed, inclusive)
    #[arg(long)]
    pub last_page: Option<usize>,

    /// Render DPI for PDF pages
    #[arg(long, default_value = "200")]
    pub dpi: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    ocr_fieldmap::utils::init_tracing();

    let cli = Cli::parse();
    info!(input = %cli.input.display(), "processing file");
    run::process_file(&cli)?;

    Ok(())
}
