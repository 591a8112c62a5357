//! Result persistence: JSON document record plus a human-readable text
//! report, and the console summary.

use chrono::Local;
use ocr_fieldmap::{DocumentResult, FieldMapError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files one save produced.
pub struct SavedFiles {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// Saves the document record as timestamped JSON and text files.
pub fn save_results(
    doc: &DocumentResult,
    output_dir: &Path,
    stem: &str,
) -> Result<SavedFiles, FieldMapError> {
    fs::create_dir_all(output_dir)?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    let json_path = output_dir.join(format!("{stem}_{timestamp}.json"));
    fs::write(&json_path, serde_json::to_string_pretty(doc)?)?;
    info!(path = %json_path.display(), "saved JSON results");

    let text_path = output_dir.join(format!("{stem}_{timestamp}.txt"));
    fs::write(&text_path, render_text_report(doc))?;
    info!(path = %text_path.display(), "saved text results");

    Ok(SavedFiles {
        json: json_path,
        text: text_path,
    })
}

/// Renders the human-readable report.
fn render_text_report(doc: &DocumentResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(doc, &mut out);
    out
}

fn write_report(doc: &DocumentResult, f: &mut impl std::fmt::Write) -> std::fmt::Result {
    writeln!(f, "{}", "=".repeat(60))?;
    writeln!(f, "FIELD MAPPING RESULTS")?;
    writeln!(f, "{}", "=".repeat(60))?;
    writeln!(f)?;
    writeln!(f, "Input: {}", doc.input_path)?;
    writeln!(f, "Pages: {}", doc.total_pages)?;
    writeln!(f, "Mapping mode: {}", doc.mapping_mode)?;
    writeln!(f, "Confidence threshold: {:.2}", doc.min_confidence)?;

    for page in &doc.pages {
        writeln!(f)?;
        writeln!(f, "--- Page {} ---", page.page_number)?;
        writeln!(f)?;
        writeln!(f, "Mapped fields:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        write!(f, "{}", page.mapping)?;

        if !page.raw_boxes.is_empty() {
            writeln!(f)?;
            writeln!(f, "All detected text:")?;
            writeln!(f, "{}", "-".repeat(40))?;
            for (idx, text_box) in page.raw_boxes.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} (conf: {:.2})",
                    idx + 1,
                    text_box.text,
                    text_box.confidence
                )?;
            }
        }
    }

    Ok(())
}

/// Prints a per-page summary of the mapping to the console.
pub fn print_summary(doc: &DocumentResult, saved: &SavedFiles) {
    println!();
    println!("{}", "=".repeat(60));
    println!("RESULTS SUMMARY");
    println!("{}", "=".repeat(60));
    println!();

    for page in &doc.pages {
        print!("{page}");
        println!();
    }

    println!("Output files:");
    println!("  json: {}", saved.json.display());
    println!("  text: {}", saved.text.display());
    println!();
    println!("Processing complete.");
}
