//! Single-page PDF export.
//!
//! Lays the resume out with a top-down cursor over fixed slots: name, role,
//! contact line, then the six content sections, each a heading plus body
//! wrapped to the configured maximum width. The cursor advances by a constant
//! increment per section regardless of body length.
//!
//! Known limitation, kept on purpose: there is no reflow onto a second page.
//! Content past the bottom margin is clipped by the page, matching the
//! template this layout reproduces.
//!
//! The document is written to a temp file and renamed into place, so a
//! failed export never leaves a partial `.pdf` behind.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

use crate::errors::AppError;
use crate::layout::{helvetica_metrics, wrap_to_width, PageConfig};
use crate::profile::ResumeProfile;
use crate::render::CONTENT_SECTIONS;

const MM_PER_IN: f32 = 25.4;

/// Exports the profile as `<name or "resume">.pdf` inside `out_dir`.
/// Returns the path of the written file.
pub fn export_pdf(
    profile: &ResumeProfile,
    config: &PageConfig,
    out_dir: &Path,
) -> Result<PathBuf, AppError> {
    let out_path = out_dir.join(format!("{}.pdf", file_stem(&profile.name)));

    let (doc, page, layer) = PdfDocument::new(
        "Resume",
        Mm(config.page_width_in * MM_PER_IN),
        Mm(config.page_height_in * MM_PER_IN),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let metrics = helvetica_metrics();
    let x = Mm(config.margin_in * MM_PER_IN);
    // Top-down cursor in inches; PDF coordinates grow upward from the bottom,
    // so every placement converts through `baseline`.
    let baseline = |y_top: f32| Mm((config.page_height_in - y_top) * MM_PER_IN);
    let mut y = config.margin_in;

    let name = non_empty(&profile.name, "Your Name");
    layer.use_text(name, config.name_size_pt, x, baseline(y), &font);
    y += config.name_advance_in;

    let role = non_empty(&profile.role, "Your Role");
    layer.use_text(role, config.role_size_pt, x, baseline(y), &font);
    y += config.role_advance_in;

    let contact = format!(
        "{} | {} | {}",
        non_empty(&profile.email, "email@example.com"),
        non_empty(&profile.phone, "Phone Number"),
        non_empty(&profile.linkedin, "LinkedIn Profile"),
    );
    layer.use_text(contact, config.contact_size_pt, x, baseline(y), &font);
    y += config.contact_advance_in;

    for (field, title) in CONTENT_SECTIONS {
        let value = profile.get(field);
        if value.is_empty() {
            continue;
        }

        layer.use_text(title, config.heading_size_pt, x, baseline(y), &font);
        y += config.heading_advance_in;

        let lines = wrap_to_width(value, metrics, config.body_size_pt, config.body_width_in);
        for (i, line) in lines.iter().enumerate() {
            let line_y = y + i as f32 * config.body_line_advance_in;
            layer.use_text(line.as_str(), config.body_size_pt, x, baseline(line_y), &font);
        }
        y += config.section_advance_in;
    }

    fs::create_dir_all(out_dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(out_dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        doc.save(&mut writer).map_err(|e| AppError::Pdf(e.to_string()))?;
    }
    tmp.persist(&out_path).map_err(|e| AppError::Io(e.error))?;

    info!("Exported resume to {}", out_path.display());
    Ok(out_path)
}

fn non_empty<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Derives the output file stem from the name field, stripping characters
/// that are unsafe in file names. Empty names export as "resume".
fn file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
