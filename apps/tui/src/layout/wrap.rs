//! Greedy word wrap against a metric-measured width budget.
//!
//! Used by the PDF exporter to break section bodies at the fixed maximum
//! width. Existing newlines in the input are hard breaks; within a paragraph,
//! words are packed left-to-right until the next word would overflow. Words
//! wider than the whole budget get a line of their own rather than being
//! split mid-word.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width_in` at `font_size_pt`.
///
/// Empty input (or whitespace-only paragraphs) produces no lines.
pub fn wrap_to_width(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_in: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0f32;
        let space_width = metrics.space_width * font_size_pt / 72.0;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.width_in(word, font_size_pt);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space_width + word_width <= max_width_in {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
