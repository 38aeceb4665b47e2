//! Screen drawing: form pane on the left, live preview on the right, one
//! status bar at the bottom. Everything is redrawn from scratch each frame;
//! at eleven fields and one page of preview that is far below any flicker
//! threshold.

use std::io::Write;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use crate::errors::AppError;
use crate::profile::Field;
use crate::render::build_preview;
use crate::render::preview::Section;
use crate::state::{App, Mode};

const ROWS_PER_FIELD: usize = 3; // label, value, error slot

pub fn draw(app: &App, out: &mut impl Write) -> Result<(), AppError> {
    let (width, height) = terminal::size()?;
    let width = width as usize;
    let height = height as usize;
    if width < 10 || height < 5 {
        return Ok(());
    }

    let split = width / 2;
    let form_width = split.saturating_sub(1);
    let preview_width = width.saturating_sub(split + 1);

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(clip("Resume Studio — Enter Your Details", width)),
        SetAttribute(Attribute::Reset),
    )?;

    draw_form(app, out, form_width, height)?;
    draw_preview(app, out, split + 1, preview_width, height)?;
    draw_status(app, out, width, height)?;

    out.flush()?;
    Ok(())
}

fn draw_form(app: &App, out: &mut impl Write, width: usize, height: usize) -> Result<(), AppError> {
    // Keep the focused field in view on short terminals.
    let avail = height.saturating_sub(2);
    let visible = (avail / ROWS_PER_FIELD).max(1);
    let first = if app.focus >= visible {
        app.focus + 1 - visible
    } else {
        0
    };

    for (i, field) in Field::ALL.into_iter().enumerate().skip(first).take(visible) {
        let row = (1 + (i - first) * ROWS_PER_FIELD) as u16;
        let focused = i == app.focus;

        let mut label = String::new();
        label.push_str(if focused { "> " } else { "  " });
        label.push_str(field.label());
        if field.is_required() {
            label.push_str(" *");
        }

        queue!(out, cursor::MoveTo(0, row))?;
        if focused {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(clip(&label, width)), SetAttribute(Attribute::Reset))?;

        let value = app.form.value(field).replace('\n', " ⏎ ");
        let mut shown = tail(&value, width.saturating_sub(5));
        if focused {
            shown.push('_');
        }
        queue!(
            out,
            cursor::MoveTo(0, row + 1),
            Print(clip(&format!("    {shown}"), width)),
        )?;

        if let Some(msg) = app.form.error(field) {
            queue!(
                out,
                cursor::MoveTo(0, row + 2),
                SetForegroundColor(Color::Red),
                Print(clip(&format!("    {msg}"), width)),
                ResetColor,
            )?;
        }
    }
    Ok(())
}

fn draw_preview(
    app: &App,
    out: &mut impl Write,
    x: usize,
    width: usize,
    height: usize,
) -> Result<(), AppError> {
    if width < 8 {
        return Ok(());
    }
    let preview = build_preview(app.form.profile());

    let mut lines: Vec<String> = vec![
        preview.name.to_uppercase(),
        preview.role.clone(),
        preview.contact.clone(),
        String::new(),
    ];

    // Two sub-columns inside the preview pane, mirroring the page layout.
    let col_width = width.saturating_sub(2) / 2;
    let left = column_lines(&preview.left, col_width);
    let right = column_lines(&preview.right, col_width);
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        lines.push(format!("{l:<col_width$}  {r}"));
    }

    for (row, line) in lines.iter().enumerate().take(height.saturating_sub(2)) {
        queue!(
            out,
            cursor::MoveTo(x as u16, (row + 1) as u16),
            Print(clip(line, width)),
        )?;
    }
    Ok(())
}

fn draw_status(app: &App, out: &mut impl Write, width: usize, height: usize) -> Result<(), AppError> {
    let status = match &app.mode {
        Mode::Notice(msg) => format!("{msg} — press any key"),
        Mode::ConfirmReset => "Reset all fields? (y/n)".to_string(),
        Mode::Edit if app.exporting => "Generating PDF...".to_string(),
        Mode::Edit => {
            let readiness = if app.form.is_valid() {
                "Ready to export"
            } else {
                "Name and email required"
            };
            format!("{readiness} · Ctrl-E export · Ctrl-R reset · Tab/↓ next field · Esc quit")
        }
    };

    queue!(
        out,
        cursor::MoveTo(0, (height - 1) as u16),
        SetAttribute(Attribute::Reverse),
        Print(format!("{:<width$}", clip(&status, width))),
        SetAttribute(Attribute::Reset),
    )?;
    Ok(())
}

/// Renders one preview column: per section a title, an underline, the wrapped
/// body, and a blank spacer line.
fn column_lines(sections: &[Section], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(section.title.to_string());
        lines.push("─".repeat(section.title.chars().count().min(width)));
        lines.extend(wrap_cols(&section.body, width));
        lines.push(String::new());
    }
    lines
}

/// Character-count greedy wrap for the monospace preview. Newlines are hard
/// breaks; words wider than the column get a line of their own.
fn wrap_cols(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Truncates to `max` display characters.
fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Keeps the end of the string (where editing happens) when it is too long.
fn tail(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max || max == 0 {
        s.to_string()
    } else {
        let skip = count - max + 1;
        let kept: String = s.chars().skip(skip).collect();
        format!("…{kept}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
