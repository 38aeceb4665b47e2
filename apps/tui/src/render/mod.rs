// Resume Renderer / Exporter: turns the current profile into the on-screen
// preview and the single-page PDF. Both walk the same six content sections
// in the same order; empty sections are omitted entirely.

pub mod pdf;
pub mod preview;

use crate::profile::Field;

/// The six content sections in render order. The preview shows the first
/// three in the left column and the rest in the right column; the PDF lays
/// all six out top to bottom.
pub const CONTENT_SECTIONS: [(Field, &str); 6] = [
    (Field::Summary, "Summary"),
    (Field::Education, "Education"),
    (Field::Languages, "Languages"),
    (Field::Skills, "Skills"),
    (Field::KeyAchievements, "Key Achievements"),
    (Field::Passion, "Passion"),
];

pub use pdf::export_pdf;
pub use preview::{build_preview, Preview};
