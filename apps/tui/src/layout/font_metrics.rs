//! Static font metrics and page geometry for the single-page exporter.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Helvetica AFM tables — exact for the built-in PDF font the
//! exporter uses. The table covers ASCII 0x20..=0x7E (95 printable
//! characters); index = (char as usize) - 32. Non-ASCII characters fall back
//! to an average width, which is good enough for wrap decisions.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Fixed slot geometry for the exported page, in inches and points.
///
/// These mirror the template the preview shows: US letter, content starting
/// 0.5" from the top-left, one constant vertical advance per slot. There is no
/// dynamic pagination — see `render::pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_in: f32,
    pub page_height_in: f32,
    /// Left margin; also the top-of-page starting offset for the cursor.
    pub margin_in: f32,

    pub name_size_pt: f32,
    pub role_size_pt: f32,
    pub contact_size_pt: f32,
    pub heading_size_pt: f32,
    pub body_size_pt: f32,

    /// Cursor advance after the name line.
    pub name_advance_in: f32,
    /// Cursor advance after the role line.
    pub role_advance_in: f32,
    /// Cursor advance after the contact line.
    pub contact_advance_in: f32,
    /// Cursor advance between a section heading and its body.
    pub heading_advance_in: f32,
    /// Constant cursor advance per content section, regardless of body length.
    pub section_advance_in: f32,
    /// Baseline-to-baseline distance between wrapped body lines.
    pub body_line_advance_in: f32,

    /// Maximum body text width before wrapping.
    pub body_width_in: f32,
}

/// Default page config: US letter (8.5" × 11"), 0.5" margins, the classic
/// slot advances (0.3" header lines, 0.2" heading gap, 0.5" per section).
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_in: 8.5,
        page_height_in: 11.0,
        margin_in: 0.5,
        name_size_pt: 16.0,
        role_size_pt: 12.0,
        contact_size_pt: 12.0,
        heading_size_pt: 14.0,
        body_size_pt: 10.0,
        name_advance_in: 0.3,
        role_advance_in: 0.3,
        contact_advance_in: 0.5,
        heading_advance_in: 0.2,
        section_advance_in: 0.5,
        body_line_advance_in: 0.16,
        body_width_in: 7.5,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font, in em units at 1em.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in inches at the given font size (1pt = 1/72").
    pub fn width_in(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt / 72.0
    }
}

/// Standard Helvetica AFM widths, /1000 em, for ASCII 0x20..=0x7E.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    widths: [
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, // sp ! " # $ % & '
        0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278, // ( ) * + , - . /
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, // 0-7
        0.556, 0.556, 0.278, 0.278, 0.584, 0.584, 0.584, 0.556, // 8 9 : ; < = > ?
        1.015, 0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, // @ A B C D E F G
        0.722, 0.278, 0.500, 0.667, 0.556, 0.833, 0.722, 0.778, // H I J K L M N O
        0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, // P Q R S T U V W
        0.667, 0.667, 0.611, 0.278, 0.278, 0.278, 0.469, 0.556, // X Y Z [ \ ] ^ _
        0.333, 0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, // ` a b c d e f g
        0.556, 0.222, 0.222, 0.500, 0.222, 0.833, 0.556, 0.556, // h i j k l m n o
        0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, // p q r s t u v w
        0.500, 0.500, 0.500, 0.334, 0.260, 0.334, 0.584, // x y z { | } ~
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Returns the metric table for the exporter's font (built-in Helvetica).
pub fn helvetica_metrics() -> &'static FontMetricTable {
    &HELVETICA_TABLE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
