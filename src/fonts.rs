//! Text measurement for the base-14 Helvetica family. The engine's
//! typography is fixed, so no font files are discovered or embedded: layout
//! works from built-in WinAnsi advance-width tables and the PDF references
//! Helvetica / Helvetica-Bold as standard Type1 fonts.

use crate::metrics::{MM_TO_PT, Metrics, TextStyle};

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str
/// encoding. Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0000..=0x007F => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2020 => Some(0x86),
            0x2021 => Some(0x87),
            0x02C6 => Some(0x88),
            0x2030 => Some(0x89),
            0x0160 => Some(0x8A),
            0x2039 => Some(0x8B),
            0x0152 => Some(0x8C),
            0x017D => Some(0x8E),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95), // bullet
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x02DC => Some(0x98),
            0x2122 => Some(0x99),
            0x0161 => Some(0x9A),
            0x203A => Some(0x9B),
            0x0153 => Some(0x9C),
            0x017E => Some(0x9E),
            0x0178 => Some(0x9F),
            _ => None,
        })
        .collect()
}

/// Approximate Helvetica advance width at 1000 units/em for a WinAnsi byte.
fn helvetica_width_1000(b: u8) -> f32 {
    match b {
        32 => 278.0,                          // space
        33..=47 => 333.0,                     // punctuation
        48..=57 => 556.0,                     // digits
        58..=64 => 333.0,                     // more punctuation
        73 | 74 => 278.0,                     // I J (narrow uppercase)
        77 | 87 => 833.0,                     // M W (wide)
        65..=90 => 667.0,                     // uppercase A-Z (average)
        91..=96 => 333.0,                     // brackets etc.
        102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
        109 | 119 => 833.0,                   // m w (wide)
        97..=122 => 556.0,                    // lowercase a-z (average)
        _ => 556.0,
    }
}

/// Approximate Helvetica-Bold advance width at 1000 units/em.
fn helvetica_bold_width_1000(b: u8) -> f32 {
    match b {
        32 => 278.0,
        33..=47 => 333.0,
        48..=57 => 556.0,
        58..=64 => 333.0,
        73 | 74 => 278.0,
        77 | 87 => 889.0,
        65..=90 => 722.0,
        91..=96 => 333.0,
        102 | 105 | 106 | 108 | 116 => 333.0,
        109 | 119 => 889.0,
        97..=122 => 611.0,
        _ => 611.0,
    }
}

/// Advance width of `text` in points at `size_pt`.
fn text_width_pt(text: &str, size_pt: f32, bold: bool) -> f32 {
    let per_byte = if bold {
        helvetica_bold_width_1000
    } else {
        helvetica_width_1000
    };
    to_winansi_bytes(text)
        .iter()
        .filter(|&&b| b >= 32)
        .map(|&b| per_byte(b) * size_pt / 1000.0)
        .sum()
}

/// Width of `text` in layout units (mm) when set in `style`.
pub(crate) fn text_width(text: &str, style: TextStyle, m: &Metrics) -> f32 {
    text_width_pt(text, m.font_size(style), m.is_bold(style)) / MM_TO_PT
}
