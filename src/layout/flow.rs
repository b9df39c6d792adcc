//! Text flow: greedy word wrapping and orphan-controlled paragraph
//! placement across page breaks.

use crate::fonts;
use crate::metrics::{Metrics, TextStyle};

use super::{Fragment, Sheet};

/// Wrap `text` into lines no wider than `max_width`, breaking at word
/// boundaries only. A single token wider than the column gets a line of its
/// own and overflows; the engine never breaks inside a word.
pub(crate) fn wrap_text(text: &str, style: TextStyle, max_width: f32, m: &Metrics) -> Vec<String> {
    let space_w = fonts::text_width(" ", style, m);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w: f32 = 0.0;

    for word in text.split_whitespace() {
        let ww = fonts::text_width(word, style, m);
        if current.is_empty() {
            if ww > max_width {
                log::debug!("token wider than column ({ww:.1} > {max_width:.1} mm): {word:?}");
            }
            current.push_str(word);
            current_w = ww;
        } else if current_w + space_w + ww <= max_width {
            current.push(' ');
            current.push_str(word);
            current_w += space_w + ww;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = ww;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Place a wrapped paragraph at the cursor, splitting across pages under the
/// orphan policy: a page never ends with fewer than `min_orphan_lines` lines
/// of the paragraph, and a fragment too short to meet that moves to a fresh
/// page whole. Advances the cursor past the text plus paragraph spacing.
pub(crate) fn place_paragraph(sheet: &mut Sheet, text: &str, style: TextStyle, x: f32, width: f32) {
    let m = sheet.metrics();
    let lines = wrap_text(text, style, width, m);
    if lines.is_empty() {
        return;
    }
    let lh = m.line_height(style);
    let min_orphan = m.min_orphan_lines;
    let paragraph_spacing = m.paragraph_spacing;

    let mut rest: &[String] = &lines;
    loop {
        let total = rest.len() as f32 * lh;
        if total <= sheet.remaining() {
            place_lines(sheet, rest, style, x, lh);
            sheet.advance(paragraph_spacing);
            return;
        }

        // Negative remaining floors to zero lines available.
        let available = (sheet.remaining() / lh).floor() as usize;
        if available >= min_orphan {
            place_lines(sheet, &rest[..available], style, x, lh);
            rest = &rest[available..];
        }
        // Else: leave the old page as it is; the whole remainder starts
        // fresh rather than stranding an orphan fragment.
        sheet.break_page();
    }
}

fn place_lines(sheet: &mut Sheet, lines: &[String], style: TextStyle, x: f32, lh: f32) {
    for line in lines {
        sheet.push(Fragment::Text {
            x,
            y: sheet.y(),
            style,
            text: line.clone(),
        });
        sheet.advance(lh);
    }
}
