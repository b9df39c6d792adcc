//! Paired information boxes: two titled label/value panels rendered side by
//! side from the same vertical start. Each panel's height follows its own
//! wrapped content; the cursor advances past whichever ends lower.
//!
//! Deliberately no page-break pre-check here: in practice these panels stay
//! far short of a page, and the observed behaviour is to let an oversized
//! pair overflow rather than break. See DESIGN.md.

use crate::fonts;
use crate::metrics::TextStyle;
use crate::model::BoxPanel;

use super::{Fragment, Sheet, wrap_text};

const STRIP_FILL: [u8; 3] = [230, 230, 230];
const PANEL_PAD: f32 = 2.0;
/// Share of the panel width given to the label column.
const LABEL_FRAC: f32 = 0.4;

pub(crate) fn render(sheet: &mut Sheet, left: &BoxPanel, right: &BoxPanel) {
    let m = sheet.metrics();
    let col_w = m.column_width();
    let left_x = m.margin;
    let right_x = m.margin + col_w + m.gutter;
    let row_gap = m.row_gap;

    let start_y = sheet.y();
    let left_end = render_panel(sheet, left, left_x, col_w, start_y);
    let right_end = render_panel(sheet, right, right_x, col_w, start_y);

    let end_y = left_end.max(right_end);
    sheet.advance(end_y - start_y + row_gap);
}

/// Draw one panel at a fixed position and return the y where it ends.
fn render_panel(sheet: &mut Sheet, panel: &BoxPanel, x: f32, w: f32, start_y: f32) -> f32 {
    let m = sheet.metrics();
    let header_height = m.header_height;
    let heading_lh = m.line_height(TextStyle::Heading);
    let body_lh = m.line_height(TextStyle::Body);
    let label_w = w * LABEL_FRAC;
    let value_x = x + PANEL_PAD + label_w;
    let value_w = w - 2.0 * PANEL_PAD - label_w;

    sheet.push(Fragment::Rect {
        x,
        y: start_y,
        w,
        h: header_height,
        fill: Some(STRIP_FILL),
        stroke: false,
    });
    let m = sheet.metrics();
    let title_w = fonts::text_width(&panel.title, TextStyle::Heading, m);
    sheet.push(Fragment::Text {
        x: x + (w - title_w) / 2.0,
        y: start_y + (header_height - heading_lh) / 2.0,
        style: TextStyle::Heading,
        text: panel.title.clone(),
    });

    let mut y = start_y + header_height + PANEL_PAD;
    for row in &panel.rows {
        let value = if row.value.trim().is_empty() {
            "N/A"
        } else {
            row.value.as_str()
        };
        let value_lines = wrap_text(value, TextStyle::Body, value_w, sheet.metrics());
        // Labels wrap inside their own column rather than running under
        // the value column.
        let label_lines = wrap_text(&row.label, TextStyle::Body, label_w, sheet.metrics());
        for (i, line) in label_lines.iter().enumerate() {
            sheet.push(Fragment::Text {
                x: x + PANEL_PAD,
                y: y + i as f32 * body_lh,
                style: TextStyle::Body,
                text: line.clone(),
            });
        }
        for (i, line) in value_lines.iter().enumerate() {
            sheet.push(Fragment::Text {
                x: value_x,
                y: y + i as f32 * body_lh,
                style: TextStyle::Body,
                text: line.clone(),
            });
        }
        y += value_lines.len().max(label_lines.len()).max(1) as f32 * body_lh;
    }
    y += PANEL_PAD;

    sheet.push(Fragment::Rect {
        x,
        y: start_y,
        w,
        h: y - start_y,
        fill: None,
        stroke: true,
    });
    y
}
