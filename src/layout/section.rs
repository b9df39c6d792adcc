//! Titled section: a fixed-height filled header strip over wrapped body
//! text. The fit check runs before the strip is drawn, so a header is never
//! the last thing on a page with no body beneath it.

use crate::fonts;
use crate::metrics::TextStyle;

use super::{Fragment, Sheet, place_paragraph};

const STRIP_FILL: [u8; 3] = [217, 217, 217];

pub(crate) fn render(sheet: &mut Sheet, header: &str, body: &str) {
    let m = sheet.metrics();
    let body_lh = m.line_height(TextStyle::Body);
    let heading_lh = m.line_height(TextStyle::Heading);
    let header_height = m.header_height;
    let heading_gap = m.heading_gap;
    let x = m.margin;
    let w = m.content_width();

    // Header plus the orphan minimum of body must fit, or the whole section
    // starts on a fresh page.
    let needed = header_height + heading_gap + m.min_orphan_lines as f32 * body_lh;
    if sheet.remaining() < needed {
        sheet.break_page();
    }

    let y = sheet.y();
    sheet.push(Fragment::Rect {
        x,
        y,
        w,
        h: header_height,
        fill: Some(STRIP_FILL),
        stroke: false,
    });
    let m = sheet.metrics();
    let label_w = fonts::text_width(header, TextStyle::Heading, m);
    sheet.push(Fragment::Text {
        x: x + (w - label_w) / 2.0,
        y: y + (header_height - heading_lh) / 2.0,
        style: TextStyle::Heading,
        text: header.to_string(),
    });
    sheet.advance(header_height + heading_gap);

    let body = if body.trim().is_empty() {
        "No description provided"
    } else {
        body
    };
    place_paragraph(sheet, body, TextStyle::Body, x, w);
}
