//! Signature block: unconditionally starts a fresh page so a signed copy
//! can be physically separated from the rest of the document, then lays out
//! a wrapped preamble and a signature/date rule pair per party.

use crate::metrics::TextStyle;
use crate::model::Party;

use super::{Fragment, Sheet, place_paragraph};

const SIGNATURE_RULE_W: f32 = 70.0;
const DATE_RULE_W: f32 = 40.0;
/// Vertical room above each rule for the handwritten signature.
const SIGNING_SPACE: f32 = 12.0;
/// Gap between a rule and the label beneath it.
const LABEL_DROP: f32 = 1.5;

pub(crate) fn render(sheet: &mut Sheet, preamble: &str, parties: &[Party]) {
    // Never shares a page with preceding content, regardless of space.
    sheet.break_page();

    let m = sheet.metrics();
    let x = m.margin;
    let w = m.content_width();
    let party_height = m.party_height;
    let date_x = m.page_width - m.margin - DATE_RULE_W;

    if !preamble.trim().is_empty() {
        place_paragraph(sheet, preamble, TextStyle::Body, x, w);
    }

    for party in parties {
        // A party never straddles the bottom margin; it moves whole.
        if sheet.remaining() < party_height {
            sheet.break_page();
        }
        let y = sheet.y();
        let rule_y = y + SIGNING_SPACE;
        sheet.push(Fragment::Rule {
            x,
            y: rule_y,
            w: SIGNATURE_RULE_W,
        });
        let label = if party.label.trim().is_empty() {
            "N/A"
        } else {
            party.label.as_str()
        };
        sheet.push(Fragment::Text {
            x,
            y: rule_y + LABEL_DROP,
            style: TextStyle::Body,
            text: label.to_string(),
        });
        sheet.push(Fragment::Rule {
            x: date_x,
            y: rule_y,
            w: DATE_RULE_W,
        });
        sheet.push(Fragment::Text {
            x: date_x,
            y: rule_y + LABEL_DROP,
            style: TextStyle::Body,
            text: "Date".to_string(),
        });
        sheet.advance(party_height);
    }
}
