//! The footer pass. Page numbering is a function of total output length,
//! which is unknowable until layout completes, so this runs as an explicit
//! second phase over the finished page sequence.

use crate::fonts;
use crate::metrics::{Metrics, TextStyle};
use crate::model::Metadata;

use super::{Fragment, Page};

/// Stamp the present metadata fields and "Page i of N" into the bottom
/// margin of every page.
pub(crate) fn stamp(pages: &mut [Page], metadata: &Metadata, m: &Metrics) {
    let mut fields: Vec<String> = Vec::new();
    if let Some(v) = &metadata.company_number {
        fields.push(format!("Company No. {v}"));
    }
    if let Some(v) = &metadata.vat_number {
        fields.push(format!("VAT No. {v}"));
    }
    if let Some(v) = &metadata.document_id {
        fields.push(format!("Doc Ref {v}"));
    }
    let line = fields.join(" \u{2022} ");

    let total = pages.len();
    let y = m.page_height - m.margin + 2.0;

    for (i, page) in pages.iter_mut().enumerate() {
        if !line.is_empty() {
            page.fragments.push(Fragment::Text {
                x: m.margin,
                y,
                style: TextStyle::Footer,
                text: line.clone(),
            });
        }
        let label = format!("Page {} of {}", i + 1, total);
        let label_w = fonts::text_width(&label, TextStyle::Footer, m);
        page.fragments.push(Fragment::Text {
            x: m.page_width - m.margin - label_w,
            y,
            style: TextStyle::Footer,
            text: label,
        });
    }
}
