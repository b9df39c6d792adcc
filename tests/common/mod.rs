use sitedoc_pdf::{
    Block, BoxPanel, BoxRow, Document, Fragment, Metadata, Page, Party, TextStyle,
};

pub fn metadata() -> Metadata {
    Metadata {
        company_number: Some("09876543".to_string()),
        vat_number: Some("GB123456789".to_string()),
        document_id: Some("CPP-2024-017".to_string()),
    }
}

pub fn document(blocks: Vec<Block>) -> Document {
    Document {
        blocks,
        metadata: Some(metadata()),
        logo: None,
    }
}

pub fn section(header: &str, body: &str) -> Block {
    Block::Section {
        header: header.to_string(),
        body: body.to_string(),
    }
}

pub fn panel(title: &str, rows: &[(&str, &str)]) -> BoxPanel {
    BoxPanel {
        title: title.to_string(),
        rows: rows
            .iter()
            .map(|(label, value)| BoxRow {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn signature(preamble: &str, labels: &[&str]) -> Block {
    Block::Signature {
        preamble: preamble.to_string(),
        parties: labels
            .iter()
            .map(|l| Party {
                label: l.to_string(),
            })
            .collect(),
    }
}

/// A body that wraps to exactly `n` lines at the default body width: each
/// word is 40 'm' glyphs (~117 mm at 10pt), so no two share a 180 mm line
/// and none overflows one.
pub fn body_of_lines(n: usize) -> String {
    vec!["m".repeat(40); n].join(" ")
}

/// `(y, text)` for every text fragment of `style` on the page, in placement
/// order.
pub fn texts_of_style(page: &Page, style: TextStyle) -> Vec<(f32, String)> {
    page.fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::Text {
                y,
                style: s,
                text,
                ..
            } if *s == style => Some((*y, text.clone())),
            _ => None,
        })
        .collect()
}

/// Body lines excluding panel content: fragments whose text is made of 'm'
/// words, i.e. produced by `body_of_lines`.
pub fn flowed_body_lines(page: &Page) -> Vec<(f32, String)> {
    texts_of_style(page, TextStyle::Body)
        .into_iter()
        .filter(|(_, t)| t.chars().all(|c| c == 'm' || c == ' '))
        .collect()
}

pub fn rules(page: &Page) -> Vec<(f32, f32, f32)> {
    page.fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::Rule { x, y, w } => Some((*x, *y, *w)),
            _ => None,
        })
        .collect()
}

pub fn header_strips(page: &Page) -> Vec<(f32, f32, f32)> {
    page.fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::Rect { x, y, w, fill, .. } if fill.is_some() => Some((*x, *y, *w)),
            _ => None,
        })
        .collect()
}
