//! The pagination engine: cursor/page state, the placed-fragment model, and
//! the block dispatch loop. Everything here works in layout units (mm,
//! top-left origin); turning pages into PDF bytes is `pdf::render`'s job.

mod boxes;
mod flow;
mod footer;
mod section;
mod signature;

pub(crate) use flow::{place_paragraph, wrap_text};

use crate::error::Error;
use crate::fonts;
use crate::metrics::{Metrics, TextStyle};
use crate::model::{Block, Document};

/// The current write position: page index plus vertical offset from the top
/// of the page. `y` only ever increases within a page and resets to the
/// margin on a page break.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f32,
}

/// One drawable placed on a page by a block renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// A single pre-wrapped line of text; `y` is the top of the line box.
    Text {
        x: f32,
        y: f32,
        style: TextStyle,
        text: String,
    },
    /// A filled and/or stroked rectangle (header strips, panel borders).
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<[u8; 3]>,
        stroke: bool,
    },
    /// A horizontal line (signature and date rules).
    Rule { x: f32, y: f32, w: f32 },
    /// The logo; at most one per document, on page 1.
    Image { x: f32, y: f32, w: f32, h: f32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub fragments: Vec<Fragment>,
}

/// The finished first-pass output: an append-only page sequence. Footer
/// stamping mutates it in place once the page count is final.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}

/// Cursor plus the growing page sequence for one generation call. Owned
/// exclusively by the caller; nothing here is shared between two
/// generations.
pub struct Sheet<'a> {
    m: &'a Metrics,
    pages: Vec<Page>,
    cursor: Cursor,
}

impl<'a> Sheet<'a> {
    pub fn new(m: &'a Metrics) -> Self {
        Self {
            m,
            pages: vec![Page::default()],
            cursor: Cursor {
                page: 0,
                y: m.margin,
            },
        }
    }

    pub fn metrics(&self) -> &Metrics {
        self.m
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn y(&self) -> f32 {
        self.cursor.y
    }

    /// Space left on the current page above the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.m.page_height - self.m.margin - self.cursor.y
    }

    /// Move the cursor down. The caller has already verified fit or asked
    /// for a break; no check happens here.
    pub fn advance(&mut self, dy: f32) {
        self.cursor.y += dy;
    }

    /// Append a fresh page and reset the cursor to its top margin.
    pub fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor.page += 1;
        self.cursor.y = self.m.margin;
        log::debug!("page break -> page {}", self.cursor.page + 1);
    }

    /// Wrap `text` and place it at the cursor under the orphan policy,
    /// splitting across pages as needed. See [`Layout`] for the output.
    pub fn place_paragraph(&mut self, text: &str, style: TextStyle, x: f32, width: f32) {
        place_paragraph(self, text, style, x, width);
    }

    /// Finish without a footer pass and hand the pages over.
    pub fn into_layout(self) -> Layout {
        Layout { pages: self.pages }
    }

    pub(crate) fn push(&mut self, fragment: Fragment) {
        self.pages[self.cursor.page].fragments.push(fragment);
    }

    /// Place a fragment on page 1 regardless of the cursor (logo, title).
    fn push_first_page(&mut self, fragment: Fragment) {
        self.pages[0].fragments.push(fragment);
    }
}

/// Lay the ordered block list onto pages and stamp the footers. Fatal
/// conditions are detected before the first page is touched, so a failure
/// never leaves a partial layout behind.
pub fn paginate(doc: &Document, m: &Metrics) -> Result<Layout, Error> {
    let metadata = doc.metadata.as_ref().ok_or_else(|| {
        Error::MissingSettings("no company settings record; footers cannot be rendered".into())
    })?;

    let mut sheet = Sheet::new(m);

    if let Some(logo) = &doc.logo {
        if logo.pixel_width == 0 || logo.pixel_height == 0 || logo.data.is_empty() {
            log::warn!(
                "unusable logo image ({}x{} px, {} bytes) - continuing without a logo",
                logo.pixel_width,
                logo.pixel_height,
                logo.data.len(),
            );
        } else {
            let h = m.logo_height;
            let w = h * logo.pixel_width as f32 / logo.pixel_height as f32;
            sheet.push_first_page(Fragment::Image {
                x: m.margin,
                y: m.margin,
                w,
                h,
            });
            sheet.advance(h + m.paragraph_spacing);
        }
    }

    let mut title_placed = false;
    for block in &doc.blocks {
        match block {
            Block::Title(text) => {
                if title_placed {
                    log::warn!("duplicate title block skipped: {text:?}");
                    continue;
                }
                title_placed = true;
                let tw = fonts::text_width(text, TextStyle::Title, m);
                sheet.push_first_page(Fragment::Text {
                    x: m.page_width - m.margin - tw,
                    y: m.margin,
                    style: TextStyle::Title,
                    text: text.clone(),
                });
                // Keep following content clear of the masthead.
                if sheet.cursor.page == 0 {
                    let clear = m.margin + m.line_height(TextStyle::Title) + m.paragraph_spacing;
                    if sheet.cursor.y < clear {
                        sheet.cursor.y = clear;
                    }
                }
            }
            Block::PairedBox { left, right } => boxes::render(&mut sheet, left, right),
            Block::Section { header, body } => section::render(&mut sheet, header, body),
            Block::Signature { preamble, parties } => {
                signature::render(&mut sheet, preamble, parties)
            }
        }
    }

    let mut pages = sheet.pages;
    footer::stamp(&mut pages, metadata, m);

    log::debug!("paginated {} blocks onto {} pages", doc.blocks.len(), pages.len());
    Ok(Layout { pages })
}
