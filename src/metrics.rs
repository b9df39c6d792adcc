//! Geometry and typography constants. Layout space is millimetres with a
//! top-left origin and y growing downward; `pdf::render` owns the conversion
//! to PDF points.

/// Millimetres to PDF points.
pub(crate) const MM_TO_PT: f32 = 72.0 / 25.4;

/// The four text classes the engine sets. Each maps to a fixed font, size
/// and line height in [`Metrics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Title,
    Heading,
    Body,
    Footer,
}

/// Immutable page geometry and spacing. `Default` gives the production
/// values (A4 portrait, 15 mm margin); tests construct the same thing.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Height of the filled header strip above a section or panel body.
    pub header_height: f32,
    /// Gap between a header strip and the body beneath it.
    pub heading_gap: f32,
    /// Advance after the last line of a placed paragraph.
    pub paragraph_spacing: f32,
    /// Advance after a paired-box row, past the taller panel.
    pub row_gap: f32,
    /// Horizontal gap between the two panels of a paired box.
    pub gutter: f32,
    /// Vertical pitch between signature parties.
    pub party_height: f32,
    /// Never leave fewer than this many lines of a paragraph at the bottom
    /// of a page.
    pub min_orphan_lines: usize,
    /// Logo display height on page 1; width follows the pixel aspect ratio.
    pub logo_height: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            header_height: 8.0,
            heading_gap: 2.0,
            paragraph_spacing: 4.0,
            row_gap: 6.0,
            gutter: 10.0,
            party_height: 30.0,
            min_orphan_lines: 3,
            logo_height: 12.0,
        }
    }
}

impl Metrics {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Width of one panel in a paired box.
    pub fn column_width(&self) -> f32 {
        (self.content_width() - self.gutter) / 2.0
    }

    /// Line height in mm for a text class.
    pub fn line_height(&self, style: TextStyle) -> f32 {
        match style {
            TextStyle::Title => 7.0,
            TextStyle::Heading => 5.5,
            TextStyle::Body => 5.0,
            TextStyle::Footer => 4.0,
        }
    }

    /// Font size in points for a text class.
    pub fn font_size(&self, style: TextStyle) -> f32 {
        match style {
            TextStyle::Title => 16.0,
            TextStyle::Heading => 11.0,
            TextStyle::Body => 10.0,
            TextStyle::Footer => 8.0,
        }
    }

    pub fn is_bold(&self, style: TextStyle) -> bool {
        matches!(style, TextStyle::Title | TextStyle::Heading)
    }
}
