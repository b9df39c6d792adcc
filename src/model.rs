//! Input model: the ordered block list supplied by the caller, plus the
//! company metadata and optional logo fetched before generation starts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Company settings folded into every page footer. Only the fields that are
/// present are rendered; an entirely absent settings record is fatal
/// (see [`crate::Error::MissingSettings`]).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metadata {
    pub company_number: Option<String>,
    pub vat_number: Option<String>,
    pub document_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogoFormat {
    Jpeg,
    Png,
}

/// A pre-fetched logo image. Fetching (and any retry/failure handling around
/// it) is the caller's concern; undecodable bytes degrade to a logo-less
/// document rather than aborting generation.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Logo {
    pub data: Vec<u8>,
    pub format: LogoFormat,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// One label/value line inside a boxed panel. An empty value renders as
/// "N/A" rather than leaving a blank cell.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxRow {
    pub label: String,
    pub value: String,
}

/// One side of a paired information box: a titled strip over label/value
/// rows. Height is derived from the wrapped content, so the two sides of a
/// pair may differ.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxPanel {
    pub title: String,
    pub rows: Vec<BoxRow>,
}

/// A signing party: "Signed for and on behalf of the Contractor", etc.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Party {
    pub label: String,
}

/// One structural unit of document content. Content and ordering are
/// entirely the caller's responsibility; the engine imposes no reordering.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Block {
    /// Fixed top-right text, placed once, only on the first page.
    Title(String),
    /// Two boxed panels rendered side by side from the same vertical start.
    PairedBox { left: BoxPanel, right: BoxPanel },
    /// A fixed-height header strip over free-form wrapped body text.
    Section { header: String, body: String },
    /// Always begins a fresh page: a wrapped preamble plus a signature
    /// rule/date rule pair per party.
    Signature { preamble: String, parties: Vec<Party> },
}

/// Everything one generation call consumes. The engine is a pure function
/// from this value to PDF bytes; no state survives between calls.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub blocks: Vec<Block>,
    pub metadata: Option<Metadata>,
    pub logo: Option<Logo>,
}
