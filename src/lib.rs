//! Paginated PDF layout engine for construction back-office documents:
//! contracts, risk method statements, construction-phase plans and sign-off
//! sheets all share the same block model and pagination rules.
//!
//! Generation is a pure function from an ordered block list (plus company
//! metadata and an optional pre-fetched logo) to PDF bytes. Layout runs in
//! two explicit phases: blocks are placed onto lazily created pages first,
//! then footers and page numbers are stamped once the page count is final.

mod error;
mod fonts;
mod layout;
mod metrics;
mod model;
mod pdf;

pub use error::Error;
pub use layout::{Cursor, Fragment, Layout, Page, Sheet, paginate};
pub use metrics::{Metrics, TextStyle};
pub use model::{Block, BoxPanel, BoxRow, Document, Logo, LogoFormat, Metadata, Party};

use std::path::Path;
use std::time::Instant;

/// Generate the document and return the PDF bytes.
pub fn generate(doc: &Document) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();
    let metrics = Metrics::default();

    let layout = paginate(doc, &metrics)?;
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&layout, doc.logo.as_ref(), &metrics)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, render={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        layout.pages.len(),
        bytes.len(),
    );

    Ok(bytes)
}

/// Generate the document and write the PDF to `output`.
pub fn generate_to_file(doc: &Document, output: &Path) -> Result<(), Error> {
    let bytes = generate(doc)?;
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    Ok(())
}
