mod common;

use sitedoc_pdf::{Document, Error, Logo, LogoFormat, generate};

fn full_document() -> Document {
    let mut doc = common::document(vec![
        sitedoc_pdf::Block::Title("Subcontract Agreement".to_string()),
        sitedoc_pdf::Block::PairedBox {
            left: common::panel("Client", &[("Name", "Acme Ltd"), ("Contact", "J. Smith")]),
            right: common::panel("Contractor", &[("Name", "Groundworks Ltd"), ("Contact", "")]),
        },
        common::section("Scope of Works", &common::body_of_lines(30)),
        common::section("Programme", &common::body_of_lines(50)),
        common::signature(
            "Signed as agreement to the terms above",
            &["For the Client", "For the Contractor"],
        ),
    ]);
    doc.logo = None;
    doc
}

#[test]
fn output_is_a_pdf() {
    let _ = env_logger::try_init();
    let bytes = generate(&full_document()).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 500);
}

#[test]
fn generation_is_deterministic() {
    let _ = env_logger::try_init();
    let doc = full_document();
    let first = generate(&doc).unwrap();
    let second = generate(&doc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_settings_fail_before_layout() {
    let _ = env_logger::try_init();
    let mut doc = full_document();
    doc.metadata = None;
    match generate(&doc) {
        Err(Error::MissingSettings(_)) => {}
        other => panic!("expected MissingSettings, got {other:?}"),
    }
}

#[test]
fn undecodable_logo_is_not_fatal() {
    let _ = env_logger::try_init();
    let mut doc = full_document();
    doc.logo = Some(Logo {
        data: vec![0u8; 64], // not a PNG
        format: LogoFormat::Png,
        pixel_width: 100,
        pixel_height: 50,
    });
    let bytes = generate(&doc).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[cfg(feature = "serde")]
#[test]
fn block_list_round_trips_through_json() {
    let _ = env_logger::try_init();
    let doc = full_document();
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(generate(&doc).unwrap(), generate(&back).unwrap());
}
