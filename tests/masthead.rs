mod common;

use sitedoc_pdf::{Block, Document, Fragment, Logo, LogoFormat, Metrics, TextStyle, paginate};

fn title(text: &str) -> Block {
    Block::Title(text.to_string())
}

#[test]
fn title_sits_top_right_of_page_one() {
    let _ = env_logger::try_init();
    let doc = common::document(vec![
        title("Construction Phase Plan"),
        common::section("Scope", "x"),
    ]);
    let m = Metrics::default();
    let layout = paginate(&doc, &m).unwrap();

    let titles = common::texts_of_style(&layout.pages[0], TextStyle::Title);
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].0, m.margin);

    // Right-aligned: the fragment starts left of the right margin.
    let x = layout.pages[0]
        .fragments
        .iter()
        .find_map(|f| match f {
            Fragment::Text { x, style, .. } if *style == TextStyle::Title => Some(*x),
            _ => None,
        })
        .unwrap();
    assert!(x < m.page_width - m.margin);
    assert!(x > m.page_width / 2.0);

    // Following content clears the masthead line.
    let strips = common::header_strips(&layout.pages[0]);
    assert_eq!(strips[0].1, m.margin + m.line_height(TextStyle::Title) + m.paragraph_spacing);
}

#[test]
fn duplicate_titles_are_skipped() {
    let _ = env_logger::try_init();
    let doc = common::document(vec![title("First"), title("Second")]);
    let layout = paginate(&doc, &Metrics::default()).unwrap();

    let titles = common::texts_of_style(&layout.pages[0], TextStyle::Title);
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].1, "First");
}

#[test]
fn logo_is_placed_once_and_content_starts_below() {
    let _ = env_logger::try_init();
    let doc = Document {
        blocks: vec![common::section("Scope", "x")],
        metadata: Some(common::metadata()),
        logo: Some(Logo {
            data: vec![0u8; 16],
            format: LogoFormat::Png,
            pixel_width: 200,
            pixel_height: 100,
        }),
    };
    let m = Metrics::default();
    let layout = paginate(&doc, &m).unwrap();

    let images: Vec<(f32, f32, f32, f32)> = layout.pages[0]
        .fragments
        .iter()
        .filter_map(|f| match f {
            Fragment::Image { x, y, w, h } => Some((*x, *y, *w, *h)),
            _ => None,
        })
        .collect();
    assert_eq!(images.len(), 1);
    let (x, y, w, h) = images[0];
    assert_eq!((x, y), (m.margin, m.margin));
    assert_eq!(h, m.logo_height);
    // Width follows the 2:1 pixel aspect ratio.
    assert_eq!(w, m.logo_height * 2.0);

    let strips = common::header_strips(&layout.pages[0]);
    assert_eq!(strips[0].1, m.margin + m.logo_height + m.paragraph_spacing);
}

#[test]
fn unusable_logo_is_skipped() {
    let _ = env_logger::try_init();
    let doc = Document {
        blocks: vec![common::section("Scope", "x")],
        metadata: Some(common::metadata()),
        logo: Some(Logo {
            data: Vec::new(),
            format: LogoFormat::Png,
            pixel_width: 0,
            pixel_height: 0,
        }),
    };
    let layout = paginate(&doc, &Metrics::default()).unwrap();

    assert!(
        !layout.pages[0]
            .fragments
            .iter()
            .any(|f| matches!(f, Fragment::Image { .. }))
    );
}
