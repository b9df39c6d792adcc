//! Turn a finished [`Layout`] into PDF bytes. Layout coordinates are mm from
//! the top-left corner; PDF space is points from the bottom-left, so every
//! coordinate flips and scales here and nowhere else.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::to_winansi_bytes;
use crate::layout::{Fragment, Layout};
use crate::metrics::{MM_TO_PT, Metrics, TextStyle};
use crate::model::{Logo, LogoFormat};

const RULE_WIDTH_PT: f32 = 0.6;
const BORDER_WIDTH_PT: f32 = 0.4;
/// Approximate ascender for the base-14 Helvetica family.
const ASCENDER_RATIO: f32 = 0.75;

fn font_name(style: TextStyle, m: &Metrics) -> Name<'static> {
    if m.is_bold(style) {
        Name(b"F2")
    } else {
        Name(b"F1")
    }
}

/// Embed the logo as an image XObject. Returns `None` (and logs) when the
/// bytes cannot be decoded; the document then renders without a logo.
fn embed_logo(
    pdf: &mut Pdf,
    logo: &Logo,
    alloc: &mut impl FnMut() -> Ref,
) -> Option<Ref> {
    let xobj_ref = alloc();
    match logo.format {
        LogoFormat::Jpeg => {
            let mut xobj = pdf.image_xobject(xobj_ref, &logo.data);
            xobj.filter(Filter::DctDecode);
            xobj.width(logo.pixel_width as i32);
            xobj.height(logo.pixel_height as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }
        LogoFormat::Png => {
            let cursor = std::io::Cursor::new(&logo.data);
            let reader = image::ImageReader::with_format(
                std::io::BufReader::new(cursor),
                image::ImageFormat::Png,
            );
            let decoded = match reader.decode() {
                Ok(d) => d,
                Err(e) => {
                    log::warn!("logo PNG could not be decoded: {e} - continuing without a logo");
                    return None;
                }
            };
            let rgba: image::RgbaImage = decoded.to_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

            let rgb_data: Vec<u8> = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
            let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

            let smask_ref = if has_alpha {
                let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
                let mask_ref = alloc();
                let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(w as i32);
                mask.height(h as i32);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                Some(mask_ref)
            } else {
                None
            };

            let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
            xobj.filter(Filter::FlateDecode);
            xobj.width(w as i32);
            xobj.height(h as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
            if let Some(mask_ref) = smask_ref {
                xobj.s_mask(mask_ref);
            }
        }
    }
    Some(xobj_ref)
}

pub(crate) fn render(layout: &Layout, logo: Option<&Logo>, m: &Metrics) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let regular_ref = alloc();
    pdf.type1_font(regular_ref)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    let bold_ref = alloc();
    pdf.type1_font(bold_ref)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let logo_ref = logo.and_then(|l| embed_logo(&mut pdf, l, &mut alloc));

    let t_resources = t0.elapsed();

    let page_h = m.page_height;
    let mut contents = Vec::with_capacity(layout.pages.len());

    for page in &layout.pages {
        let mut content = Content::new();
        for fragment in &page.fragments {
            match fragment {
                Fragment::Text { x, y, style, text } => {
                    let size = m.font_size(*style);
                    let baseline = (page_h - y) * MM_TO_PT - size * ASCENDER_RATIO;
                    content
                        .begin_text()
                        .set_font(font_name(*style, m), size)
                        .next_line(x * MM_TO_PT, baseline)
                        .show(Str(&to_winansi_bytes(text)))
                        .end_text();
                }
                Fragment::Rect {
                    x,
                    y,
                    w,
                    h,
                    fill,
                    stroke,
                } => {
                    content.save_state();
                    if let Some([r, g, b]) = fill {
                        content.set_fill_rgb(
                            *r as f32 / 255.0,
                            *g as f32 / 255.0,
                            *b as f32 / 255.0,
                        );
                    }
                    content.rect(
                        x * MM_TO_PT,
                        (page_h - y - h) * MM_TO_PT,
                        w * MM_TO_PT,
                        h * MM_TO_PT,
                    );
                    match (fill.is_some(), *stroke) {
                        (true, true) => {
                            content.set_line_width(BORDER_WIDTH_PT);
                            content.fill_nonzero_and_stroke();
                        }
                        (true, false) => {
                            content.fill_nonzero();
                        }
                        (false, _) => {
                            content.set_line_width(BORDER_WIDTH_PT);
                            content.stroke();
                        }
                    }
                    content.restore_state();
                }
                Fragment::Rule { x, y, w } => {
                    let y_pt = (page_h - y) * MM_TO_PT;
                    content.save_state();
                    content.set_line_width(RULE_WIDTH_PT);
                    content.move_to(x * MM_TO_PT, y_pt);
                    content.line_to((x + w) * MM_TO_PT, y_pt);
                    content.stroke();
                    content.restore_state();
                }
                Fragment::Image { x, y, w, h } => {
                    if logo_ref.is_some() {
                        content.save_state();
                        content.transform([
                            w * MM_TO_PT,
                            0.0,
                            0.0,
                            h * MM_TO_PT,
                            x * MM_TO_PT,
                            (page_h - y - h) * MM_TO_PT,
                        ]);
                        content.x_object(Name(b"Im1"));
                        content.restore_state();
                    }
                }
            }
        }
        contents.push(content.finish());
    }

    let t_draw = t0.elapsed();

    let n = contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, raw) in contents.iter().enumerate() {
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let media_box = Rect::new(0.0, 0.0, m.page_width * MM_TO_PT, m.page_height * MM_TO_PT);
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), regular_ref);
            fonts.pair(Name(b"F2"), bold_ref);
        }
        if let Some(logo_ref) = logo_ref {
            resources.x_objects().pair(Name(b"Im1"), logo_ref);
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "PDF assembly: resources={:.1}ms, draw={:.1}ms, finish={:.1}ms ({} pages, {} bytes)",
        t_resources.as_secs_f64() * 1000.0,
        (t_draw - t_resources).as_secs_f64() * 1000.0,
        (t0.elapsed() - t_draw).as_secs_f64() * 1000.0,
        n,
        bytes.len(),
    );

    Ok(bytes)
}
