//! Tests against the linked libharu
//!
//! Tests cover:
//! - Document lifecycle (new, free_doc, new_doc, drop)
//! - Saving to file and to memory
//! - Page geometry defaults and sizing
//! - Graphics mode tracking and state-machine rejections
//! - Line style, dash and graphics-state stack
//! - Fonts and the text protocol
//! - PNG/JPEG loading and drawing
//! - Document attributes (metadata, compression, layout, mode)

use chrono::{FixedOffset, TimeZone};
use haru::{
    CompressionMode, DateInfo, GraphicsMode, HpdfError, LineCap, LineJoin, PageDirection,
    PageLayout, PageMode, PageSize, PdfDocument, Status, TextAlignment, TextInfo,
    TextRenderingMode,
};
use serial_test::serial;
use tempfile::tempdir;

const A4_WIDTH: f32 = 595.276;
const A4_HEIGHT: f32 = 841.89;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

/// A solid-colour RGB PNG.
fn png_fixture(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let pixels: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
        writer.write_image_data(&pixels).unwrap();
    }
    out
}

/// A solid-colour baseline JPEG.
fn jpeg_fixture(width: u16, height: u16, rgb: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::new();
    let pixels: Vec<u8> = (0..width as u32 * height as u32)
        .flat_map(|_| rgb)
        .collect();
    let encoder = jpeg_encoder::Encoder::new(&mut out, 90);
    encoder
        .encode(&pixels, width, height, jpeg_encoder::ColorType::Rgb)
        .unwrap();
    out
}

// ============================================================================
// Document lifecycle
// ============================================================================

#[test]
#[serial]
fn test_new_document_has_doc() {
    init_logging();
    let doc = PdfDocument::new().unwrap();
    assert!(doc.has_doc());
    assert!(doc.last_error().is_none());
}

#[test]
#[serial]
fn test_free_doc_then_new_doc() {
    let mut doc = PdfDocument::new().unwrap();
    doc.free_doc();
    assert!(!doc.has_doc());
    assert!(doc.last_error().is_none());

    doc.new_doc().unwrap();
    assert!(doc.has_doc());

    doc.free_doc_all();
    assert!(!doc.has_doc());
}

#[test]
#[serial]
fn test_drop_with_pages() {
    let doc = PdfDocument::new().unwrap();
    for _ in 0..3 {
        let page = doc.add_page().unwrap();
        page.rectangle(10.0, 10.0, 50.0, 50.0).unwrap();
        page.fill().unwrap();
    }
    drop(doc);
}

#[test]
#[serial]
fn test_into_raw_from_raw() {
    let doc = PdfDocument::new().unwrap();
    doc.set_creator("round-trip").unwrap();
    let handle = doc.into_raw();

    let doc = unsafe { PdfDocument::from_raw(handle) };
    assert!(doc.has_doc());
    assert_eq!(doc.info_attr(TextInfo::Creator).as_deref(), Some("round-trip"));
}

#[test]
#[serial]
fn test_borrow_raw_does_not_free() {
    let doc = PdfDocument::new().unwrap();
    {
        let handle = std::ptr::NonNull::new(doc.as_raw()).unwrap();
        let view = unsafe { PdfDocument::borrow_raw(handle) };
        assert!(view.has_doc());
    }
    assert!(doc.has_doc());
}

// ============================================================================
// Saving
// ============================================================================

#[test]
#[serial]
fn test_save_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.set_rgb_fill(1.0, 0.0, 0.0).unwrap();
    page.circle(100.0, 100.0, 40.0).unwrap();
    page.fill().unwrap();

    doc.save_to_file(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
#[serial]
fn test_save_to_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let doc = PdfDocument::new().unwrap();
    doc.add_page().unwrap();

    match doc.save_to_file(&path) {
        Err(HpdfError::Save { path: reported, status }) => {
            assert!(reported.ends_with("out.pdf"));
            assert!(
                status == Status::FILE_OPEN_ERROR || status == Status::FILE_IO_ERROR,
                "unexpected status {status}"
            );
        }
        other => panic!("Expected Save error, got {:?}", other),
    }
    // The failure does not linger on the document.
    assert!(doc.last_error().is_none());
    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_save_to_bytes_matches_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("same.pdf");

    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.move_to(0.0, 0.0).unwrap();
    page.line_to(200.0, 200.0).unwrap();
    page.stroke().unwrap();

    let bytes = doc.save_to_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    doc.save_to_file(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
#[serial]
fn test_save_to_bytes_twice() {
    let doc = PdfDocument::new().unwrap();
    doc.add_page().unwrap();
    let first = doc.save_to_bytes().unwrap();
    let second = doc.save_to_bytes().unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Page geometry
// ============================================================================

#[test]
#[serial]
fn test_page_defaults_to_a4() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    assert!(approx(page.width(), A4_WIDTH), "width {}", page.width());
    assert!(approx(page.height(), A4_HEIGHT), "height {}", page.height());
    assert_eq!(page.line_width(), 1.0);
}

#[test]
#[serial]
fn test_set_width_exact() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.set_width(300.0).unwrap();
    assert_eq!(page.width(), 300.0);
    page.set_height(400.0).unwrap();
    assert_eq!(page.height(), 400.0);
}

#[test]
#[serial]
fn test_set_width_out_of_range() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    let err = page.set_width(1.0).unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_INVALID_SIZE));
    assert!(approx(page.width(), A4_WIDTH));
}

#[test]
#[serial]
fn test_letter_landscape() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.set_size(PageSize::Letter, PageDirection::Portrait).unwrap();
    assert_eq!((page.width(), page.height()), (612.0, 792.0));
    page.set_size(PageSize::Letter, PageDirection::Landscape).unwrap();
    assert_eq!((page.width(), page.height()), (792.0, 612.0));
}

#[test]
#[serial]
fn test_every_page_size_applies() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    for size in [
        PageSize::Letter,
        PageSize::Legal,
        PageSize::A3,
        PageSize::A4,
        PageSize::A5,
        PageSize::B4,
        PageSize::B5,
        PageSize::Executive,
        PageSize::Us4x6,
        PageSize::Us4x8,
        PageSize::Us5x7,
        PageSize::Comm10,
    ] {
        page.set_size(size, PageDirection::Portrait).unwrap();
        assert!(page.width() <= page.height(), "{size:?} is portrait");
    }
}

#[test]
#[serial]
fn test_current_and_inserted_page() {
    let doc = PdfDocument::new().unwrap();
    assert!(doc.current_page().is_none());

    let first = doc.add_page().unwrap();
    assert_eq!(doc.current_page().map(|p| p.as_raw()), Some(first.as_raw()));

    let inserted = doc.insert_page(&first).unwrap();
    assert_ne!(inserted.as_raw(), first.as_raw());
    assert_eq!(inserted.parent_raw(), doc.as_raw());
    assert!(approx(inserted.width(), A4_WIDTH));
}

// ============================================================================
// Graphics mode
// ============================================================================

#[test]
#[serial]
fn test_graphics_mode_tracks_brackets() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    assert_eq!(page.graphics_mode(), GraphicsMode::PageDescription);

    page.begin_text().unwrap();
    assert_eq!(page.graphics_mode(), GraphicsMode::TextObject);
    page.end_text().unwrap();
    assert_eq!(page.graphics_mode(), GraphicsMode::PageDescription);

    page.move_to(10.0, 10.0).unwrap();
    assert_eq!(page.graphics_mode(), GraphicsMode::PathObject);
    let pos = page.current_pos();
    assert_eq!((pos.x, pos.y), (10.0, 10.0));
    page.end_path().unwrap();
    assert_eq!(page.graphics_mode(), GraphicsMode::PageDescription);
}

#[test]
#[serial]
fn test_show_text_outside_text_object() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    let err = page.show_text("not in a text object").unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_INVALID_GMODE));

    // The document stays usable.
    assert!(doc.last_error().is_none());
    page.begin_text().unwrap();
    page.end_text().unwrap();
    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_end_text_without_begin() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    assert!(page.end_text().is_err());
}

#[test]
#[serial]
fn test_begin_text_inside_path() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.move_to(0.0, 0.0).unwrap();
    let err = page.begin_text().unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_INVALID_GMODE));
    page.stroke().unwrap();
}

// ============================================================================
// Line style and graphics state
// ============================================================================

#[test]
#[serial]
fn test_line_style_round_trip() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    assert_eq!(page.line_cap(), LineCap::ButtEnd);
    assert_eq!(page.line_join(), LineJoin::MiterJoin);

    page.set_line_width(2.5).unwrap();
    page.set_line_cap(LineCap::RoundEnd).unwrap();
    page.set_line_join(LineJoin::BevelJoin).unwrap();
    page.set_miter_limit(5.0).unwrap();

    assert_eq!(page.line_width(), 2.5);
    assert_eq!(page.line_cap(), LineCap::RoundEnd);
    assert_eq!(page.line_join(), LineJoin::BevelJoin);
    assert_eq!(page.miter_limit(), 5.0);
}

#[test]
#[serial]
fn test_gsave_grestore() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.g_save().unwrap();
    page.set_line_width(8.0).unwrap();
    page.concat(1.0, 0.0, 0.0, 1.0, 20.0, 20.0).unwrap();
    page.g_restore().unwrap();
    assert_eq!(page.line_width(), 1.0);

    let err = page.g_restore().unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_CANNOT_RESTORE_GSTATE));
}

#[test]
#[serial]
fn test_dash_pattern() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.set_dash(&[3.0, 2.0], 0.0).unwrap();
    page.set_dash(&[], 0.0).unwrap();
    assert!(page.set_dash(&[3.0, 2.0, 1.0], 0.0).is_err());
}

#[test]
#[serial]
fn test_paths_and_painting() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();

    page.set_gray_stroke(0.5).unwrap();
    page.set_gray_fill(0.2).unwrap();
    page.set_cmyk_fill(0.0, 1.0, 1.0, 0.0).unwrap();
    page.set_cmyk_stroke(1.0, 0.0, 0.0, 0.0).unwrap();
    page.set_rgb_stroke(0.0, 0.0, 1.0).unwrap();

    page.move_to(50.0, 50.0).unwrap();
    page.curve_to(60.0, 80.0, 90.0, 80.0, 100.0, 50.0).unwrap();
    page.curve_to2(120.0, 30.0, 140.0, 50.0).unwrap();
    page.curve_to3(150.0, 70.0, 160.0, 50.0).unwrap();
    page.close_path_stroke().unwrap();

    page.ellipse(200.0, 200.0, 40.0, 20.0).unwrap();
    page.eofill().unwrap();
    page.arc(300.0, 300.0, 30.0, 0.0, 270.0).unwrap();
    page.stroke().unwrap();

    page.rectangle(10.0, 10.0, 100.0, 100.0).unwrap();
    page.fill_stroke().unwrap();
    page.rectangle(10.0, 10.0, 100.0, 100.0).unwrap();
    page.eofill_stroke().unwrap();
    page.move_to(0.0, 0.0).unwrap();
    page.line_to(10.0, 0.0).unwrap();
    page.line_to(10.0, 10.0).unwrap();
    page.close_path_fill_stroke().unwrap();
    page.move_to(0.0, 0.0).unwrap();
    page.line_to(10.0, 0.0).unwrap();
    page.close_path_eofill_stroke().unwrap();

    page.g_save().unwrap();
    page.rectangle(0.0, 0.0, 200.0, 200.0).unwrap();
    page.clip().unwrap();
    page.end_path().unwrap();
    page.rectangle(0.0, 0.0, 100.0, 100.0).unwrap();
    page.eoclip().unwrap();
    page.end_path().unwrap();
    page.g_restore().unwrap();

    assert!(doc.save_to_bytes().unwrap().starts_with(b"%PDF-"));
}

// ============================================================================
// Fonts and text
// ============================================================================

#[test]
#[serial]
fn test_base14_font() {
    let doc = PdfDocument::new().unwrap();
    let font = doc.font("Helvetica", None).unwrap();
    assert_eq!(font.name().as_deref(), Some("Helvetica"));

    let font = doc.font("Times-Roman", Some("WinAnsiEncoding")).unwrap();
    assert_eq!(font.name().as_deref(), Some("Times-Roman"));
}

#[test]
#[serial]
fn test_unknown_font() {
    let doc = PdfDocument::new().unwrap();
    match doc.font("No-Such-Font", None) {
        Err(HpdfError::FontNotFound { name }) => assert_eq!(name, "No-Such-Font"),
        other => panic!("Expected FontNotFound, got {:?}", other.map(|f| f.name())),
    }
    assert!(doc.last_error().is_none());
}

#[test]
#[serial]
fn test_text_protocol() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    let font = doc.font("Helvetica", None).unwrap();

    page.set_font_and_size(&font, 12.0).unwrap();
    assert_eq!(page.current_font_size(), 12.0);
    assert!(page.text_width("Hello").unwrap() > 0.0);

    page.begin_text().unwrap();
    page.set_char_space(0.5).unwrap();
    page.set_word_space(1.0).unwrap();
    page.set_horizontal_scaling(110.0).unwrap();
    page.set_text_leading(14.0).unwrap();
    page.set_text_rise(0.0).unwrap();
    page.set_text_rendering_mode(TextRenderingMode::FillThenStroke).unwrap();
    page.move_text_pos(72.0, 720.0).unwrap();
    page.show_text("Hello").unwrap();
    page.show_text_next_line("second line").unwrap();
    page.show_text_next_line_ex(2.0, 0.5, "third line").unwrap();
    page.move_text_pos2(0.0, -20.0).unwrap();
    page.move_to_next_line().unwrap();
    page.text_out(72.0, 600.0, "placed").unwrap();
    page.set_text_matrix(1.0, 0.0, 0.0, 1.0, 72.0, 500.0).unwrap();
    let pos = page.current_text_pos();
    assert_eq!((pos.x, pos.y), (72.0, 500.0));
    page.text_rect(72.0, 480.0, 400.0, 380.0, "Wrapped text", TextAlignment::Center)
        .unwrap();
    page.end_text().unwrap();

    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_text_width_without_font() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();

    let err = page.text_width("x").unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_FONT_NOT_FOUND));
    assert!(doc.last_error().is_none());

    // The document remains usable.
    assert!(doc.add_page().is_ok());
    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_text_rect_overflow() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    let font = doc.font("Helvetica", None).unwrap();
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);

    page.begin_text().unwrap();
    page.set_font_and_size(&font, 12.0).unwrap();
    page.set_text_leading(14.0).unwrap();
    let placed = page
        .text_rect(72.0, 700.0, 272.0, 640.0, &text, TextAlignment::Left)
        .unwrap();
    page.end_text().unwrap();

    assert!(placed > 0, "nothing placed");
    assert!((placed as usize) < text.len(), "placed {placed} of {}", text.len());
    assert!(doc.last_error().is_none());
    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_show_text_without_font() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.begin_text().unwrap();
    let err = page.show_text("no font").unwrap_err();
    assert_eq!(err.status(), Some(Status::PAGE_FONT_NOT_FOUND));
    page.end_text().unwrap();
}

#[test]
#[serial]
fn test_text_with_interior_nul() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.begin_text().unwrap();
    assert!(matches!(
        page.show_text("a\0b"),
        Err(HpdfError::InvalidString(_))
    ));
    page.end_text().unwrap();
}

// ============================================================================
// Images
// ============================================================================

#[test]
#[serial]
fn test_load_png_from_mem() {
    let doc = PdfDocument::new().unwrap();
    let image = doc
        .load_png_image_from_mem(&png_fixture(50, 40, [255, 0, 255]))
        .unwrap();
    assert_eq!((image.width(), image.height()), (50, 40));

    let page = doc.add_page().unwrap();
    page.draw_image(&image, 10.0, 10.0, 50.0, 40.0).unwrap();
    page.draw_image(&image, 100.0, 10.0, 100.0, 80.0).unwrap();
}

#[test]
#[serial]
fn test_draw_png_and_jpeg_from_mem() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.draw_png_image(&png_fixture(50, 50, [255, 0, 255]), 10.0, 10.0, 50.0, 50.0)
        .unwrap();
    page.draw_jpeg_image(&jpeg_fixture(32, 16, [0, 128, 255]), 80.0, 10.0, 64.0, 32.0)
        .unwrap();
    assert!(doc.save_to_bytes().unwrap().starts_with(b"%PDF-"));
}

#[test]
#[serial]
fn test_draw_images_from_file() {
    let dir = tempdir().unwrap();
    let png_path = dir.path().join("fixture.png");
    let jpeg_path = dir.path().join("fixture.jpg");
    std::fs::write(&png_path, png_fixture(50, 50, [255, 0, 255])).unwrap();
    std::fs::write(&jpeg_path, jpeg_fixture(20, 20, [10, 200, 10])).unwrap();

    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    page.draw_png_image_from_file(&png_path, 10.0, 10.0, 50.0, 50.0)
        .unwrap();
    page.draw_jpeg_image_from_file(&jpeg_path, 70.0, 10.0, 20.0, 20.0)
        .unwrap();

    let image = doc.load_jpeg_image_from_file(&jpeg_path).unwrap();
    assert_eq!((image.width(), image.height()), (20, 20));
}

#[test]
#[serial]
fn test_missing_png_file() {
    let dir = tempdir().unwrap();
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();

    let result = page.draw_png_image_from_file(dir.path().join("absent.png"), 0.0, 0.0, 10.0, 10.0);
    match result {
        Err(HpdfError::ImageLoad { format, source_kind, .. }) => {
            assert_eq!(format, "PNG");
            assert_eq!(source_kind, "file");
        }
        other => panic!("Expected ImageLoad, got {:?}", other),
    }
    assert!(doc.last_error().is_none());
    assert_eq!(page.graphics_mode(), GraphicsMode::PageDescription);
    assert!(doc.save_to_bytes().is_ok());
}

#[test]
#[serial]
fn test_garbage_image_data() {
    let doc = PdfDocument::new().unwrap();
    let page = doc.add_page().unwrap();
    let garbage = b"definitely not an image";
    assert!(matches!(
        page.draw_png_image(garbage, 0.0, 0.0, 10.0, 10.0),
        Err(HpdfError::ImageLoad { .. })
    ));
    assert!(matches!(
        page.draw_jpeg_image(garbage, 0.0, 0.0, 10.0, 10.0),
        Err(HpdfError::ImageLoad { .. })
    ));
}

// ============================================================================
// Document attributes
// ============================================================================

#[test]
#[serial]
fn test_metadata_round_trip() {
    let doc = PdfDocument::new().unwrap();
    doc.set_creator("haru tests").unwrap();
    doc.set_info_attr(TextInfo::Title, "Quarterly Report").unwrap();
    doc.set_info_attr(TextInfo::Author, "Reporting").unwrap();
    doc.set_info_attr(TextInfo::Keywords, "pdf, tests").unwrap();

    assert_eq!(doc.info_attr(TextInfo::Creator).as_deref(), Some("haru tests"));
    assert_eq!(doc.info_attr(TextInfo::Title).as_deref(), Some("Quarterly Report"));
    assert_eq!(doc.info_attr(TextInfo::Author).as_deref(), Some("Reporting"));
    assert_eq!(doc.info_attr(TextInfo::Keywords).as_deref(), Some("pdf, tests"));

    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let date = tz.with_ymd_and_hms(2012, 3, 14, 15, 9, 26).unwrap();
    doc.set_info_date(DateInfo::CreationDate, date).unwrap();
    doc.set_info_date(DateInfo::ModDate, date).unwrap();

    doc.add_page().unwrap();
    let bytes = doc.save_to_bytes().unwrap();
    let haystack = String::from_utf8_lossy(&bytes);
    assert!(haystack.contains("Quarterly Report"));
}

#[test]
#[serial]
fn test_compression_mode() {
    let doc = PdfDocument::new().unwrap();
    doc.set_compression_mode(CompressionMode::ALL).unwrap();
    doc.set_compression_mode(CompressionMode::TEXT | CompressionMode::IMAGE)
        .unwrap();
    doc.set_compression_mode(CompressionMode::NONE).unwrap();

    let err = doc
        .set_compression_mode(CompressionMode(0x100))
        .unwrap_err();
    assert_eq!(err.status(), Some(Status::INVALID_COMPRESSION_MODE));
}

#[test]
#[serial]
fn test_compressed_output_is_smaller() {
    fn render(mode: CompressionMode) -> usize {
        let doc = PdfDocument::new().unwrap();
        doc.set_compression_mode(mode).unwrap();
        let page = doc.add_page().unwrap();
        for i in 0..200 {
            let offset = i as f32;
            page.move_to(offset, 0.0).unwrap();
            page.line_to(offset, 800.0).unwrap();
            page.stroke().unwrap();
        }
        doc.save_to_bytes().unwrap().len()
    }
    assert!(render(CompressionMode::ALL) < render(CompressionMode::NONE));
}

#[test]
#[serial]
fn test_page_layout_and_mode() {
    let doc = PdfDocument::new().unwrap();
    doc.set_page_layout(PageLayout::TwoColumnLeft).unwrap();
    assert_eq!(doc.page_layout(), Some(PageLayout::TwoColumnLeft));
    doc.set_page_mode(PageMode::UseThumbs).unwrap();
    assert_eq!(doc.page_mode(), Some(PageMode::UseThumbs));
}

#[test]
#[serial]
fn test_version_string() {
    let version = haru::version();
    let mut parts = version.split('.').map(|part| part.parse::<u32>().unwrap_or(0));
    let major = parts.next().unwrap_or(0);
    let minor = parts.next().unwrap_or(0);
    assert!((major, minor) >= (2, 4), "libharu {version} is older than 2.4");
}
