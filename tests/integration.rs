//! Integration tests for the folio composition pipeline.
//!
//! These tests exercise the full path from a document description to the
//! recorded draw ops. They verify:
//! - The flow controller opens, fills, and breaks pages correctly
//! - Header and footer reservation and pinning
//! - Linear container measurement, gravity, and fill-remaining
//! - Node lifecycle misuse surfaces as typed errors
//! - Indentation narrows and shifts content, and survives page breaks

use folio::{
    compose, Color, Document, DrawOp, FillBox, FixedImageProvider, FolioError, GreedyShaper,
    ImageBox, ImageProvider, LayoutNode, LinearBox, LinearChild, PageConfig, PageItem,
    PageRecord, RecordingSink, Size, SizeSpec, Space, TextAlign, TextBox, TextStyle,
    VerticalAlign, VerticalGravity,
};

// ─── Helpers ────────────────────────────────────────────────────

/// A page with no margins, so recorded coordinates equal body coordinates.
fn bare_page(width: u32, height: u32) -> PageConfig {
    PageConfig::new(width, height)
}

/// 10-unit text with unit line height: every char is 5 units wide and every
/// line is exactly 10 units tall.
fn plain_style() -> TextStyle {
    TextStyle {
        font_size: 10.0,
        line_height: 1.0,
        ..TextStyle::default()
    }
}

fn text(content: &str) -> TextBox {
    TextBox::new(content, plain_style())
}

/// A content item that measures to exactly `height` on any page.
fn block(height: u32) -> PageItem {
    PageItem::content_capped(FillBox::new(Color::BLACK), None, Some(height))
}

fn run(document: Document) -> Result<(u32, RecordingSink), FolioError> {
    let mut sink = RecordingSink::new();
    let total = compose(document, &GreedyShaper::new(), &mut sink)?;
    Ok((total, sink))
}

fn rects(page: &PageRecord) -> Vec<(f64, f64, f64, f64)> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect {
                left,
                top,
                right,
                bottom,
                ..
            } => Some((*left, *top, *right, *bottom)),
            _ => None,
        })
        .collect()
}

fn text_ops(page: &PageRecord) -> Vec<(f64, f64)> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

// ─── Pagination ─────────────────────────────────────────────────

#[test]
fn test_empty_document_is_one_page_with_chrome() {
    let document = Document::new(bare_page(200, 100))
        .with_header(text("Header"))
        .with_footer(text("Footer"));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 1);
    assert_eq!(sink.pages.len(), 1);
    let chrome = text_ops(&sink.pages[0]);
    assert_eq!(chrome.len(), 2, "header and footer, nothing else");
    assert_eq!(chrome[0], (0.0, 0.0), "header at the top");
    assert_eq!(chrome[1], (0.0, 90.0), "footer pinned to the bottom");
}

#[test]
fn test_overflow_breaks_to_second_page() {
    let mut document = Document::new(bare_page(100, 100));
    document.push(block(40));
    document.push(block(40));
    document.push(block(40));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 2);
    assert_eq!(sink.pages.len(), 2);

    let first = rects(&sink.pages[0]);
    assert_eq!(first.len(), 2, "80 <= 100 keeps two items on page 1");
    assert_eq!(first[0], (0.0, 0.0, 100.0, 40.0));
    assert_eq!(first[1], (0.0, 40.0, 100.0, 80.0));

    let second = rects(&sink.pages[1]);
    assert_eq!(second.len(), 1);
    assert_eq!(
        second[0],
        (0.0, 0.0, 100.0, 40.0),
        "third item restarts at the top"
    );
}

#[test]
fn test_total_pages_matches_sink() {
    let mut document = Document::new(bare_page(100, 50));
    for _ in 0..5 {
        document.push(block(30));
    }
    let (total, sink) = run(document).unwrap();
    assert_eq!(total, 5);
    assert_eq!(sink.pages.len(), 5);
}

#[test]
fn test_vertical_space_that_does_not_fit_becomes_the_break() {
    let mut document = Document::new(bare_page(100, 100));
    document.push(block(50));
    document.push(PageItem::vertical_space(60));
    document.push(block(10));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 2);
    assert_eq!(rects(&sink.pages[0]).len(), 1, "the space is not drawn short");
    let second = rects(&sink.pages[1]);
    assert_eq!(
        second[0].1, 0.0,
        "the unconsumed space does not carry onto the new page"
    );
}

#[test]
fn test_vertical_space_advances_cursor() {
    let mut document = Document::new(bare_page(100, 100));
    document.push(block(20));
    document.push(PageItem::vertical_space(15));
    document.push(block(20));
    let (_, sink) = run(document).unwrap();

    let placed = rects(&sink.pages[0]);
    assert_eq!(placed[1].1, 35.0, "20 of content plus 15 of space");
}

#[test]
fn test_header_and_footer_reserve_body_height() {
    // 10-unit header and footer leave an 80-unit body; two 50-unit items
    // cannot share it.
    let mut document = Document::new(bare_page(100, 100))
        .with_header(text("H"))
        .with_footer(text("F"));
    document.push(block(50));
    document.push(block(50));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 2);
    for page in &sink.pages {
        let chrome = text_ops(page);
        assert_eq!(chrome[0], (0.0, 0.0), "header redrawn on every page");
        assert_eq!(chrome[1], (0.0, 90.0), "footer redrawn on every page");
        assert_eq!(rects(page)[0].1, 10.0, "content starts below the header");
    }
}

#[test]
fn test_content_too_tall_is_an_error() {
    let tall = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj"; // 10 lines × 10 units
    let mut document = Document::new(bare_page(100, 50));
    document.push(PageItem::content(text(tall)));
    let err = run(document).unwrap_err();
    assert!(matches!(
        err,
        FolioError::ContentTooTall {
            required: 100,
            available: 50,
        }
    ));
}

// ─── Indentation ────────────────────────────────────────────────

#[test]
fn test_indentation_shifts_and_narrows_content() {
    let mut document = Document::new(bare_page(200, 100));
    document.push(PageItem::indentation(20, 10));
    document.push(block(30));
    let (_, sink) = run(document).unwrap();

    let placed = rects(&sink.pages[0]);
    assert_eq!(
        placed[0],
        (20.0, 0.0, 190.0, 30.0),
        "shifted 20, narrowed by 30"
    );
}

#[test]
fn test_indentation_persists_across_page_break() {
    let mut document = Document::new(bare_page(200, 100));
    document.push(PageItem::indentation(20, 10));
    document.push(block(30));
    document.push(PageItem::vertical_space(100));
    document.push(block(30));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 2);
    assert_eq!(rects(&sink.pages[1])[0], (20.0, 0.0, 190.0, 30.0));
}

#[test]
fn test_negative_indentation_undoes_the_shift() {
    let mut document = Document::new(bare_page(200, 100));
    document.push(PageItem::indentation(20, 10));
    document.push(PageItem::indentation(-20, -10));
    document.push(block(30));
    let (_, sink) = run(document).unwrap();

    assert_eq!(rects(&sink.pages[0])[0], (0.0, 0.0, 200.0, 30.0));
}

// ─── Content caps ───────────────────────────────────────────────

#[test]
fn test_content_caps_clamp_the_available_box() {
    let mut document = Document::new(bare_page(200, 100));
    document.push(PageItem::content_capped(
        FillBox::new(Color::BLACK),
        Some(50),
        Some(30),
    ));
    let (_, sink) = run(document).unwrap();

    assert_eq!(rects(&sink.pages[0])[0], (0.0, 0.0, 50.0, 30.0));
}

#[test]
fn test_image_is_stretched_to_its_box() {
    let mut provider = FixedImageProvider::new();
    provider.insert("logo", 64, 64);
    let handle = provider.resolve("logo").unwrap();

    let mut document = Document::new(bare_page(200, 100));
    document.push(PageItem::content_capped(
        ImageBox::new(handle),
        Some(40),
        Some(20),
    ));
    let (_, sink) = run(document).unwrap();

    match &sink.pages[0].ops[0] {
        DrawOp::Image {
            x,
            y,
            width,
            height,
            source,
        } => {
            assert_eq!((*x, *y), (0.0, 0.0));
            assert_eq!((*width, *height), (40, 20));
            assert_eq!(source, "logo");
        }
        other => panic!("expected image op, got {:?}", other),
    }
}

#[test]
fn test_unknown_image_source_is_an_error() {
    let provider = FixedImageProvider::new();
    assert!(matches!(
        provider.resolve("missing"),
        Err(FolioError::Image(_))
    ));
}

// ─── Containers in the flow ─────────────────────────────────────

#[test]
fn test_center_gravity_offsets_short_child() {
    let row = LinearBox::row(vec![
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::Absolute(30),
            SizeSpec::Absolute(10),
        ),
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::Absolute(30),
            SizeSpec::Absolute(30),
        ),
    ])
    .with_gravity(Default::default(), VerticalGravity::Center);

    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content(row));
    let (_, sink) = run(document).unwrap();

    let placed = rects(&sink.pages[0]);
    // Container measures 30 tall; the 10-unit child floats at (30-10)/2.
    assert_eq!(placed[0], (0.0, 10.0, 30.0, 20.0));
    assert_eq!(placed[1], (30.0, 0.0, 60.0, 30.0));
}

#[test]
fn test_fill_remaining_pushes_trailing_child_to_the_edge() {
    let row = LinearBox::row(vec![
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::Absolute(30),
            SizeSpec::Absolute(10),
        ),
        LinearChild::new(Space::new(), SizeSpec::FillRemaining, SizeSpec::WrapContent),
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::Absolute(20),
            SizeSpec::Absolute(10),
        ),
    ]);

    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content(row));
    let (_, sink) = run(document).unwrap();

    let placed = rects(&sink.pages[0]);
    assert_eq!(placed[0], (0.0, 0.0, 30.0, 10.0));
    // 30 + elastic 50 puts the trailing 20-unit swatch against the right edge.
    assert_eq!(placed[1], (80.0, 0.0, 100.0, 10.0));
}

#[test]
fn test_configuration_error_surfaces_before_any_drawing() {
    let row = LinearBox::row(vec![
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::FillRemaining,
            SizeSpec::WrapContent,
        ),
        LinearChild::new(
            FillBox::new(Color::BLACK),
            SizeSpec::FillRemaining,
            SizeSpec::WrapContent,
        ),
    ]);

    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content(row));
    let mut sink = RecordingSink::new();
    let err = compose(document, &GreedyShaper::new(), &mut sink).unwrap_err();

    assert!(matches!(err, FolioError::DuplicateFillRemaining));
    assert!(sink.pages.is_empty(), "no page was finished");
}

#[test]
fn test_wrap_content_consumes_at_most_the_offer() {
    let mut node = LayoutNode::from(LinearBox::row(vec![LinearChild::new(
        text("abc"),
        SizeSpec::WrapContent,
        SizeSpec::WrapContent,
    )]));
    node.init(Size::new(100, 100), &GreedyShaper::new()).unwrap();
    // Three 5-unit chars wrap to 15, well under the 100 offered.
    assert_eq!(node.measure_width().unwrap(), 15);
    assert_eq!(node.measure_height().unwrap(), 10);
}

// ─── Text in the flow ───────────────────────────────────────────

#[test]
fn test_text_center_alignment_with_max_width() {
    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content(
        text("ab").with_align(TextAlign::Center).with_max_width(50),
    ));
    let (_, sink) = run(document).unwrap();

    match &sink.pages[0].ops[0] {
        DrawOp::Text { x, block, .. } => {
            // The 50-wide block is centered in the 100-wide box, and the
            // 10-unit line is centered inside the block.
            assert_eq!(*x, 25.0);
            assert_eq!(block.lines[0].x, 20.0);
        }
        other => panic!("expected text op, got {:?}", other),
    }
}

#[test]
fn test_text_vertical_center_inside_match_parent_row() {
    let row = LinearBox::row(vec![LinearChild::new(
        text("ab").with_vertical_align(VerticalAlign::Center),
        SizeSpec::WrapContent,
        SizeSpec::MatchParent,
    )]);
    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content_capped(row, None, Some(100)));
    let (_, sink) = run(document).unwrap();

    let ops = text_ops(&sink.pages[0]);
    assert_eq!(ops[0], (0.0, 45.0), "(100 - 10) / 2 below the row top");
}

// ─── Lifecycle ──────────────────────────────────────────────────

#[test]
fn test_space_measures_zero_and_draws_nothing() {
    let mut document = Document::new(bare_page(100, 100));
    document.push(PageItem::content(Space::new()));
    let (total, sink) = run(document).unwrap();

    assert_eq!(total, 1);
    assert!(sink.pages[0].ops.is_empty());

    let mut node = LayoutNode::from(Space::new());
    node.init(Size::new(100, 100), &GreedyShaper::new()).unwrap();
    assert_eq!(node.measure_width().unwrap(), 0);
    assert_eq!(node.measure_height().unwrap(), 0);
}

#[test]
fn test_measure_before_init_is_an_error() {
    let mut node = LayoutNode::from(FillBox::new(Color::BLACK));
    assert!(matches!(
        node.measure_width(),
        Err(FolioError::NotInitialized)
    ));
}

#[test]
fn test_double_init_is_an_error() {
    let shaper = GreedyShaper::new();
    let mut node = LayoutNode::from(FillBox::new(Color::BLACK));
    node.init(Size::new(10, 10), &shaper).unwrap();
    assert!(matches!(
        node.init(Size::new(10, 10), &shaper),
        Err(FolioError::AlreadyInitialized)
    ));
}

#[test]
fn test_destroyed_node_is_inert() {
    let shaper = GreedyShaper::new();
    let mut node = LayoutNode::from(FillBox::new(Color::BLACK));
    node.init(Size::new(10, 10), &shaper).unwrap();
    node.destroy().unwrap();

    assert!(matches!(node.destroy(), Err(FolioError::NodeDestroyed)));
    assert!(matches!(
        node.measure_height(),
        Err(FolioError::NodeDestroyed)
    ));
    assert!(matches!(
        node.init(Size::new(10, 10), &shaper),
        Err(FolioError::NodeDestroyed)
    ));
}
