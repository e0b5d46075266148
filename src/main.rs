//! # Folio CLI
//!
//! Composes a small sample document against the recording backend and
//! prints what the engine decided to draw.
//!
//! Usage:
//!   folio            — per-page summary of the recorded draw ops
//!   folio --json     — full draw log as JSON
//!   folio -o out.json — write the draw log to a file

use std::env;
use std::fs::File;
use std::process;

use folio::{
    compose, Color, Document, DrawOp, Edges, FillBox, GreedyShaper, HorizontalGravity, LinearBox,
    LinearChild, PageConfig, PageItem, PageSink, RecordingSink, SizeSpec, Space, TextAlign,
    TextBox, TextStyle, VerticalGravity,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let document = sample_document();
    let mut sink = RecordingSink::new();

    let total_pages = match compose(document, &GreedyShaper::new(), &mut sink) {
        Ok(total) => total,
        Err(e) => {
            eprintln!("✗ Failed to compose document: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = args.windows(2).find(|w| w[0] == "-o").map(|w| &w[1]) {
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("✗ Failed to create {}: {}", path, e);
                process::exit(1);
            }
        };
        if let Err(e) = sink.write_to(&mut file) {
            eprintln!("✗ Failed to write draw log: {}", e);
            process::exit(1);
        }
        eprintln!("✓ Composed {} pages to {}", total_pages, path);
        return;
    }

    if args.iter().any(|a| a == "--json") {
        match serde_json::to_string_pretty(&sink.pages) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("✗ Failed to serialize draw log: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    eprintln!("✓ Composed {} pages", total_pages);
    for page in &sink.pages {
        println!(
            "page {} ({}x{}): {} ops",
            page.index,
            page.width,
            page.height,
            page.ops.len()
        );
        for op in &page.ops {
            match op {
                DrawOp::Rect {
                    left,
                    top,
                    right,
                    bottom,
                    ..
                } => println!("  rect  ({:.1}, {:.1}) – ({:.1}, {:.1})", left, top, right, bottom),
                DrawOp::Text { x, y, block } => println!(
                    "  text  ({:.1}, {:.1}) {} line(s), first: {:?}",
                    x,
                    y,
                    block.line_count(),
                    block.lines.first().map(|l| l.text.as_str()).unwrap_or("")
                ),
                DrawOp::Image {
                    x,
                    y,
                    width,
                    height,
                    source,
                } => println!("  image ({:.1}, {:.1}) {}x{} {}", x, y, width, height, source),
            }
        }
    }
}

/// A two-page status report exercising headers, footers, containers,
/// gravity, indentation, and spacer-driven page breaks.
fn sample_document() -> Document {
    let body = TextStyle::default();
    let heading = TextStyle {
        font_size: 20.0,
        ..TextStyle::default()
    };
    let fine_print = TextStyle {
        font_size: 8.0,
        color: Color::rgb(0.4, 0.4, 0.4),
        ..TextStyle::default()
    };

    let mut document = Document::new(
        PageConfig::new(500, 400).with_margin(Edges::uniform(24)),
    )
    .with_header(TextBox::new("Quarterly Report", heading).with_align(TextAlign::Center))
    .with_footer(TextBox::new("folio demo", fine_print).with_align(TextAlign::Right));

    document.push(PageItem::vertical_space(12));

    // A banner row: label on the left, elastic gap, a swatch on the right.
    document.push(PageItem::content(
        LinearBox::row(vec![
            LinearChild::new(
                TextBox::new("Overview", body.clone()),
                SizeSpec::WrapContent,
                SizeSpec::WrapContent,
            ),
            LinearChild::new(Space::new(), SizeSpec::FillRemaining, SizeSpec::WrapContent),
            LinearChild::new(
                FillBox::new(Color::rgb(0.2, 0.5, 0.8)),
                SizeSpec::Absolute(40),
                SizeSpec::Absolute(16),
            ),
        ])
        .with_gravity(HorizontalGravity::Left, VerticalGravity::Center),
    ));

    document.push(PageItem::vertical_space(8));
    document.push(PageItem::indentation(16, 16));

    for section in 1..=4 {
        document.push(PageItem::content(TextBox::new(
            format!(
                "Section {}. Revenue held steady while costs narrowed, \
                 leaving the quarter ahead of plan.",
                section
            ),
            body.clone(),
        )));
        document.push(PageItem::vertical_space(60));
    }

    document.push(PageItem::indentation(-16, -16));
    document.push(PageItem::content_capped(
        FillBox::new(Color::rgb(0.9, 0.9, 0.9)),
        None,
        Some(30),
    ));

    document
}
