//! # Folio
//!
//! A declarative page-layout engine.
//!
//! Callers describe content as a tree of layout nodes — text, images,
//! fills, spacers, linear containers — and a stream of page items. Folio
//! measures the tree, decides geometry, and emits drawing commands page by
//! page; it never hand-computes coordinates for you and it never touches a
//! concrete file format.
//!
//! ## Architecture
//!
//! ```text
//! Document (page items + header/footer nodes)
//!       ↓
//!   [layout]   — nodes: init → measure → draw lifecycle
//!       ↓
//!   [flow]     — streams items into pages, breaking on overflow
//!       ↓
//!   [surface]  — trait boundary: Surface / PageSink / TextShaper
//! ```
//!
//! Everything below the trait boundary is pluggable: a PDF writer, an SVG
//! emitter, or the in-memory [`record`] backend used by the tests and the
//! demo binary.
//!
//! ## Example
//!
//! ```
//! use folio::{
//!     compose, Color, Document, FillBox, GreedyShaper, PageConfig, PageItem,
//!     RecordingSink, TextBox, TextStyle,
//! };
//!
//! let mut document = Document::new(PageConfig::new(500, 800));
//! document.push(PageItem::content(TextBox::new(
//!     "Hello folio!",
//!     TextStyle::default(),
//! )));
//! document.push(PageItem::vertical_space(12));
//! document.push(PageItem::content_capped(
//!     FillBox::new(Color::rgb(0.9, 0.9, 0.9)),
//!     None,
//!     Some(40),
//! ));
//!
//! let mut sink = RecordingSink::new();
//! let total_pages = compose(document, &GreedyShaper::new(), &mut sink).unwrap();
//! assert_eq!(total_pages, 1);
//! ```

pub mod cursor;
pub mod error;
pub mod flow;
pub mod layout;
pub mod model;
pub mod record;
pub mod surface;
pub mod text;

pub use cursor::Cursor;
pub use error::FolioError;
pub use flow::{compose, Document, PageItem};
pub use layout::{
    FillBox, HorizontalGravity, ImageBox, LayoutNode, LinearBox, LinearChild, Orientation,
    SizeSpec, Space, TextBox, VerticalGravity,
};
pub use model::{Color, Edges, PageConfig, Size};
pub use record::{DrawOp, FixedImageProvider, PageRecord, RecordingSink, RecordingSurface};
pub use surface::{ImageHandle, ImageProvider, PageSink, Surface};
pub use text::{
    greedy::GreedyShaper, ShapedBlock, ShapedLine, TextAlign, TextShaper, TextStyle,
    VerticalAlign,
};
