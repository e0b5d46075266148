//! # Backend Contracts
//!
//! The engine decides geometry and the ordering of draw calls; it never
//! touches a concrete output format. These traits are the boundary to the
//! outside world:
//!
//! - [`Surface`] — a single page's drawing target. Receives rectangle fills,
//!   shaped text blocks, and image blits at absolute page coordinates (the
//!   [`Cursor`](crate::cursor::Cursor) applies its accumulated offset before
//!   delegating here).
//! - [`PageSink`] — owns the page sequence and the final byte output.
//! - [`ImageProvider`] — resolves an image source string to a fixed-size
//!   drawable handle ahead of layout.
//!
//! A PDF writer, an SVG emitter, or the in-memory recording backend in
//! [`record`](crate::record) are all just implementations of these traits.

use std::io;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::model::Color;
use crate::text::ShapedBlock;

/// A drawing target for one page.
///
/// All coordinates are absolute page units with the origin at the top-left
/// corner of the page.
pub trait Surface {
    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Color);

    /// Draw a shaped text block with its origin at `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, block: &ShapedBlock);

    /// Blit an image into the box `(x, y, x + width, y + height)`.
    fn draw_image(&mut self, x: f64, y: f64, width: u32, height: u32, image: &ImageHandle);
}

/// The page sequence and output channel of a document build.
pub trait PageSink {
    type Surface: Surface;

    /// Open page `index` (1-based) and return its drawing surface.
    fn begin_page(&mut self, width: u32, height: u32, index: u32) -> Self::Surface;

    /// Close a page previously returned by `begin_page`.
    fn finish_page(&mut self, surface: Self::Surface);

    /// Write the completed document to `out`.
    fn write_to(&mut self, out: &mut dyn io::Write) -> io::Result<()>;
}

/// A resolved image: a source identifier plus its intrinsic pixel dimensions.
///
/// The engine stretches the image to whatever box the layout grants it; the
/// intrinsic dimensions are carried for backends that care about resampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHandle {
    pub source: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Resolves image identifiers to drawable handles.
pub trait ImageProvider {
    fn resolve(&self, source: &str) -> Result<ImageHandle, FolioError>;
}
