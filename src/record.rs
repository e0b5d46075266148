//! # Recording Backend
//!
//! An in-memory [`PageSink`]/[`Surface`] pair that captures every draw call
//! as data instead of rendering it. The integration tests assert against
//! the recorded ops, and the demo binary dumps them as JSON — the same role
//! the serializable layout-metadata types play in a dev-tools overlay.
//!
//! Also home to [`FixedImageProvider`], a table-backed image resolver for
//! environments with no real asset pipeline.

use std::collections::HashMap;
use std::io;

use serde::Serialize;

use crate::error::FolioError;
use crate::model::Color;
use crate::surface::{ImageHandle, ImageProvider, PageSink, Surface};
use crate::text::ShapedBlock;

/// One captured drawing primitive.
#[derive(Debug, Clone, Serialize)]
pub enum DrawOp {
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        block: ShapedBlock,
    },
    Image {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
        source: String,
    },
}

/// A finished page and its draw ops in issue order.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub index: u32,
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

/// The drawing surface of one in-flight page.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    index: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32, index: u32) -> Self {
        Self {
            width,
            height,
            index,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Color) {
        self.ops.push(DrawOp::Rect {
            left,
            top,
            right,
            bottom,
            color,
        });
    }

    fn draw_text(&mut self, x: f64, y: f64, block: &ShapedBlock) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            block: block.clone(),
        });
    }

    fn draw_image(&mut self, x: f64, y: f64, width: u32, height: u32, image: &ImageHandle) {
        self.ops.push(DrawOp::Image {
            x,
            y,
            width,
            height,
            source: image.source.clone(),
        });
    }
}

/// Collects finished pages; `write_to` emits them as pretty JSON.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub pages: Vec<PageRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSink for RecordingSink {
    type Surface = RecordingSurface;

    fn begin_page(&mut self, width: u32, height: u32, index: u32) -> RecordingSurface {
        RecordingSurface::new(width, height, index)
    }

    fn finish_page(&mut self, surface: RecordingSurface) {
        self.pages.push(PageRecord {
            index: surface.index,
            width: surface.width,
            height: surface.height,
            ops: surface.ops,
        });
    }

    fn write_to(&mut self, out: &mut dyn io::Write) -> io::Result<()> {
        serde_json::to_writer_pretty(out, &self.pages)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Resolves image sources from a fixed table of intrinsic dimensions.
#[derive(Debug, Default)]
pub struct FixedImageProvider {
    images: HashMap<String, (u32, u32)>,
}

impl FixedImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, width_px: u32, height_px: u32) {
        self.images.insert(source.into(), (width_px, height_px));
    }
}

impl ImageProvider for FixedImageProvider {
    fn resolve(&self, source: &str) -> Result<ImageHandle, FolioError> {
        self.images
            .get(source)
            .map(|&(width_px, height_px)| ImageHandle {
                source: source.to_string(),
                width_px,
                height_px,
            })
            .ok_or_else(|| FolioError::Image(format!("unknown image source: {source}")))
    }
}
