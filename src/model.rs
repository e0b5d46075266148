//! # Geometry Model
//!
//! The shared vocabulary of the engine: sizes, edge insets, colors, and the
//! page configuration a document is composed against.
//!
//! All extents are non-negative integers in page units. Cursor offsets and
//! alignment corrections are `f64` — a node occupies a whole number of units,
//! but centering inside an odd amount of slack lands on a half unit.

use serde::{Deserialize, Serialize};

/// A width/height pair in page units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Edge values (top, right, bottom, left) used for page margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edges {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Edges {
    pub fn uniform(v: u32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// An RGBA color with components in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// An opaque color from RGB components.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Configuration for the pages of a document: dimensions and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page width in page units.
    pub width: u32,
    /// Page height in page units.
    pub height: u32,
    /// Page margins.
    #[serde(default)]
    pub margin: Edges,
}

impl PageConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Edges::default(),
        }
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Page width minus the horizontal margins.
    pub fn content_width(&self) -> u32 {
        self.width.saturating_sub(self.margin.horizontal())
    }

    /// Page height minus the vertical margins.
    pub fn content_height(&self) -> u32 {
        self.height.saturating_sub(self.margin.vertical())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            // A4 rounded to whole page units, ~0.75 inch margins
            width: 595,
            height: 842,
            margin: Edges::uniform(54),
        }
    }
}
