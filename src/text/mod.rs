//! # Text Contracts
//!
//! Shaping — turning a string plus font attributes into measured, wrapped
//! lines — is an external capability. The engine hands a [`TextShaper`] the
//! text, a wrap width, and the style, and gets back a [`ShapedBlock`]: line
//! geometry it can measure against and hand to a [`Surface`] to draw.
//!
//! The crate ships one reference implementation, [`greedy::GreedyShaper`],
//! which breaks at UAX#14 opportunities with uniform advance metrics. Real
//! backends plug in a shaper backed by real font data.
//!
//! [`Surface`]: crate::surface::Surface

pub mod greedy;

use serde::{Deserialize, Serialize};

use crate::model::Color;

/// Font and paint attributes for a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in page units.
    pub font_size: f64,
    /// Line height as a multiplier of font size.
    pub line_height: f64,
    /// Text color.
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            line_height: 1.4,
            color: Color::BLACK,
        }
    }
}

/// Horizontal alignment of lines within a text block's wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of a text block inside its consumed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// A measured, line-broken text block ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedBlock {
    /// Lines in top-to-bottom order, positioned relative to the block origin.
    pub lines: Vec<ShapedLine>,
    /// Total block height in page units.
    pub height: u32,
    /// The style the block was shaped with, carried for the drawing backend.
    pub style: TextStyle,
}

impl ShapedBlock {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The tightest bounding width across all lines.
    pub fn max_line_width(&self) -> f64 {
        self.lines.iter().map(|l| l.width).fold(0.0, f64::max)
    }
}

/// One laid-out line within a [`ShapedBlock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedLine {
    pub text: String,
    /// Offset of the line's left edge from the block origin, after alignment.
    pub x: f64,
    /// Offset of the line's top from the block origin.
    pub y: f64,
    /// Measured line width, excluding trailing whitespace.
    pub width: f64,
}

/// The external text-shaping capability.
pub trait TextShaper {
    /// Shape `text` into lines no wider than `max_width`, aligning each line
    /// within that width per `align`.
    fn shape(&self, text: &str, max_width: u32, style: &TextStyle, align: TextAlign)
        -> ShapedBlock;
}
