//! The text leaf. Shaping happens once at `init`: the effective wrap width
//! is the available width clamped by the node's own `max_width`, and the
//! shaper produces the measured, line-broken block that measure and draw
//! read from. The intrinsic width is the widest shaped line, computed once
//! and cached.

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::Size;
use crate::surface::Surface;
use crate::text::{ShapedBlock, TextAlign, TextShaper, TextStyle, VerticalAlign};

use super::Phase;

/// A shaped, aligned text block.
#[derive(Debug)]
pub struct TextBox {
    text: String,
    style: TextStyle,
    align: TextAlign,
    vertical_align: VerticalAlign,
    max_width: Option<u32>,
    phase: Phase<Shaped>,
}

#[derive(Debug)]
struct Shaped {
    available: Size,
    block: ShapedBlock,
    /// Widest line, cached on first measure.
    measured_width: Option<u32>,
}

impl Shaped {
    fn measured_width(&mut self) -> u32 {
        *self
            .measured_width
            .get_or_insert(self.block.max_line_width() as u32)
    }
}

impl TextBox {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            max_width: None,
            phase: Phase::Uninitialized,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = vertical_align;
        self
    }

    /// A hard wrap-width cap independent of the available box.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// The wrap width the block is shaped at for a given available width.
    fn wrap_width(&self, available_width: u32) -> u32 {
        match self.max_width {
            Some(max) => available_width.min(max),
            None => available_width,
        }
    }

    pub(crate) fn init(
        &mut self,
        available: Size,
        shaper: &dyn TextShaper,
    ) -> Result<(), FolioError> {
        self.phase.ensure_uninitialized()?;
        let block = shaper.shape(
            &self.text,
            self.wrap_width(available.width),
            &self.style,
            self.align,
        );
        self.phase.initialize(Shaped {
            available,
            block,
            measured_width: None,
        })
    }

    pub(crate) fn measure_width(&mut self) -> Result<u32, FolioError> {
        Ok(self.phase.get_mut()?.measured_width())
    }

    pub(crate) fn measure_height(&self) -> Result<u32, FolioError> {
        Ok(self.phase.get()?.block.height)
    }

    pub(crate) fn draw<S: Surface>(
        &mut self,
        cursor: &mut Cursor<S>,
        wrap_width: bool,
        wrap_height: bool,
    ) -> Result<Size, FolioError> {
        let wrap_cap = self.max_width;
        let align = self.align;
        let vertical_align = self.vertical_align;

        let shaped = self.phase.get_mut()?;
        let measured_width = shaped.measured_width();
        let measured_height = shaped.block.height;
        let available = shaped.available;

        let consumed_width = if wrap_width {
            measured_width
        } else {
            available.width
        };
        let consumed_height = if wrap_height {
            measured_height
        } else {
            available.height
        };

        // The shaper aligned lines inside the full wrap width; when the box
        // we are placed in differs from that width, shift the whole block so
        // the alignment holds against the box instead. For a wrapped width
        // this offset is negative or zero.
        let block_width = match wrap_cap {
            Some(max) => available.width.min(max),
            None => available.width,
        };
        let outer_width = if wrap_width {
            measured_width
        } else {
            available.width
        };
        let dx = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => (f64::from(outer_width) - f64::from(block_width)) / 2.0,
            TextAlign::Right => f64::from(outer_width) - f64::from(block_width),
        };
        let dy = match vertical_align {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Center => {
                (f64::from(consumed_height) - f64::from(measured_height)) / 2.0
            }
            VerticalAlign::Bottom => f64::from(consumed_height) - f64::from(measured_height),
        };

        cursor.translate(dx, dy);
        cursor.draw_block(&shaped.block);

        Ok(Size::new(consumed_width, consumed_height))
    }

    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        self.phase.destroy()
    }
}
