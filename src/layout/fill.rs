//! A solid-color rectangle. Measures to exactly its available box and
//! ignores the wrap flags — a fill has no intrinsic size of its own.

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::{Color, Size};
use crate::surface::Surface;

use super::Phase;

/// A box filled with a single color.
#[derive(Debug)]
pub struct FillBox {
    color: Color,
    phase: Phase<Size>,
}

impl FillBox {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            phase: Phase::Uninitialized,
        }
    }

    pub(crate) fn init(&mut self, available: Size) -> Result<(), FolioError> {
        self.phase.initialize(available)
    }

    pub(crate) fn measure_width(&self) -> Result<u32, FolioError> {
        Ok(self.phase.get()?.width)
    }

    pub(crate) fn measure_height(&self) -> Result<u32, FolioError> {
        Ok(self.phase.get()?.height)
    }

    pub(crate) fn draw<S: Surface>(
        &mut self,
        cursor: &mut Cursor<S>,
        _wrap_width: bool,
        _wrap_height: bool,
    ) -> Result<Size, FolioError> {
        let available = *self.phase.get()?;
        cursor.fill_rect(
            0.0,
            0.0,
            f64::from(available.width),
            f64::from(available.height),
            self.color,
        );
        Ok(available)
    }

    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        self.phase.destroy()
    }
}
