//! A zero-size placeholder. Useful as the elastic child of a
//! `FillRemaining` slot when the gap itself should stay empty.

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::Size;
use crate::surface::Surface;

use super::Phase;

/// Occupies no space and draws nothing.
#[derive(Debug, Default)]
pub struct Space {
    phase: Phase<()>,
}

impl Space {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn init(&mut self, _available: Size) -> Result<(), FolioError> {
        self.phase.initialize(())
    }

    pub(crate) fn measure_width(&self) -> Result<u32, FolioError> {
        self.phase.get()?;
        Ok(0)
    }

    pub(crate) fn measure_height(&self) -> Result<u32, FolioError> {
        self.phase.get()?;
        Ok(0)
    }

    pub(crate) fn draw<S: Surface>(
        &mut self,
        _cursor: &mut Cursor<S>,
        _wrap_width: bool,
        _wrap_height: bool,
    ) -> Result<Size, FolioError> {
        self.phase.get()?;
        Ok(Size::ZERO)
    }

    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        self.phase.destroy()
    }
}
