//! An image leaf. The handle is resolved ahead of layout by an
//! [`ImageProvider`](crate::surface::ImageProvider); the node itself just
//! binds the image to its available box and blits it — stretched, not
//! aspect-preserving.

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::Size;
use crate::surface::{ImageHandle, Surface};

use super::Phase;

/// A resolved image stretched to its available box.
#[derive(Debug)]
pub struct ImageBox {
    handle: ImageHandle,
    phase: Phase<Size>,
}

impl ImageBox {
    pub fn new(handle: ImageHandle) -> Self {
        Self {
            handle,
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
        cursor.draw_image(available.width, available.height, &self.handle);
        Ok(available)
    }

    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        self.phase.destroy()
    }
}
