//! # Cursor
//!
//! Tracks the current drawing origin on a page surface. Layout code never
//! talks to a [`Surface`] directly — every primitive goes through the cursor,
//! so every draw automatically lands at the current offset.
//!
//! Translation is relative and cumulative. Sibling draws are isolated with an
//! explicit origin stack ([`Cursor::push`] / [`Cursor::pop`]) rather than by
//! hand-restoring coordinates.

use crate::model::Color;
use crate::surface::{ImageHandle, Surface};
use crate::text::ShapedBlock;

/// The drawing origin on one page, plus pass-through drawing primitives.
#[derive(Debug)]
pub struct Cursor<S: Surface> {
    surface: S,
    x: f64,
    y: f64,
    saved: Vec<(f64, f64)>,
}

impl<S: Surface> Cursor<S> {
    /// Wrap a fresh page surface with the origin at the page's top-left.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            x: 0.0,
            y: 0.0,
            saved: Vec::new(),
        }
    }

    /// Current horizontal offset from the page origin.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current vertical offset from the page origin.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move the origin by a relative amount.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Move the origin to an absolute position.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.translate(x - self.x, y - self.y);
    }

    /// Save the current origin on the stack.
    pub fn push(&mut self) {
        self.saved.push((self.x, self.y));
    }

    /// Restore the most recently saved origin. An unmatched `pop` leaves the
    /// origin untouched.
    pub fn pop(&mut self) {
        if let Some((x, y)) = self.saved.pop() {
            self.move_to(x, y);
        }
    }

    /// Fill a rectangle given in cursor-relative coordinates.
    pub fn fill_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Color) {
        self.surface
            .fill_rect(self.x + left, self.y + top, self.x + right, self.y + bottom, color);
    }

    /// Draw a shaped text block at the current origin.
    pub fn draw_block(&mut self, block: &ShapedBlock) {
        self.surface.draw_text(self.x, self.y, block);
    }

    /// Blit an image at the current origin, stretched to `width` × `height`.
    pub fn draw_image(&mut self, width: u32, height: u32, image: &ImageHandle) {
        self.surface.draw_image(self.x, self.y, width, height, image);
    }

    /// Unwrap the underlying surface when the page is complete.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;
    use crate::record::{DrawOp, RecordingSurface};

    fn scratch() -> Cursor<RecordingSurface> {
        Cursor::new(RecordingSurface::new(100, 100, 1))
    }

    #[test]
    fn test_translate_accumulates() {
        let mut cursor = scratch();
        cursor.translate(10.0, 5.0);
        cursor.translate(-3.0, 7.0);
        assert_eq!(cursor.x(), 7.0);
        assert_eq!(cursor.y(), 12.0);
    }

    #[test]
    fn test_move_to_is_relative_translation() {
        let mut cursor = scratch();
        cursor.translate(10.0, 10.0);
        cursor.move_to(4.0, 25.0);
        assert_eq!(cursor.x(), 4.0);
        assert_eq!(cursor.y(), 25.0);
    }

    #[test]
    fn test_push_pop_nests() {
        let mut cursor = scratch();
        cursor.translate(5.0, 5.0);
        cursor.push();
        cursor.translate(20.0, 0.0);
        cursor.push();
        cursor.translate(0.0, 30.0);
        cursor.pop();
        assert_eq!((cursor.x(), cursor.y()), (25.0, 5.0));
        cursor.pop();
        assert_eq!((cursor.x(), cursor.y()), (5.0, 5.0));
    }

    #[test]
    fn test_unmatched_pop_is_ignored() {
        let mut cursor = scratch();
        cursor.translate(3.0, 4.0);
        cursor.pop();
        assert_eq!((cursor.x(), cursor.y()), (3.0, 4.0));
    }

    #[test]
    fn test_fill_rect_applies_offset() {
        let mut cursor = scratch();
        cursor.translate(10.0, 20.0);
        cursor.fill_rect(0.0, 0.0, 5.0, 5.0, Color::BLACK);
        let surface = cursor.into_surface();
        match &surface.ops()[0] {
            DrawOp::Rect {
                left,
                top,
                right,
                bottom,
                ..
            } => {
                assert_eq!((*left, *top, *right, *bottom), (10.0, 20.0, 15.0, 25.0));
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }
}
