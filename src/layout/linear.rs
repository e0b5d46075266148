//! # Linear Container
//!
//! Arranges child nodes along one axis with per-child size specifications
//! and axis-independent gravity. This is the constraint solver of the node
//! set; everything else is a leaf.
//!
//! ## Measure pass
//!
//! Children are placed in order against the space still remaining on the
//! main axis (for `Over`, nothing is consumed sequentially — both axes act
//! as cross axes):
//!
//! - `Absolute(v)` is offered `min(remaining, v)`.
//! - `WrapContent` and `MatchParent` are offered the full remaining extent;
//!   they differ only in what counts as consumed afterwards — the child's
//!   measured size for `WrapContent`, the whole offer for `MatchParent`.
//! - `FillRemaining` is deferred: every other child is placed first, then
//!   the fill child is offered whatever is left on the main axis. At most
//!   one child may fill, and only on the main axis — anything else is a
//!   configuration error that aborts the build before any drawing.
//!
//! Consumed extents sum along the main axis and max along the cross axis;
//! the container's measured size is that accumulation.
//!
//! ## Draw pass
//!
//! The container shifts once by gravity inside its own box (chosen total
//! minus measured, halved for center), then walks the children: offset on
//! the cross axis by gravity, draw with wrap flags derived from
//! `WrapContent` specs, restore the origin, and advance the main axis by
//! the child's consumed extent.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::Size;
use crate::surface::Surface;
use crate::text::TextShaper;

use super::{LayoutNode, Phase};

/// The axis children are arranged along. `Over` stacks children on top of
/// each other — no axis is consumed sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
    Over,
}

/// Alignment of content within extra horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalGravity {
    #[default]
    Left,
    Center,
    Right,
}

/// Alignment of content within extra vertical space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalGravity {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Per-axis sizing policy for a child inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// A fixed extent, clamped to the remaining space.
    Absolute(u32),
    /// Offered the remaining space, consumes its measured size.
    WrapContent,
    /// Offered and consumes the remaining space.
    MatchParent,
    /// Deferred until all siblings are placed, then offered what is left on
    /// the main axis. At most one per container.
    FillRemaining,
}

/// A child node plus its width and height specs.
#[derive(Debug)]
pub struct LinearChild {
    pub node: LayoutNode,
    pub width: SizeSpec,
    pub height: SizeSpec,
}

impl LinearChild {
    pub fn new(node: impl Into<LayoutNode>, width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            node: node.into(),
            width,
            height,
        }
    }
}

/// A composite node arranging children along one axis.
#[derive(Debug)]
pub struct LinearBox {
    children: Vec<LinearChild>,
    orientation: Orientation,
    horizontal_gravity: HorizontalGravity,
    vertical_gravity: VerticalGravity,
    phase: Phase<Measured>,
}

/// Everything the measure pass records for the draw pass.
#[derive(Debug)]
struct Measured {
    available: Size,
    measured: Size,
    /// Per-child consumed extents, in child order.
    consumed: Vec<Size>,
}

impl LinearBox {
    pub fn new(orientation: Orientation, children: Vec<LinearChild>) -> Self {
        Self {
            children,
            orientation,
            horizontal_gravity: HorizontalGravity::Left,
            vertical_gravity: VerticalGravity::Top,
            phase: Phase::Uninitialized,
        }
    }

    /// A vertical container.
    pub fn column(children: Vec<LinearChild>) -> Self {
        Self::new(Orientation::Vertical, children)
    }

    /// A horizontal container.
    pub fn row(children: Vec<LinearChild>) -> Self {
        Self::new(Orientation::Horizontal, children)
    }

    /// An overlay container: children stack at the same origin.
    pub fn overlay(children: Vec<LinearChild>) -> Self {
        Self::new(Orientation::Over, children)
    }

    pub fn with_gravity(
        mut self,
        horizontal: HorizontalGravity,
        vertical: VerticalGravity,
    ) -> Self {
        self.horizontal_gravity = horizontal;
        self.vertical_gravity = vertical;
        self
    }

    pub(crate) fn init(
        &mut self,
        available: Size,
        shaper: &dyn TextShaper,
    ) -> Result<(), FolioError> {
        self.phase.ensure_uninitialized()?;
        let measured = self.measure_children(available, shaper)?;
        self.phase.initialize(measured)
    }

    /// The two-stage measure pass: place every non-fill child against the
    /// remaining space, then offer the fill child (if any) what is left.
    fn measure_children(
        &mut self,
        available: Size,
        shaper: &dyn TextShaper,
    ) -> Result<Measured, FolioError> {
        let orientation = self.orientation;
        let mut total = Size::ZERO;
        let mut consumed = vec![Size::ZERO; self.children.len()];
        let mut fill_index: Option<usize> = None;

        for index in 0..self.children.len() {
            place_child(
                &mut self.children[index],
                index,
                orientation,
                available,
                &mut total,
                &mut consumed,
                &mut fill_index,
                false,
                shaper,
            )?;
        }

        if let Some(index) = fill_index {
            place_child(
                &mut self.children[index],
                index,
                orientation,
                available,
                &mut total,
                &mut consumed,
                &mut fill_index,
                true,
                shaper,
            )?;
        }

        Ok(Measured {
            available,
            measured: total,
            consumed,
        })
    }

    pub(crate) fn measure_width(&self) -> Result<u32, FolioError> {
        Ok(self.phase.get()?.measured.width)
    }

    pub(crate) fn measure_height(&self) -> Result<u32, FolioError> {
        Ok(self.phase.get()?.measured.height)
    }

    pub(crate) fn draw<S: Surface>(
        &mut self,
        cursor: &mut Cursor<S>,
        wrap_width: bool,
        wrap_height: bool,
    ) -> Result<Size, FolioError> {
        let (available, measured, consumed) = {
            let data = self.phase.get()?;
            (data.available, data.measured, data.consumed.clone())
        };

        let total_width = if wrap_width {
            measured.width
        } else {
            available.width
        };
        let total_height = if wrap_height {
            measured.height
        } else {
            available.height
        };

        // One shift for the whole measured block inside the chosen box.
        let initial_dx = gravity_offset_x(self.horizontal_gravity, total_width, measured.width);
        let initial_dy = gravity_offset_y(self.vertical_gravity, total_height, measured.height);
        cursor.translate(initial_dx, initial_dy);

        for (child, child_consumed) in self.children.iter_mut().zip(consumed.iter().copied()) {
            cursor.push();

            // Cross-axis gravity; the main axis advances sequentially below.
            let dx = match self.orientation {
                Orientation::Horizontal => 0.0,
                _ => gravity_offset_x(
                    self.horizontal_gravity,
                    measured.width,
                    child_consumed.width,
                ),
            };
            let dy = match self.orientation {
                Orientation::Vertical => 0.0,
                _ => gravity_offset_y(
                    self.vertical_gravity,
                    measured.height,
                    child_consumed.height,
                ),
            };
            cursor.translate(dx, dy);

            child.node.draw(
                cursor,
                child.width == SizeSpec::WrapContent,
                child.height == SizeSpec::WrapContent,
            )?;

            cursor.pop();

            match self.orientation {
                Orientation::Horizontal => {
                    cursor.translate(f64::from(child_consumed.width), 0.0)
                }
                Orientation::Vertical => {
                    cursor.translate(0.0, f64::from(child_consumed.height))
                }
                Orientation::Over => {}
            }
        }

        Ok(Size::new(total_width, total_height))
    }

    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        for child in &mut self.children {
            child.node.destroy()?;
        }
        self.phase.destroy()
    }
}

fn gravity_offset_x(gravity: HorizontalGravity, outer: u32, inner: u32) -> f64 {
    match gravity {
        HorizontalGravity::Left => 0.0,
        HorizontalGravity::Center => f64::from(outer - inner) / 2.0,
        HorizontalGravity::Right => f64::from(outer - inner),
    }
}

fn gravity_offset_y(gravity: VerticalGravity, outer: u32, inner: u32) -> f64 {
    match gravity {
        VerticalGravity::Top => 0.0,
        VerticalGravity::Center => f64::from(outer - inner) / 2.0,
        VerticalGravity::Bottom => f64::from(outer - inner),
    }
}

/// Resolve one axis of a child's spec against the remaining extent.
///
/// Returns `None` when the spec is `FillRemaining` outside the fill pass:
/// the child is recorded in `fill_index` and skipped until every sibling
/// has consumed its share.
fn available_on_axis(
    spec: SizeSpec,
    remaining: u32,
    index: usize,
    is_main_axis: bool,
    fill_index: &mut Option<usize>,
    fill_pass: bool,
) -> Result<Option<u32>, FolioError> {
    match spec {
        SizeSpec::Absolute(value) => Ok(Some(remaining.min(value))),
        SizeSpec::WrapContent | SizeSpec::MatchParent => Ok(Some(remaining)),
        SizeSpec::FillRemaining => {
            if fill_pass {
                Ok(Some(remaining))
            } else {
                if fill_index.is_some() {
                    return Err(FolioError::DuplicateFillRemaining);
                }
                if !is_main_axis {
                    return Err(FolioError::FillRemainingOffAxis);
                }
                *fill_index = Some(index);
                Ok(None)
            }
        }
    }
}

/// Offer one child its available box, init it, and record what it consumed.
#[allow(clippy::too_many_arguments)]
fn place_child(
    child: &mut LinearChild,
    index: usize,
    orientation: Orientation,
    total_max: Size,
    total: &mut Size,
    consumed: &mut [Size],
    fill_index: &mut Option<usize>,
    fill_pass: bool,
    shaper: &dyn TextShaper,
) -> Result<(), FolioError> {
    let remaining_width = if orientation == Orientation::Horizontal {
        total_max.width - total.width
    } else {
        total_max.width
    };
    let remaining_height = if orientation == Orientation::Vertical {
        total_max.height - total.height
    } else {
        total_max.height
    };

    let available_width = available_on_axis(
        child.width,
        remaining_width,
        index,
        orientation == Orientation::Horizontal,
        fill_index,
        fill_pass,
    )?;
    let available_height = available_on_axis(
        child.height,
        remaining_height,
        index,
        orientation == Orientation::Vertical,
        fill_index,
        fill_pass,
    )?;

    let (Some(available_width), Some(available_height)) = (available_width, available_height)
    else {
        // Deferred to the fill pass.
        return Ok(());
    };

    child
        .node
        .init(Size::new(available_width, available_height), shaper)?;

    let consumed_width = if child.width == SizeSpec::WrapContent {
        available_width.min(child.node.measure_width()?)
    } else {
        available_width
    };
    total.width = if orientation == Orientation::Horizontal {
        total.width + consumed_width
    } else {
        total.width.max(consumed_width)
    };

    let consumed_height = if child.height == SizeSpec::WrapContent {
        available_height.min(child.node.measure_height()?)
    } else {
        available_height
    };
    total.height = if orientation == Orientation::Vertical {
        total.height + consumed_height
    } else {
        total.height.max(consumed_height)
    };

    consumed[index] = Size::new(consumed_width, consumed_height);
    Ok(())
}
