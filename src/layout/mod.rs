//! # Layout Nodes
//!
//! Every piece of drawable content is a node with the same two-pass
//! lifecycle:
//!
//! 1. `init(available)` — the node is told the box it may occupy. Expensive
//!    work (text shaping, child measurement) happens here, once.
//! 2. `measure_width()` / `measure_height()` — the node reports its
//!    intrinsic (wrap) size, never larger than the available box.
//! 3. `draw(cursor, wrap_width, wrap_height)` — the node issues drawing
//!    calls relative to the cursor origin, at its wrap size where the flags
//!    say so and at the full available size elsewhere, and returns the size
//!    it actually consumed.
//! 4. `destroy()` — measurement state is released; the node is inert and
//!    must not be reused.
//!
//! The node set is closed: [`LayoutNode`] enumerates every kind and
//! dispatches the contract exhaustively, so call sites never depend on
//! open-ended polymorphism. Lifecycle misuse — measuring before `init`,
//! initializing twice, touching a destroyed node — is a typed error, not a
//! panic.

pub mod fill;
pub mod image;
pub mod linear;
pub mod space;
pub mod text;

pub use fill::FillBox;
pub use image::ImageBox;
pub use linear::{
    HorizontalGravity, LinearBox, LinearChild, Orientation, SizeSpec, VerticalGravity,
};
pub use space::Space;
pub use text::TextBox;

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::model::Size;
use crate::surface::Surface;
use crate::text::TextShaper;

/// The three-state lifecycle of a node's per-build data.
///
/// `T` is whatever the node computes at `init` and needs through measure and
/// draw. It only exists while the node is initialized, so stale measurement
/// state cannot outlive a use cycle.
#[derive(Debug)]
pub(crate) enum Phase<T> {
    Uninitialized,
    Initialized(T),
    Destroyed,
}

impl<T> Phase<T> {
    /// Fails unless the node has never been initialized. Containers call
    /// this before touching their children so a misuse error surfaces
    /// before any child work happens.
    pub(crate) fn ensure_uninitialized(&self) -> Result<(), FolioError> {
        match self {
            Phase::Uninitialized => Ok(()),
            Phase::Initialized(_) => Err(FolioError::AlreadyInitialized),
            Phase::Destroyed => Err(FolioError::NodeDestroyed),
        }
    }

    /// Transition Uninitialized → Initialized.
    pub(crate) fn initialize(&mut self, data: T) -> Result<(), FolioError> {
        self.ensure_uninitialized()?;
        *self = Phase::Initialized(data);
        Ok(())
    }

    /// Access the initialized data, or the appropriate lifecycle error.
    pub(crate) fn get(&self) -> Result<&T, FolioError> {
        match self {
            Phase::Initialized(data) => Ok(data),
            Phase::Uninitialized => Err(FolioError::NotInitialized),
            Phase::Destroyed => Err(FolioError::NodeDestroyed),
        }
    }

    pub(crate) fn get_mut(&mut self) -> Result<&mut T, FolioError> {
        match self {
            Phase::Initialized(data) => Ok(data),
            Phase::Uninitialized => Err(FolioError::NotInitialized),
            Phase::Destroyed => Err(FolioError::NodeDestroyed),
        }
    }

    /// Transition to Destroyed from either live state. Destroying twice is
    /// an error.
    pub(crate) fn destroy(&mut self) -> Result<(), FolioError> {
        match self {
            Phase::Destroyed => Err(FolioError::NodeDestroyed),
            _ => {
                *self = Phase::Destroyed;
                Ok(())
            }
        }
    }
}

impl<T> Default for Phase<T> {
    fn default() -> Self {
        Phase::Uninitialized
    }
}

/// A layout element. The closed set of node kinds behind the measure/draw
/// contract.
#[derive(Debug)]
pub enum LayoutNode {
    /// A solid-color rectangle covering its available box.
    Fill(FillBox),
    /// An image stretched to its available box.
    Image(ImageBox),
    /// A zero-size placeholder.
    Space(Space),
    /// A shaped, aligned text block.
    Text(TextBox),
    /// A container arranging children along one axis.
    Linear(LinearBox),
}

impl LayoutNode {
    /// Establish the bounding box the node may measure and draw against.
    pub fn init(&mut self, available: Size, shaper: &dyn TextShaper) -> Result<(), FolioError> {
        match self {
            LayoutNode::Fill(node) => node.init(available),
            LayoutNode::Image(node) => node.init(available),
            LayoutNode::Space(node) => node.init(available),
            LayoutNode::Text(node) => node.init(available, shaper),
            LayoutNode::Linear(node) => node.init(available, shaper),
        }
    }

    /// The node's intrinsic width, capped by the available box.
    pub fn measure_width(&mut self) -> Result<u32, FolioError> {
        match self {
            LayoutNode::Fill(node) => node.measure_width(),
            LayoutNode::Image(node) => node.measure_width(),
            LayoutNode::Space(node) => node.measure_width(),
            LayoutNode::Text(node) => node.measure_width(),
            LayoutNode::Linear(node) => node.measure_width(),
        }
    }

    /// The node's intrinsic height, capped by the available box.
    pub fn measure_height(&mut self) -> Result<u32, FolioError> {
        match self {
            LayoutNode::Fill(node) => node.measure_height(),
            LayoutNode::Image(node) => node.measure_height(),
            LayoutNode::Space(node) => node.measure_height(),
            LayoutNode::Text(node) => node.measure_height(),
            LayoutNode::Linear(node) => node.measure_height(),
        }
    }

    /// Issue drawing calls at the cursor origin and return the consumed
    /// size. `wrap_width`/`wrap_height` choose the intrinsic size over the
    /// full available size per axis.
    pub fn draw<S: Surface>(
        &mut self,
        cursor: &mut Cursor<S>,
        wrap_width: bool,
        wrap_height: bool,
    ) -> Result<Size, FolioError> {
        match self {
            LayoutNode::Fill(node) => node.draw(cursor, wrap_width, wrap_height),
            LayoutNode::Image(node) => node.draw(cursor, wrap_width, wrap_height),
            LayoutNode::Space(node) => node.draw(cursor, wrap_width, wrap_height),
            LayoutNode::Text(node) => node.draw(cursor, wrap_width, wrap_height),
            LayoutNode::Linear(node) => node.draw(cursor, wrap_width, wrap_height),
        }
    }

    /// Release measurement state. The node must not be used afterwards.
    pub fn destroy(&mut self) -> Result<(), FolioError> {
        match self {
            LayoutNode::Fill(node) => node.destroy(),
            LayoutNode::Image(node) => node.destroy(),
            LayoutNode::Space(node) => node.destroy(),
            LayoutNode::Text(node) => node.destroy(),
            LayoutNode::Linear(node) => node.destroy(),
        }
    }
}

impl From<FillBox> for LayoutNode {
    fn from(node: FillBox) -> Self {
        LayoutNode::Fill(node)
    }
}

impl From<ImageBox> for LayoutNode {
    fn from(node: ImageBox) -> Self {
        LayoutNode::Image(node)
    }
}

impl From<Space> for LayoutNode {
    fn from(node: Space) -> Self {
        LayoutNode::Space(node)
    }
}

impl From<TextBox> for LayoutNode {
    fn from(node: TextBox) -> Self {
        LayoutNode::Text(node)
    }
}

impl From<LinearBox> for LayoutNode {
    fn from(node: LinearBox) -> Self {
        LayoutNode::Linear(node)
    }
}
