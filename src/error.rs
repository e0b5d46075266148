//! Structured error types for the composition engine.
//!
//! Every failure aborts the in-progress build: lifecycle misuse and container
//! configuration problems are programmer errors, and an oversized content item
//! is unrecoverable because the flow controller never splits a node across
//! pages. Nothing here is retried internally.

use thiserror::Error;

/// The unified error type returned by all public folio API functions.
#[derive(Debug, Error)]
pub enum FolioError {
    /// `init` was called on a node that is already initialized.
    #[error("layout node is already initialized")]
    AlreadyInitialized,

    /// `measure_width`, `measure_height`, or `draw` was called before `init`.
    #[error("layout node must be initialized before measuring or drawing")]
    NotInitialized,

    /// A destroyed node was initialized, measured, drawn, or destroyed again.
    #[error("layout node has already been destroyed")]
    NodeDestroyed,

    /// A container was given more than one `FillRemaining` child.
    #[error("only one child per container may use SizeSpec::FillRemaining")]
    DuplicateFillRemaining,

    /// `FillRemaining` was requested on an axis other than the container's
    /// main axis (including any axis of an `Over` container).
    #[error("SizeSpec::FillRemaining is only valid on the container's main axis")]
    FillRemainingOffAxis,

    /// A content item is taller than a full fresh page body and can never be
    /// placed. The flow controller does not split nodes across pages.
    #[error("content item of height {required} cannot fit a page body of height {available}")]
    ContentTooTall { required: u32, available: u32 },

    /// An image source could not be resolved to a drawable handle.
    #[error("image error: {0}")]
    Image(String),
}
