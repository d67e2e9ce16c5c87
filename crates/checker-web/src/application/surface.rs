//! The visual surface the checker draws on.
//!
//! # Why a trait? (for beginners)
//!
//! In the browser the checker creates `<div>`s and `<iframe>`s and reads their
//! rendered sizes back.  None of that exists in a unit test.  The
//! [`VisualSurface`] trait lists exactly the operations the checker needs, so
//! the DOM implementation (`infrastructure::dom`) and the recording mock
//! (`infrastructure::mock`) can be swapped without touching the controller.

use checker_core::{CellSpec, RenderedSize};
use thiserror::Error;

/// Error type for surface operations.
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    /// A container element the checker renders into does not exist.
    #[error("mount point not found: #{0}")]
    MissingMountPoint(String),

    /// The underlying platform call failed.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Operations the checker performs on whatever displays it.
///
/// `Frame` is a handle to one embedded page frame.  Handles are obtained from
/// [`VisualSurface::frames`] at the moment they are needed; the checker never
/// keeps them between calls.
#[cfg_attr(test, mockall::automock(type Frame = usize;))]
pub trait VisualSurface {
    /// Handle to one page frame.
    type Frame;

    /// Height in pixels of the area the cells are laid out in.
    fn container_client_height(&self) -> f64;

    /// Adds the page selector to the toolbar, listing `urls` with `selected`
    /// chosen.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingMountPoint`] if the toolbar container is absent.
    fn mount_toolbar(&mut self, urls: &[String], selected: usize) -> Result<(), SurfaceError>;

    /// Appends one cell: a header with `cell.label` above a frame of
    /// `cell.width` × `cell.height` loading `src`, padded by `padding` pixels
    /// on the left and right.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingMountPoint`] if the cell container is absent.
    fn append_cell(&mut self, cell: &CellSpec, padding: u32, src: &str) -> Result<(), SurfaceError>;

    /// Returns every frame currently present, in document order.
    fn frames(&self) -> Vec<Self::Frame>;

    /// Points `frame` at a new URL.
    fn set_frame_src(&mut self, frame: &Self::Frame, src: &str) -> Result<(), SurfaceError>;

    /// Reads the size `frame` was laid out at, ignoring any scale transform.
    fn rendered_size(&self, frame: &Self::Frame) -> RenderedSize;

    /// Applies a uniform 2D scale to `frame`.
    fn apply_scale(&mut self, frame: &Self::Frame, scale: f64) -> Result<(), SurfaceError>;

    /// Sets the size of the element wrapping `frame`.
    fn resize_wrapper(
        &mut self,
        frame: &Self::Frame,
        width: f64,
        height: f64,
    ) -> Result<(), SurfaceError>;

    /// Returns the outer width of every cell currently present, in document order.
    fn cell_outer_widths(&self) -> Vec<f64>;

    /// Sets the width of the cell container.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingMountPoint`] if the cell container is absent.
    fn set_container_width(&mut self, width: f64) -> Result<(), SurfaceError>;
}
