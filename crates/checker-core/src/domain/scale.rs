//! Scale arithmetic for fitting frames into the available height.
//!
//! After the cells are laid out, frames taller than the space below the
//! toolbar are shrunk uniformly.  The scale factor is truncated (never rounded
//! up) to two decimal places so the scaled frame can never end up taller than
//! the space it has to fit in.
//!
//! # Worked example
//!
//! ```
//! use checker_core::fit_frame;
//!
//! // A 768×1000 frame in 333px of available height:
//! // floor(333 / 1000 * 100) / 100 = 0.33
//! let fit = fit_frame(768.0, 1000.0, 333.0).unwrap();
//! assert_eq!(fit.scale, 0.33);
//! assert_eq!(fit.wrapper_height, 333.0);
//! ```

/// Vertical space reserved for the toolbar and cell header, in pixels.
pub const CHROME_ALLOWANCE: f64 = 75.0;

/// Extra pixels added to the container width so the last cell never wraps.
pub const CONTAINER_SLACK: f64 = 2.0;

/// A frame's size after layout, before any scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedSize {
    pub width: f64,
    pub height: f64,
}

/// The adjustment to apply to a frame that does not fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFit {
    /// Uniform scale factor, truncated to two decimal places.
    pub scale: f64,
    /// New wrapper width: rendered width × scale.
    pub wrapper_width: f64,
    /// New wrapper height: exactly the available height.
    pub wrapper_height: f64,
}

/// Returns the height available to frames inside a container of
/// `client_height` pixels.
///
/// May be zero or negative for very short containers.
pub fn available_height(client_height: f64) -> f64 {
    client_height - CHROME_ALLOWANCE
}

/// Returns `floor((available / rendered_height) * 100) / 100`.
pub fn truncated_scale(available: f64, rendered_height: f64) -> f64 {
    ((available / rendered_height) * 100.0).floor() / 100.0
}

/// Computes the adjustment for one frame, or `None` when the frame already fits.
///
/// The wrapper height is set to `available` itself rather than
/// `rendered_height * scale`, which leaves no sub-pixel gap below the frame.
///
/// A non-positive `available` produces a zero or negative scale; callers get
/// that value unchanged.
pub fn fit_frame(rendered_width: f64, rendered_height: f64, available: f64) -> Option<FrameFit> {
    if rendered_height <= available {
        return None;
    }
    let scale = truncated_scale(available, rendered_height);
    Some(FrameFit {
        scale,
        wrapper_width: rendered_width * scale,
        wrapper_height: available,
    })
}

/// Returns the container width needed to hold every cell on one row.
pub fn container_width<I>(cell_widths: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    cell_widths.into_iter().sum::<f64>() + CONTAINER_SLACK
}

// ── Tests ─────────────────────────────────────────────────────────────────────
