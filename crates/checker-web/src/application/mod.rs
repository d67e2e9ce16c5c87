//! Application layer for the web front end.
//!
//! # What use cases does the checker have?
//!
//! - **`checker`** – Builds the toolbar and the device cells, runs the one-off
//!   scale pass, and switches every frame to a new URL when the toolbar
//!   selection changes.  All drawing goes through a [`surface::VisualSurface`]
//!   injected at construction time.
//!
//! - **`surface`** – The [`surface::VisualSurface`] trait: the handful of
//!   operations the checker needs from whatever displays it (create a cell,
//!   set a frame source, read a rendered size, scale, resize).

pub mod checker;
pub mod surface;
