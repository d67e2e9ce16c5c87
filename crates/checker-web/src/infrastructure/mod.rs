//! Infrastructure layer for the web front end.
//!
//! Contains the platform-facing adapters: the DOM implementation of
//! [`VisualSurface`](crate::application::surface::VisualSurface), a recording
//! mock of it, and logging setup.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `checker_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`dom`** – `web-sys` surface that creates the toolbar selector, the
//!   device cells and their frames, and reads rendered sizes back.  Only
//!   compiled for `wasm32`.
//!
//! - **`mock`** – `MockSurface`, always compiled so tests on any platform can
//!   run the checker end to end.
//!
//! - **`logging`** – `tracing-subscriber` initialisation; on `wasm32` the
//!   output goes to the browser console.

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub mod logging;
pub mod mock;
