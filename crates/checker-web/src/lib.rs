//! checker-web library crate.
//!
//! The browser front end of the responsive checker.  Given a list of page URLs
//! and device profiles it renders one preview cell per device (two for
//! rotatable devices) into the page, a selector that switches every preview to
//! another URL at once, and shrinks any preview that is taller than the window.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! JavaScript host page  (#toolbar, #checker)
//!         ↕
//! [checker-web]
//!   ├── application/      ResponsiveChecker controller + VisualSurface trait
//!   ├── infrastructure/
//!   │     ├── dom/        web-sys VisualSurface (wasm32 only)
//!   │     ├── mock/       recording VisualSurface for tests
//!   │     └── logging/    tracing-subscriber setup
//!   └── wasm/             wasm-bindgen export (wasm32 only)
//!         ↕
//! [checker-core]          catalog, config, cell planning, scale arithmetic
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `checker-core` and the `VisualSurface` trait only.
//! - `infrastructure` implements `VisualSurface` and may use `web-sys`.
//! - `wasm` wires the two together for JavaScript callers.

/// Application layer: the controller and the surface abstraction.
pub mod application;

/// Infrastructure layer: DOM and mock surfaces, logging.
pub mod infrastructure;

/// JavaScript entry point.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use application::checker::{CheckerError, RenderState, ResponsiveChecker};
pub use application::surface::{SurfaceError, VisualSurface};
