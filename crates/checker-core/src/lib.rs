//! # checker-core
//!
//! Shared library for the responsive checker containing the device catalog,
//! the configuration schema, cell planning and the scale arithmetic.
//!
//! This crate is used by the web front end (`checker-web`).
//! It has zero dependencies on the DOM, `wasm-bindgen`, or any browser API.
//!
//! # Architecture overview (for beginners)
//!
//! The responsive checker previews one page at several device sizes side by
//! side.  Each device becomes one *cell* (or two cells for devices that can be
//! rotated): a header label plus an embedded frame sized to the device.  When
//! a cell is taller than the window, the frame is shrunk uniformly so every
//! cell fits vertically.
//!
//! This crate (`checker-core`) is the pure foundation.  It defines:
//!
//! - **`domain`** – Business rules with no browser dependencies: the built-in
//!   [`DeviceCatalog`], how [`DeviceSelector`]s resolve to [`DeviceProfile`]s,
//!   how profiles become [`CellSpec`]s, and how a frame's scale factor is
//!   computed.
//!
//! - **`config`** – The [`CheckerConfig`] option bag, loaded from TOML or from
//!   the JSON object a JavaScript caller passes in, plus validation.

pub mod config;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `checker_core::DeviceCatalog` instead of `checker_core::domain::device::DeviceCatalog`.
pub use config::{CheckerConfig, ConfigError, MountPoints, ResolvedConfig};
pub use domain::cell::{plan_cells, CellSpec, Orientation};
pub use domain::device::{builtin_catalog, DeviceCatalog, DeviceProfile, DeviceSelector, ResolveError};
pub use domain::scale::{available_height, container_width, fit_frame, FrameFit, RenderedSize};
