//! Domain entities for the responsive checker.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from browser APIs, `web-sys`, or UI frameworks.
//! - Can be compiled and tested on any platform without a browser.
//!
//! Code in outer layers (the `checker-web` application and infrastructure)
//! depends on the domain, but the domain never depends on them.

/// Device profiles, selectors and the built-in catalog.
pub mod device;

/// Cell planning: one or two preview cells per device.
pub mod cell;

/// Scale arithmetic used to fit tall frames into the available height.
pub mod scale;
