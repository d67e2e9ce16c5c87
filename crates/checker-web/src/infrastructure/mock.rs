//! Recording visual surface for tests.
//!
//! # Why a mock surface?
//!
//! The DOM surface needs a browser: it creates real elements and asks the
//! layout engine how big they turned out.  `MockSurface` keeps the toolbar and
//! cells in plain vectors instead, so tests can run the whole checker on any
//! platform and then inspect exactly what was built, scaled and resized.
//!
//! Rendered sizes default to the declared frame size, which is what a browser
//! reports for a borderless frame before any transform.  Individual sizes can
//! be overridden with [`MockSurface::set_rendered_size`].
//!
//! # Usage in tests
//!
//! ```
//! use checker_core::{CheckerConfig, DeviceCatalog};
//! use checker_web::infrastructure::mock::MockSurface;
//! use checker_web::ResponsiveChecker;
//!
//! let config = CheckerConfig::new(["https://example.com/"]).with_devices(["iPhone 5"]);
//! let mut checker =
//!     ResponsiveChecker::new(&config, &DeviceCatalog::builtin(), MockSurface::new(900.0)).unwrap();
//! checker.run().unwrap();
//!
//! assert_eq!(checker.surface().cells.len(), 1);
//! ```
//!
//! # Missing mount points
//!
//! Set `toolbar_mounted` or `checker_mounted` to `false` to make the
//! corresponding calls fail with [`SurfaceError::MissingMountPoint`].

use checker_core::{CellSpec, RenderedSize};

use crate::application::surface::{SurfaceError, VisualSurface};

/// The page selector as built by [`VisualSurface::mount_toolbar`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockToolbar {
    pub options: Vec<String>,
    pub selected: usize,
}

/// One recorded cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCell {
    pub label: String,
    pub padding: u32,
    /// Declared frame width.
    pub width: u32,
    /// Declared frame height.
    pub height: u32,
    /// Current frame source.
    pub src: String,
    /// Size reported by `rendered_size`; defaults to the declared size.
    pub rendered: RenderedSize,
    /// Scale applied by `apply_scale`, if any.
    pub scale: Option<f64>,
    /// Wrapper size set by `resize_wrapper`, if any.
    pub wrapper: Option<(f64, f64)>,
}

impl MockCell {
    /// Outer width: padding on both sides plus the wrapper (or frame) width.
    pub fn outer_width(&self) -> f64 {
        let inner = self.wrapper.map_or(self.rendered.width, |(w, _)| w);
        inner + 2.0 * f64::from(self.padding)
    }
}

/// A surface that records every call in memory.
///
/// Frame handles are indices into [`MockSurface::cells`].
#[derive(Debug, Clone)]
pub struct MockSurface {
    /// Value returned by `container_client_height`.
    pub client_height: f64,
    pub toolbar: Option<MockToolbar>,
    pub cells: Vec<MockCell>,
    /// Width set by `set_container_width`, if any.
    pub container_width: Option<f64>,
    pub toolbar_mounted: bool,
    pub checker_mounted: bool,
    /// Number of `set_frame_src` calls so far.
    pub src_updates: usize,
}

impl MockSurface {
    /// Creates an empty surface whose container is `client_height` pixels tall.
    pub fn new(client_height: f64) -> Self {
        Self {
            client_height,
            toolbar: None,
            cells: Vec::new(),
            container_width: None,
            toolbar_mounted: true,
            checker_mounted: true,
            src_updates: 0,
        }
    }

    /// Overrides the size reported for the frame in cell `index`.
    pub fn set_rendered_size(&mut self, index: usize, width: f64, height: f64) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.rendered = RenderedSize { width, height };
        }
    }

    /// Removes cell `index`, as if another script had deleted it from the page.
    pub fn remove_cell(&mut self, index: usize) -> MockCell {
        self.cells.remove(index)
    }

    /// Labels of all cells in order.
    pub fn labels(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.label.as_str()).collect()
    }

    fn cell_mut(&mut self, frame: usize) -> Result<&mut MockCell, SurfaceError> {
        self.cells
            .get_mut(frame)
            .ok_or_else(|| SurfaceError::Platform(format!("no frame at index {frame}")))
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new(900.0)
    }
}

impl VisualSurface for MockSurface {
    type Frame = usize;

    fn container_client_height(&self) -> f64 {
        self.client_height
    }

    fn mount_toolbar(&mut self, urls: &[String], selected: usize) -> Result<(), SurfaceError> {
        if !self.toolbar_mounted {
            return Err(SurfaceError::MissingMountPoint("toolbar".to_string()));
        }
        self.toolbar = Some(MockToolbar {
            options: urls.to_vec(),
            selected,
        });
        Ok(())
    }

    fn append_cell(&mut self, cell: &CellSpec, padding: u32, src: &str) -> Result<(), SurfaceError> {
        if !self.checker_mounted {
            return Err(SurfaceError::MissingMountPoint("checker".to_string()));
        }
        self.cells.push(MockCell {
            label: cell.label.clone(),
            padding,
            width: cell.width,
            height: cell.height,
            src: src.to_string(),
            rendered: RenderedSize {
                width: f64::from(cell.width),
                height: f64::from(cell.height),
            },
            scale: None,
            wrapper: None,
        });
        Ok(())
    }

    fn frames(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }

    fn set_frame_src(&mut self, frame: &usize, src: &str) -> Result<(), SurfaceError> {
        self.cell_mut(*frame)?.src = src.to_string();
        self.src_updates += 1;
        Ok(())
    }

    fn rendered_size(&self, frame: &usize) -> RenderedSize {
        self.cells
            .get(*frame)
            .map_or(RenderedSize { width: 0.0, height: 0.0 }, |c| c.rendered)
    }

    fn apply_scale(&mut self, frame: &usize, scale: f64) -> Result<(), SurfaceError> {
        self.cell_mut(*frame)?.scale = Some(scale);
        Ok(())
    }

    fn resize_wrapper(&mut self, frame: &usize, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.cell_mut(*frame)?.wrapper = Some((width, height));
        Ok(())
    }

    fn cell_outer_widths(&self) -> Vec<f64> {
        self.cells.iter().map(MockCell::outer_width).collect()
    }

    fn set_container_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        if !self.checker_mounted {
            return Err(SurfaceError::MissingMountPoint("checker".to_string()));
        }
        self.container_width = Some(width);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
