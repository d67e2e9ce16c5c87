//! ResponsiveChecker: builds the preview grid and keeps every frame on the
//! selected URL.
//!
//! # Lifecycle
//!
//! 1. [`ResponsiveChecker::new`] validates the configuration and resolves the
//!    device list.  Nothing is drawn yet; an unknown device fails here.
//! 2. [`ResponsiveChecker::run`] adds the page selector to the toolbar, appends
//!    one cell per device (two per rotatable device) and runs the scale pass
//!    once.
//! 3. Later, each toolbar change calls [`ResponsiveChecker::select_url`], which
//!    points every frame currently on the surface at the new URL.
//!
//! The resolved device list is fixed after step 1.  Only the toolbar path
//! changes the active URL index; the scale pass never touches it.

use checker_core::{
    available_height, container_width, fit_frame, plan_cells, CheckerConfig, ConfigError,
    DeviceCatalog, DeviceProfile, ResolvedConfig,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::surface::{SurfaceError, VisualSurface};

/// Error type for checker operations.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("surface operation failed: {0}")]
    Surface(#[from] SurfaceError),

    /// The selected URL is not one of the configured URLs.
    #[error("url is not in the configured list: {0}")]
    UnknownUrl(String),

    #[error("url index {index} is out of range for {len} urls")]
    UrlIndexOutOfRange { index: usize, len: usize },
}

/// Mutable state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Index into the configured URLs of the page every frame shows.
    pub active_url_index: usize,
}

/// The checker controller.
///
/// Generic over the [`VisualSurface`] it draws on so the same logic runs
/// against the DOM in the browser and against a recording mock in tests.
pub struct ResponsiveChecker<S: VisualSurface> {
    urls: Vec<String>,
    devices: Vec<DeviceProfile>,
    padding: u32,
    state: RenderState,
    surface: S,
}

impl<S: VisualSurface> ResponsiveChecker<S> {
    /// Validates `config`, resolves its devices against `catalog` and takes
    /// ownership of `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Config`] for an empty URL list, an out-of-range
    /// default index, or an unknown device.
    pub fn new(config: &CheckerConfig, catalog: &DeviceCatalog, surface: S) -> Result<Self, CheckerError> {
        let resolved = config.resolve(catalog)?;
        Ok(Self::from_resolved(resolved, surface))
    }

    /// Creates a checker from an already resolved configuration.
    pub fn from_resolved(resolved: ResolvedConfig, surface: S) -> Self {
        Self {
            urls: resolved.urls,
            devices: resolved.devices,
            padding: resolved.padding,
            state: RenderState {
                active_url_index: resolved.default_index,
            },
            surface,
        }
    }

    /// Renders the toolbar and the cells, then fits them to the container.
    ///
    /// Call once.  A second call appends a second set of cells.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Surface`] if a mount point is missing or a
    /// platform call fails.
    pub fn run(&mut self) -> Result<(), CheckerError> {
        self.render_toolbar()?;
        self.render_cells()?;
        self.adjust_size()
    }

    fn render_toolbar(&mut self) -> Result<(), CheckerError> {
        self.surface
            .mount_toolbar(&self.urls, self.state.active_url_index)?;
        Ok(())
    }

    fn render_cells(&mut self) -> Result<(), CheckerError> {
        let index = self.state.active_url_index;
        let src = self.urls.get(index).ok_or(CheckerError::UrlIndexOutOfRange {
            index,
            len: self.urls.len(),
        })?;
        let cells = plan_cells(&self.devices);
        for cell in &cells {
            self.surface.append_cell(cell, self.padding, src)?;
        }
        info!(
            devices = self.devices.len(),
            cells = cells.len(),
            url = %src,
            "device cells rendered"
        );
        Ok(())
    }

    /// Shrinks every frame taller than the available height and widens the
    /// container to hold all cells on one row.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Surface`] if a platform call fails.
    pub fn adjust_size(&mut self) -> Result<(), CheckerError> {
        let available = available_height(self.surface.container_client_height());
        if available <= 0.0 {
            warn!(available, "container too short; frames will get a non-positive scale");
        }

        for frame in self.surface.frames() {
            let size = self.surface.rendered_size(&frame);
            let Some(fit) = fit_frame(size.width, size.height, available) else {
                continue;
            };
            debug!(
                width = size.width,
                height = size.height,
                scale = fit.scale,
                "scaling frame"
            );
            self.surface.apply_scale(&frame, fit.scale)?;
            self.surface
                .resize_wrapper(&frame, fit.wrapper_width, fit.wrapper_height)?;
        }

        let widths = self.surface.cell_outer_widths();
        for (cell, width) in widths.iter().enumerate() {
            debug!(cell, width, "cell outer width");
        }
        let total = container_width(widths);
        debug!(total, "container width");
        self.surface.set_container_width(total)?;
        Ok(())
    }

    /// Switches every frame currently on the surface to the URL at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::UrlIndexOutOfRange`] without changing anything
    /// if `index` is past the end of the URL list.
    pub fn select_index(&mut self, index: usize) -> Result<(), CheckerError> {
        let Some(url) = self.urls.get(index) else {
            return Err(CheckerError::UrlIndexOutOfRange {
                index,
                len: self.urls.len(),
            });
        };

        self.state.active_url_index = index;
        let frames = self.surface.frames();
        for frame in &frames {
            self.surface.set_frame_src(frame, url)?;
        }
        info!(index, url = %url, frames = frames.len(), "switched page");
        Ok(())
    }

    /// Switches every frame currently on the surface to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::UnknownUrl`] without changing anything if `url`
    /// is not one of the configured URLs.
    pub fn select_url(&mut self, url: &str) -> Result<(), CheckerError> {
        let index = self
            .urls
            .iter()
            .position(|u| u == url)
            .ok_or_else(|| CheckerError::UnknownUrl(url.to_string()))?;
        self.select_index(index)
    }

    /// Index into the configured URLs of the page every frame shows.
    pub fn active_url_index(&self) -> usize {
        self.state.active_url_index
    }

    /// The URL every frame currently shows.
    pub fn active_url(&self) -> &str {
        self.urls
            .get(self.state.active_url_index)
            .map_or("", String::as_str)
    }

    /// Snapshot of the controller state.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// The configured URLs, in selector order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// The resolved device list, in render order.
    pub fn devices(&self) -> &[DeviceProfile] {
        &self.devices
    }

    /// Horizontal padding applied on each side of every cell, in pixels.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// The surface the checker draws on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to attach platform listeners.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::surface::MockVisualSurface;
    use checker_core::{DeviceProfile, RenderedSize};
    use mockall::predicate::eq;

    fn make_checker(surface: MockVisualSurface) -> ResponsiveChecker<MockVisualSurface> {
        let config = CheckerConfig::new(["https://a.test/", "https://b.test/", "https://c.test/"])
            .with_devices([DeviceProfile::new("Phone", 320, 568)])
            .with_padding(15);
        ResponsiveChecker::new(&config, &DeviceCatalog::builtin(), surface).expect("valid config")
    }

    #[test]
    fn test_new_with_unknown_device_fails_before_touching_surface() {
        // Arrange: a mock with no expectations panics on any call.
        let surface = MockVisualSurface::new();
        let config = CheckerConfig::new(["a"]).with_devices(["Commodore 64"]);

        // Act
        let result = ResponsiveChecker::new(&config, &DeviceCatalog::builtin(), surface);

        // Assert
        assert!(matches!(result, Err(CheckerError::Config(_))));
    }

    #[test]
    fn test_adjust_size_leaves_fitting_frame_untouched() {
        // Arrange
        let mut surface = MockVisualSurface::new();
        surface.expect_container_client_height().return_const(900.0);
        surface.expect_frames().returning(|| vec![0]);
        surface
            .expect_rendered_size()
            .returning(|_| RenderedSize { width: 320.0, height: 568.0 });
        surface.expect_apply_scale().never();
        surface.expect_resize_wrapper().never();
        surface.expect_cell_outer_widths().returning(|| vec![350.0]);
        surface
            .expect_set_container_width()
            .with(eq(352.0))
            .times(1)
            .returning(|_| Ok(()));
        let mut checker = make_checker(surface);

        // Act / Assert
        checker.adjust_size().expect("adjust");
    }

    #[test]
    fn test_adjust_size_scales_tall_frame_to_truncated_factor() {
        // Arrange: 408 - 75 = 333px available for a 1000px tall frame.
        let mut surface = MockVisualSurface::new();
        surface.expect_container_client_height().return_const(408.0);
        surface.expect_frames().returning(|| vec![7]);
        surface
            .expect_rendered_size()
            .returning(|_| RenderedSize { width: 600.0, height: 1000.0 });
        surface
            .expect_apply_scale()
            .with(eq(7), eq(0.33))
            .times(1)
            .returning(|_, _| Ok(()));
        surface
            .expect_resize_wrapper()
            .withf(|frame, width, height| *frame == 7 && *width == 600.0 * 0.33 && *height == 333.0)
            .times(1)
            .returning(|_, _, _| Ok(()));
        surface.expect_cell_outer_widths().returning(|| vec![228.0]);
        surface
            .expect_set_container_width()
            .with(eq(230.0))
            .times(1)
            .returning(|_| Ok(()));
        let mut checker = make_checker(surface);

        // Act / Assert
        checker.adjust_size().expect("adjust");
    }

    #[test]
    fn test_adjust_size_propagates_surface_error() {
        let mut surface = MockVisualSurface::new();
        surface.expect_container_client_height().return_const(900.0);
        surface.expect_frames().returning(Vec::new);
        surface.expect_cell_outer_widths().returning(Vec::new);
        surface
            .expect_set_container_width()
            .returning(|_| Err(SurfaceError::MissingMountPoint("checker".to_string())));
        let mut checker = make_checker(surface);

        let result = checker.adjust_size();

        assert!(matches!(
            result,
            Err(CheckerError::Surface(SurfaceError::MissingMountPoint(_)))
        ));
    }

    #[test]
    fn test_select_index_updates_every_frame_and_state() {
        // Arrange
        let mut surface = MockVisualSurface::new();
        surface.expect_frames().returning(|| vec![0, 1, 2]);
        surface
            .expect_set_frame_src()
            .withf(|_, src| src == "https://c.test/")
            .times(3)
            .returning(|_, _| Ok(()));
        let mut checker = make_checker(surface);

        // Act
        checker.select_index(2).expect("select");

        // Assert
        assert_eq!(checker.active_url_index(), 2);
        assert_eq!(checker.active_url(), "https://c.test/");
    }

    #[test]
    fn test_select_index_out_of_range_changes_nothing() {
        let mut surface = MockVisualSurface::new();
        surface.expect_frames().never();
        let mut checker = make_checker(surface);

        let result = checker.select_index(3);

        assert!(matches!(
            result,
            Err(CheckerError::UrlIndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(checker.active_url_index(), 0);
    }

    #[test]
    fn test_select_url_unknown_changes_nothing() {
        let mut surface = MockVisualSurface::new();
        surface.expect_frames().never();
        let mut checker = make_checker(surface);

        let result = checker.select_url("https://elsewhere.test/");

        assert!(matches!(result, Err(CheckerError::UnknownUrl(_))));
        assert_eq!(checker.active_url_index(), 0);
    }
}
