//! DOM implementation of [`VisualSurface`] built on `web-sys`.
//!
//! Produces this structure inside the two mount points:
//!
//! ```text
//! #toolbar
//!   select.page-selector
//!     option*            one per url
//! #checker
//!   div.device           padding-left / padding-right
//!     h1                 cell label
//!     div.wrapper
//!       iframe           width, height, src
//! ```
//!
//! Mount points are looked up by id on every call rather than cached, so a
//! missing container surfaces as [`SurfaceError::MissingMountPoint`] at the
//! point of use.  Frames and cells are likewise found by a structural query
//! each time, which means cells added or removed by other scripts are seen.

use checker_core::{CellSpec, MountPoints, RenderedSize};
use gloo::events::EventListener;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlIFrameElement, HtmlOptionElement, HtmlSelectElement};

use crate::application::surface::{SurfaceError, VisualSurface};

const FRAME_SELECTOR: &str = ".device iframe";
const CELL_SELECTOR: &str = ".device";

fn platform(err: JsValue) -> SurfaceError {
    SurfaceError::Platform(format!("{err:?}"))
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// A [`VisualSurface`] that renders into the live document.
pub struct DomSurface {
    document: Document,
    mount: MountPoints,
    selector: Option<HtmlSelectElement>,
    listeners: Vec<EventListener>,
}

impl DomSurface {
    pub fn new(document: Document, mount: MountPoints) -> Self {
        Self {
            document,
            mount,
            selector: None,
            listeners: Vec::new(),
        }
    }

    /// Calls `handler` with the newly selected URL whenever the page selector
    /// changes.
    ///
    /// The listener is detached when the surface is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Platform`] if the toolbar has not been mounted
    /// yet.
    pub fn on_toolbar_change<F>(&mut self, mut handler: F) -> Result<(), SurfaceError>
    where
        F: FnMut(String) + 'static,
    {
        let selector = self
            .selector
            .clone()
            .ok_or_else(|| SurfaceError::Platform("toolbar is not mounted".to_string()))?;

        let target = selector.clone();
        let listener = EventListener::new(&selector, "change", move |_event: &Event| {
            handler(target.value());
        });
        self.listeners.push(listener);
        Ok(())
    }

    fn mount_point(&self, id: &str) -> Result<HtmlElement, SurfaceError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingMountPoint(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::Platform(format!("#{id} is not an HTML element")))
    }

    fn create<T: JsCast>(&self, tag: &str) -> Result<T, SurfaceError> {
        self.document
            .create_element(tag)
            .map_err(platform)?
            .dyn_into::<T>()
            .map_err(|_| SurfaceError::Platform(format!("<{tag}> has an unexpected type")))
    }

    fn query_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<T>().ok())
            .collect()
    }
}

impl VisualSurface for DomSurface {
    type Frame = HtmlIFrameElement;

    fn container_client_height(&self) -> f64 {
        self.document
            .body()
            .map_or(0.0, |body| f64::from(body.client_height()))
    }

    fn mount_toolbar(&mut self, urls: &[String], selected: usize) -> Result<(), SurfaceError> {
        let toolbar = self.mount_point(&self.mount.toolbar_id)?;

        let selector: HtmlSelectElement = self.create("select")?;
        selector.set_class_name("page-selector");
        for url in urls {
            let option: HtmlOptionElement = self.create("option")?;
            option.set_value(url);
            option.set_text(url);
            selector.append_child(&option).map_err(platform)?;
        }
        if let Some(url) = urls.get(selected) {
            selector.set_value(url);
        }
        toolbar.append_child(&selector).map_err(platform)?;

        self.selector = Some(selector);
        Ok(())
    }

    fn append_cell(&mut self, cell: &CellSpec, padding: u32, src: &str) -> Result<(), SurfaceError> {
        let checker = self.mount_point(&self.mount.checker_id)?;

        let device: HtmlElement = self.create("div")?;
        device.set_class_name("device");
        let style = device.style();
        style
            .set_property("padding-left", &format!("{padding}px"))
            .map_err(platform)?;
        style
            .set_property("padding-right", &format!("{padding}px"))
            .map_err(platform)?;

        let header: Element = self.create("h1")?;
        header.set_text_content(Some(&cell.label));

        let wrapper: HtmlElement = self.create("div")?;
        wrapper.set_class_name("wrapper");

        let frame: HtmlIFrameElement = self.create("iframe")?;
        frame.set_width(&cell.width.to_string());
        frame.set_height(&cell.height.to_string());
        frame.set_src(src);

        wrapper.append_child(&frame).map_err(platform)?;
        device.append_child(&header).map_err(platform)?;
        device.append_child(&wrapper).map_err(platform)?;
        checker.append_child(&device).map_err(platform)?;
        Ok(())
    }

    fn frames(&self) -> Vec<HtmlIFrameElement> {
        self.query_all(FRAME_SELECTOR)
    }

    fn set_frame_src(&mut self, frame: &HtmlIFrameElement, src: &str) -> Result<(), SurfaceError> {
        frame.set_src(src);
        Ok(())
    }

    fn rendered_size(&self, frame: &HtmlIFrameElement) -> RenderedSize {
        RenderedSize {
            width: f64::from(frame.client_width()),
            height: f64::from(frame.client_height()),
        }
    }

    fn apply_scale(&mut self, frame: &HtmlIFrameElement, scale: f64) -> Result<(), SurfaceError> {
        let style = frame.style();
        style
            .set_property("transform-origin", "0 0")
            .map_err(platform)?;
        style
            .set_property("transform", &format!("scale({scale})"))
            .map_err(platform)
    }

    fn resize_wrapper(
        &mut self,
        frame: &HtmlIFrameElement,
        width: f64,
        height: f64,
    ) -> Result<(), SurfaceError> {
        let wrapper = frame
            .parent_element()
            .ok_or_else(|| SurfaceError::Platform("frame has no wrapper".to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::Platform("frame wrapper is not an HTML element".to_string()))?;
        let style = wrapper.style();
        style.set_property("width", &px(width)).map_err(platform)?;
        style.set_property("height", &px(height)).map_err(platform)
    }

    fn cell_outer_widths(&self) -> Vec<f64> {
        self.query_all::<HtmlElement>(CELL_SELECTOR)
            .iter()
            .map(|cell| f64::from(cell.client_width()))
            .collect()
    }

    fn set_container_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        let checker = self.mount_point(&self.mount.checker_id)?;
        debug!(width, "resizing cell container");
        checker
            .style()
            .set_property("width", &px(width))
            .map_err(platform)
    }
}
