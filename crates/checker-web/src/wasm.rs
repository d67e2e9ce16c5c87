//! JavaScript entry point.
//!
//! Exposes the checker to the host page as a `ResponsiveChecker` class that
//! takes the same options bag as the original script:
//!
//! ```js
//! const checker = new ResponsiveChecker({
//!   urls: ["https://example.com/", "https://example.com/pricing"],
//!   defaultIndex: 0,
//!   devices: ["iPhone 6", "iPad", { name: "Kiosk", width: 1080, height: 1920 }],
//!   padding: 15,
//! });
//! checker.run();
//! ```
//!
//! The page must contain `#toolbar` and `#checker` (or the ids given in
//! `options.mount`) by the time `run()` is called.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use checker_core::{builtin_catalog, CheckerConfig};
use js_sys::{Array, JSON};
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::application::checker::ResponsiveChecker;
use crate::infrastructure::dom::DomSurface;
use crate::infrastructure::logging::init_logging;

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

fn parse_options(options: &JsValue) -> anyhow::Result<CheckerConfig> {
    let text = JSON::stringify(options)
        .map_err(|e| anyhow!("options are not serializable: {e:?}"))?
        .as_string()
        .context("options must be an object")?;
    CheckerConfig::from_json_str(&text).context("invalid checker options")
}

/// The checker as seen from JavaScript.
#[wasm_bindgen(js_name = ResponsiveChecker)]
pub struct WebChecker {
    inner: Rc<RefCell<ResponsiveChecker<DomSurface>>>,
}

#[wasm_bindgen(js_class = ResponsiveChecker)]
impl WebChecker {
    /// Parses and validates `options` and resolves the device list.
    ///
    /// Throws on an unknown device, an empty `urls` list or an out-of-range
    /// `defaultIndex`.  Nothing is drawn until [`WebChecker::run`].
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WebChecker, JsValue> {
        let config = parse_options(&options).map_err(to_js)?;
        init_logging(&config.log_level);

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let surface = DomSurface::new(document, config.mount.clone());
        let checker = ResponsiveChecker::new(&config, builtin_catalog(), surface)
            .context("failed to create checker")
            .map_err(to_js)?;

        Ok(Self {
            inner: Rc::new(RefCell::new(checker)),
        })
    }

    /// Renders the toolbar and cells, fits them to the window, and starts
    /// following the page selector.
    pub fn run(&self) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .run()
            .context("failed to render checker")
            .map_err(to_js)?;

        let checker = Rc::downgrade(&self.inner);
        self.inner
            .borrow_mut()
            .surface_mut()
            .on_toolbar_change(move |url| {
                let Some(checker) = checker.upgrade() else {
                    return;
                };
                if let Err(err) = checker.borrow_mut().select_url(&url) {
                    warn!(error = %err, "page switch ignored");
                }
            })
            .context("failed to attach page selector")
            .map_err(to_js)
    }

    /// Index of the page every frame shows.
    #[wasm_bindgen(js_name = activeUrlIndex)]
    pub fn active_url_index(&self) -> usize {
        self.inner.borrow().active_url_index()
    }

    /// URL of the page every frame shows.
    #[wasm_bindgen(js_name = activeUrl)]
    pub fn active_url(&self) -> String {
        self.inner.borrow().active_url().to_string()
    }

    /// Switches every frame to the url at `index`.
    #[wasm_bindgen(js_name = selectIndex)]
    pub fn select_index(&self, index: usize) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .select_index(index)
            .map_err(|e| to_js(e.into()))
    }

    /// Names of the built-in devices, in catalog order.
    pub fn devices() -> Array {
        builtin_catalog().names().map(JsValue::from_str).collect()
    }
}
