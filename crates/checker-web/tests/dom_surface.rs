//! Browser tests for the DOM surface and the JavaScript entry point.
//!
//! Run with `wasm-pack test --headless --firefox crates/checker-web` (or
//! `--chrome`).  Every test clears the page body first, because all tests in
//! this file share one document.

#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use checker_core::MountPoints;
use checker_web::infrastructure::dom::DomSurface;
use checker_web::wasm::WebChecker;
use checker_web::{SurfaceError, VisualSurface};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, HtmlElement, HtmlIFrameElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const URLS: [&str; 3] = ["about:blank#a", "about:blank#b", "about:blank#c"];

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser")
}

/// Empties the body, pins its height and adds the requested mount points.
fn reset_page(body_height: u32, mounts: &[&str]) -> Document {
    let document = document();
    let body = document.body().expect("document has a body");
    body.set_inner_html("");
    body.style()
        .set_property("height", &format!("{body_height}px"))
        .unwrap();
    for id in mounts {
        let div = document.create_element("div").unwrap();
        div.set_id(id);
        body.append_child(&div).unwrap();
    }
    document
}

fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).expect("valid options JSON")
}

fn all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.dyn_into::<T>().unwrap())
        .collect()
}

fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

// ── Structure ─────────────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn test_run_builds_toolbar_selector_with_default_selected() {
    let document = reset_page(2000, &["toolbar", "checker"]);
    let checker = WebChecker::new(options(
        r#"{ "urls": ["about:blank#a", "about:blank#b", "about:blank#c"],
             "defaultIndex": 1, "devices": ["iPhone 5"] }"#,
    ))
    .unwrap();

    checker.run().unwrap();

    let toolbar = document.get_element_by_id("toolbar").unwrap();
    let selectors: Vec<HtmlSelectElement> = all(&toolbar, "select.page-selector");
    assert_eq!(selectors.len(), 1);
    assert_eq!(selectors[0].length(), 3);
    assert_eq!(selectors[0].value(), "about:blank#b");
    assert_eq!(checker.active_url_index(), 1);
}

#[wasm_bindgen_test]
fn test_run_builds_one_padded_cell_per_orientation() {
    let document = reset_page(2000, &["toolbar", "checker"]);
    let checker = WebChecker::new(options(
        r#"{ "urls": ["about:blank#a"], "devices": ["iPhone 5", "iPad"], "padding": 12 }"#,
    ))
    .unwrap();

    checker.run().unwrap();

    let root = document.get_element_by_id("checker").unwrap();
    let cells: Vec<HtmlElement> = all(&root, "div.device");
    assert_eq!(cells.len(), 3);
    for cell in &cells {
        assert_eq!(style(cell, "padding-left"), "12px");
        assert_eq!(style(cell, "padding-right"), "12px");
    }

    let headers: Vec<String> = all::<Element>(&root, "div.device > h1")
        .iter()
        .filter_map(Element::text_content)
        .collect();
    assert_eq!(
        headers,
        vec![
            "iPhone 5 - 320*568",
            "iPad - Vertical - 768*1024",
            "iPad - Horizontal - 1024*768",
        ]
    );

    let frames: Vec<HtmlIFrameElement> = all(&root, "div.device > div.wrapper > iframe");
    let sizes: Vec<(String, String)> = frames.iter().map(|f| (f.width(), f.height())).collect();
    assert_eq!(
        sizes,
        vec![
            ("320".to_string(), "568".to_string()),
            ("768".to_string(), "1024".to_string()),
            ("1024".to_string(), "768".to_string()),
        ]
    );
    assert!(frames.iter().all(|f| f.src() == "about:blank#a"));
}

// ── Toolbar ───────────────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn test_change_event_points_every_frame_at_selected_url() {
    let document = reset_page(2000, &["toolbar", "checker"]);
    let checker = WebChecker::new(options(
        r#"{ "urls": ["about:blank#a", "about:blank#b", "about:blank#c"],
             "devices": ["iPhone 5", "iPad", "MacBook"] }"#,
    ))
    .unwrap();
    checker.run().unwrap();

    let select: HtmlSelectElement = document
        .query_selector("select.page-selector")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    select.set_value(URLS[2]);
    select
        .dispatch_event(&Event::new("change").unwrap())
        .unwrap();

    let frames: Vec<HtmlIFrameElement> =
        all(&document.document_element().unwrap(), ".device iframe");
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| f.src() == URLS[2]));
    assert_eq!(checker.active_url_index(), 2);
    assert_eq!(checker.active_url(), URLS[2]);
}

// ── Scaling ───────────────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn test_run_scales_tall_frame_and_resizes_its_wrapper() {
    // 359 px body leaves 284 px; a 568 px frame scales by exactly 0.5.
    let document = reset_page(359, &["toolbar", "checker"]);
    let checker = WebChecker::new(options(
        r#"{ "urls": ["about:blank#a"], "devices": ["iPhone 5"] }"#,
    ))
    .unwrap();

    checker.run().unwrap();

    let root = document.get_element_by_id("checker").unwrap();
    let frame: HtmlIFrameElement = all(&root, "iframe").remove(0);
    assert_eq!(style(&frame, "transform"), "scale(0.5)");
    assert!(!style(&frame, "transform-origin").is_empty());

    let wrapper: HtmlElement = all(&root, "div.wrapper").remove(0);
    assert_eq!(style(&wrapper, "width"), "160px");
    assert_eq!(style(&wrapper, "height"), "284px");
    assert!(style(root.unchecked_ref::<HtmlElement>(), "width").ends_with("px"));
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[wasm_bindgen_test]
fn test_run_without_checker_mount_point_fails() {
    reset_page(2000, &["toolbar"]);
    let checker = WebChecker::new(options(r#"{ "urls": ["about:blank#a"] }"#)).unwrap();

    let err = checker.run().unwrap_err();

    let message = err.as_string().unwrap_or_default();
    assert!(message.contains("mount point not found: #checker"), "{message}");
}

#[wasm_bindgen_test]
fn test_surface_reports_missing_toolbar_by_configured_id() {
    let document = reset_page(2000, &["checker"]);
    let mount = MountPoints {
        toolbar_id: "nav".to_string(),
        ..MountPoints::default()
    };
    let mut surface = DomSurface::new(document, mount);

    let result = surface.mount_toolbar(&["about:blank#a".to_string()], 0);

    assert_eq!(result, Err(SurfaceError::MissingMountPoint("nav".to_string())));
}

#[wasm_bindgen_test]
fn test_listener_before_toolbar_is_mounted_fails() {
    let document = reset_page(2000, &["toolbar", "checker"]);
    let mut surface = DomSurface::new(document, MountPoints::default());

    let result = surface.on_toolbar_change(|_| {});

    assert!(matches!(result, Err(SurfaceError::Platform(_))));
}

#[wasm_bindgen_test]
fn test_unknown_device_rejected_by_constructor() {
    reset_page(2000, &["toolbar", "checker"]);

    let result = WebChecker::new(options(
        r#"{ "urls": ["about:blank#a"], "devices": ["Nokia 3310"] }"#,
    ));

    let message = result
        .err()
        .and_then(|e| e.as_string())
        .unwrap_or_default();
    assert!(message.contains("Nokia 3310"), "{message}");
}
