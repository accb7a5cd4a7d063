//! Host-document access: the real style sink, safe-area probing, and canvas
//! helpers. This module is the only place the ambient document is mutated.

use visor_core::{parse_px, SafeAreaInsets, StyleSink};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Style sink backed by the live document head. `contains` keys off the
/// element id, which is what makes repeated application a no-op.
pub struct DocumentStyleSink {
    document: web::Document,
}

impl DocumentStyleSink {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl StyleSink for DocumentStyleSink {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert(&mut self, id: &str, css: &str) {
        let Ok(el) = self.document.create_element("style") else {
            log::error!("could not create style element for {id:?}");
            return;
        };
        el.set_id(id);
        el.set_text_content(Some(css));
        if let Some(head) = self.document.head() {
            _ = head.append_child(&el);
        }
    }
}

/// Snapshot the safe-area insets from the computed root style. Values are
/// read once and go stale if the viewport changes.
pub fn safe_area_insets(window: &web::Window, document: &web::Document) -> SafeAreaInsets {
    let Some(root) = document.document_element() else {
        return SafeAreaInsets::default();
    };
    let Ok(Some(style)) = window.get_computed_style(&root) else {
        return SafeAreaInsets::default();
    };
    let read = |prop: &str| {
        style
            .get_property_value(prop)
            .map(|v| parse_px(&v))
            .unwrap_or(0)
    };
    SafeAreaInsets {
        top: read("--safe-area-inset-top"),
        right: read("--safe-area-inset-right"),
        bottom: read("--safe-area-inset-bottom"),
        left: read("--safe-area-inset-left"),
    }
}

/// Apply the preset cursor to the canvas, restoring the default when the
/// pointer leaves so gaze feedback only shows over the interactive region.
pub fn set_canvas_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
    let canvas_leave = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        _ = canvas_leave.style().set_property("cursor", "auto");
    }) as Box<dyn FnMut()>);
    _ = canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing size to CSS size * devicePixelRatio, scaled by
/// the preset framebuffer fraction.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, framebuffer_scale: f32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr * framebuffer_scale as f64) as u32;
        let h_px = (rect.height() * dpr * framebuffer_scale as f64) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing size in sync across window resizes.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, framebuffer_scale: f32) {
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize, framebuffer_scale);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
