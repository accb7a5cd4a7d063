//! Pointer wiring: viewport-local position into rotation parameters.

use std::cell::RefCell;
use std::rc::Rc;

use visor_core::{map_pointer, ParamStore, ParamValue};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Listen for pointer movement over `canvas` and write the derived rotation
/// into `params`. Out-of-bounds positions produce no update, so the previous
/// rotation stays in effect while the pointer is off-canvas.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, params: Rc<RefCell<ParamStore>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let x = ev.client_x() as f32 - rect.left() as f32;
        let y = ev.client_y() as f32 - rect.top() as f32;
        if let Some(rotation) = map_pointer(x, y, rect.width() as f32, rect.height() as f32) {
            params.borrow_mut().set(&[
                ("rotateX", ParamValue::Number(rotation.rotate_x)),
                ("rotateY", ParamValue::Number(rotation.rotate_y)),
            ]);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
