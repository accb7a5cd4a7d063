//! DOM control panel built from the declarative control descriptors.
//!
//! One labeled input per descriptor; edits flow through `ParamStore::set`
//! and the displayed values refresh from the store's change notifications,
//! so pointer-driven rotation shows up in the sliders too.

use std::cell::RefCell;
use std::rc::Rc;

use visor_core::{format_hex, ControlDesc, ControlKind, ParamSnapshot, ParamStore, ParamValue};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

/// Mount inputs for `controls` under `#control-panel`. Descriptors whose key
/// is missing from the store are skipped. A missing panel element is fine;
/// the host page simply runs without controls.
pub fn mount(
    document: &web::Document,
    controls: &[ControlDesc],
    params: Rc<RefCell<ParamStore>>,
) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("control-panel") else {
        log::warn!("no #control-panel element; skipping panel");
        return Ok(());
    };

    let snapshot = params.borrow().snapshot();
    let mut inputs: Vec<(&'static str, ControlKind, web::HtmlInputElement)> = Vec::new();

    for desc in controls {
        if snapshot.get(desc.key).is_none() {
            log::warn!("control {:?} has no matching param; skipped", desc.key);
            continue;
        }

        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("input element cast failed"))?;
        configure_input(&input, desc, &snapshot);

        {
            let params = params.clone();
            let key = desc.key;
            let kind = desc.kind;
            let input_read = input.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                if let Some(value) = read_input(&input_read, kind) {
                    params.borrow_mut().set(&[(key, value)]);
                }
            }) as Box<dyn FnMut()>);
            _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let row = document.create_element("label").map_err(js_err)?;
        let text = document.create_element("span").map_err(js_err)?;
        text.set_text_content(Some(desc.label));
        row.append_child(&text).map_err(js_err)?;
        row.append_child(&input).map_err(js_err)?;
        container.append_child(&row).map_err(js_err)?;

        inputs.push((desc.key, desc.kind, input));
    }

    // Reflect store changes back into the inputs.
    params.borrow_mut().subscribe(move |snap| {
        for (key, kind, input) in &inputs {
            refresh_input(input, key, *kind, snap);
        }
    });

    Ok(())
}

fn configure_input(input: &web::HtmlInputElement, desc: &ControlDesc, snapshot: &ParamSnapshot) {
    match desc.kind {
        ControlKind::Range { min, max, step } => {
            input.set_type("range");
            input.set_min(&min.to_string());
            input.set_max(&max.to_string());
            input.set_step(&step.to_string());
        }
        ControlKind::Color => input.set_type("color"),
        ControlKind::Boolean => input.set_type("checkbox"),
    }
    refresh_input(input, desc.key, desc.kind, snapshot);
}

fn read_input(input: &web::HtmlInputElement, kind: ControlKind) -> Option<ParamValue> {
    match kind {
        ControlKind::Range { .. } => input.value().parse::<f32>().ok().map(ParamValue::Number),
        ControlKind::Color => Some(ParamValue::Color(input.value().as_str().into())),
        ControlKind::Boolean => Some(ParamValue::Bool(input.checked())),
    }
}

fn refresh_input(
    input: &web::HtmlInputElement,
    key: &str,
    kind: ControlKind,
    snapshot: &ParamSnapshot,
) {
    match kind {
        ControlKind::Range { .. } => {
            if let Some(n) = snapshot.number(key) {
                input.set_value(&n.to_string());
            }
        }
        ControlKind::Color => {
            if let Some(c) = snapshot.color(key) {
                input.set_value(&format_hex(c));
            }
        }
        ControlKind::Boolean => {
            if let Some(b) = snapshot.boolean(key) {
                input.set_checked(b);
            }
        }
    }
}
