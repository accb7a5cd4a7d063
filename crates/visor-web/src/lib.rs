#![cfg(target_arch = "wasm32")]
//! Browser glue for `visor-core`: probes the environment, applies the
//! resolved preset to the host document, and feeds pointer and control-panel
//! edits through the parameter store into scene rebuilds.
//!
//! The embedding renderer calls [`boot`] once and then reads
//! [`App::scene`] each frame, diffing node keys to reuse its objects.

mod dom;
mod events;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use visor_core::{
    build_scene, default_controls, default_params, initialize, EnvSignals, ParamStore, SceneNode,
    SessionConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use dom::{safe_area_insets, set_canvas_cursor, sync_canvas_backing_size, DocumentStyleSink};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("visor-web loaded");
    Ok(())
}

/// Running application handle held by the embedding renderer.
pub struct App {
    pub session: SessionConfig,
    params: Rc<RefCell<ParamStore>>,
    scene: Rc<RefCell<Vec<SceneNode>>>,
}

impl App {
    /// Latest rebuilt scene roots. Rebuilds happen synchronously inside the
    /// event that changed a parameter, so this is always current.
    pub fn scene(&self) -> Vec<SceneNode> {
        self.scene.borrow().clone()
    }

    pub fn params(&self) -> Rc<RefCell<ParamStore>> {
        self.params.clone()
    }
}

/// Wire the whole shell to the page: classify the platform, resolve and
/// apply the preset, mount the control panel, and start pointer wiring.
/// Called once by the host; the renderer threads
/// `session.preset.framebuffer_scale` into its own XR layer setup.
pub fn boot(canvas_id: &str) -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let signals = EnvSignals::from_user_agent(
        window.navigator().user_agent().unwrap_or_default(),
    );
    let mut sink = dom::DocumentStyleSink::new(document.clone());
    let session = initialize(&signals, None, &mut sink)?;
    log::info!(
        "platform {:?}, framebuffer scale {}",
        session.category,
        session.preset.framebuffer_scale
    );

    let insets = dom::safe_area_insets(&window, &document);
    log::debug!("safe area insets: {insets:?}");

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{canvas_id} is not a canvas"))?;
    dom::set_canvas_cursor(&canvas, &session.preset.cursor_style);
    dom::sync_canvas_backing_size(&canvas, session.preset.framebuffer_scale);
    dom::wire_resize(&canvas, session.preset.framebuffer_scale);

    let params = Rc::new(RefCell::new(default_params()));
    let scene = Rc::new(RefCell::new(Vec::new()));

    // Rebuild on every parameter change, in event order.
    {
        let scene = scene.clone();
        let category = session.category;
        params.borrow_mut().subscribe(move |snapshot| {
            *scene.borrow_mut() = build_scene(snapshot, category);
        });
    }

    panel::mount(&document, &default_controls(), params.clone())?;
    events::wire_pointermove(&canvas, params.clone());

    // Initial build so a tree exists before any input arrives.
    *scene.borrow_mut() = build_scene(&params.borrow().snapshot(), session.category);

    Ok(App {
        session,
        params,
        scene,
    })
}
