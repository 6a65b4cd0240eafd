#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, ParticleField, Pointer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod modal;
mod ripple;
mod scroll;
mod theme;

thread_local! {
    static BACKGROUND: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; page effects disabled");
        return Ok(());
    };
    let doc = document.clone();
    dom::on_dom_ready(&document, move || init(&doc));
    Ok(())
}

/// Stop the background animation. The last frame stays on the canvas.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND.with(|bg| {
        if let Some(handle) = bg.borrow_mut().take() {
            handle.stop();
        }
    });
}

// Each feature is independent; a missing element only disables its own feature.
fn init(document: &web::Document) {
    stamp_year(document);

    match init_background(document) {
        Ok(handle) => BACKGROUND.with(|bg| *bg.borrow_mut() = Some(handle)),
        Err(e) => log::warn!("[field] background disabled: {:?}", e),
    }

    let ripples = ripple::wire(document);
    log::info!("[ripple] wired {} elements", ripples);

    match modal::wire(document) {
        Ok(m) => events::wire_modal_escape(document, m),
        Err(e) => log::warn!("[modal] disabled: {:?}", e),
    }

    if !theme::wire(document) {
        log::warn!("[theme] missing #{}", constants::THEME_TOGGLE_ID);
    }

    let links = scroll::wire(document);
    log::info!("[scroll] wired {} in-page links", links);
}

fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn init_background(document: &web::Document) -> anyhow::Result<frame::LoopHandle> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::BG_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::BG_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    let viewport = dom::sync_canvas_to_viewport(&canvas)
        .ok_or_else(|| anyhow::anyhow!("window size unavailable"))?;
    let field = ParticleField::new(viewport, FieldConfig::default(), &mut rand::thread_rng());
    log::info!(
        "[field] particles={} viewport={}x{}",
        field.len(),
        viewport.width,
        viewport.height
    );
    let field = Rc::new(RefCell::new(field));

    let pointer = Rc::new(Cell::new(Pointer::SENTINEL));
    events::wire_pointer_tracking(pointer.clone());
    events::wire_resize(&canvas, field.clone());

    Ok(frame::start_loop(frame::FrameContext {
        field,
        pointer,
        surface,
    }))
}
