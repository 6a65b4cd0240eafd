use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `event` on `target`, downcasting the event to `E`.
/// Events of another type are ignored. The listener lives for the page.
pub fn on_event<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

/// Attach a click handler to the element with `element_id`. Returns false
/// when the element does not exist.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            on_event(&el, "click", move |_: web::MouseEvent| handler());
            true
        }
        None => false,
    }
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match root.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Current window inner size in CSS pixels.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Size the canvas backing store to the window and return the new viewport.
/// Particle coordinates are CSS pixels, so no device-pixel-ratio scaling.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let vp = window_viewport()?;
    canvas.set_width(vp.width.max(0.0) as u32);
    canvas.set_height(vp.height.max(0.0) as u32);
    Some(vp)
}

/// Run `f` once the DOM is parsed; immediately if it already is.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    on_event(document, "DOMContentLoaded", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}
