use crate::core::{ParticleField, Pointer};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Keep `pointer` in sync with the mouse/pen/touch position over the page.
/// Leaving the window parks it on the sentinel.
pub fn wire_pointer_tracking(pointer: Rc<Cell<Pointer>>) {
    let Some(window) = web::window() else {
        return;
    };

    let pointer_move = pointer.clone();
    dom::on_event(&window, "pointermove", move |ev: web::PointerEvent| {
        pointer_move.set(Pointer::at(ev.client_x() as f64, ev.client_y() as f64));
    });

    // pointerout bubbles from every element; only a null relatedTarget means
    // the pointer actually left the document.
    dom::on_event(&window, "pointerout", move |ev: web::PointerEvent| {
        if ev.related_target().is_none() {
            pointer.set(Pointer::SENTINEL);
        }
    });
}

/// Track window size: resize the canvas backing store and the field's
/// viewport. The particles themselves are left untouched.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::on_event(&window, "resize", move |_: web::Event| {
        if let Some(vp) = dom::sync_canvas_to_viewport(&canvas) {
            field.borrow_mut().resize(vp);
            log::debug!("[resize] viewport={}x{}", vp.width, vp.height);
        }
    });
}
