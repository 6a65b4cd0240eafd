use crate::canvas::CanvasSurface;
use crate::core::{ParticleField, Pointer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame reads or writes.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<Cell<Pointer>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let pointer = self.pointer.get();
        self.field.borrow_mut().frame(&mut self.surface, pointer);
    }
}

struct LoopShared {
    running: Cell<bool>,
    in_frame: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Owner's handle on the background animation loop.
pub struct LoopHandle {
    shared: Rc<LoopShared>,
}

impl LoopHandle {
    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        if !self.shared.running.replace(false) {
            return;
        }
        if let Some(id) = self.shared.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // A closure can't be dropped while it runs; when stopped from inside a
        // frame it is simply never rescheduled.
        if !self.shared.in_frame.get() {
            self.shared.tick.borrow_mut().take();
        }
        log::info!("[frame] loop stopped");
    }
}

fn schedule(shared: &LoopShared) {
    let tick = shared.tick.borrow();
    let (Some(cb), Some(w)) = (tick.as_ref(), web::window()) else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => shared.pending.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

/// Drive `frame_ctx` at the display's repaint cadence until stopped.
pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let shared = Rc::new(LoopShared {
        running: Cell::new(true),
        in_frame: Cell::new(false),
        pending: Cell::new(None),
        tick: RefCell::new(None),
    });

    // The closure keeps the loop alive until `stop` breaks the cycle.
    let shared_tick = shared.clone();
    let mut frame_ctx = frame_ctx;
    *shared.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let shared = &shared_tick;
        shared.pending.set(None);
        if !shared.running.get() {
            return;
        }
        shared.in_frame.set(true);
        frame_ctx.frame();
        shared.in_frame.set(false);
        if shared.running.get() {
            schedule(shared);
        }
    }) as Box<dyn FnMut()>));

    schedule(&shared);
    LoopHandle { shared }
}
