use crate::dom;
use crate::modal::ProjectModal;
use web_sys as web;

/// Escape closes the project modal while it is open.
pub fn wire_modal_escape(document: &web::Document, modal: ProjectModal) {
    dom::on_event(document, "keydown", move |ev: web::KeyboardEvent| {
        if modal.handle_key(&ev.key()) {
            log::debug!("[keys] modal closed");
        }
    });
}
