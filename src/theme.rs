use crate::constants::{LIGHT_THEME_CLASS, THEME_TOGGLE_ID};
use crate::dom;
use web_sys as web;

/// `#theme-toggle` flips the `light` class on `<body>`.
pub fn wire(document: &web::Document) -> bool {
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        if let Some(body) = doc.body() {
            if let Ok(light) = body.class_list().toggle(LIGHT_THEME_CLASS) {
                log::debug!("[theme] light={}", light);
            }
        }
    })
}
