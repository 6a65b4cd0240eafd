use crate::constants::ANCHOR_LINK_SELECTOR;
use crate::core::anchor_target;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll in-page links to their targets and move focus there.
pub fn wire(document: &web::Document) -> usize {
    let links = dom::query_all(document, ANCHOR_LINK_SELECTOR);
    for link in &links {
        let doc = document.clone();
        let anchor = link.clone();
        dom::on_event(link, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };
            ev.prevent_default();
            scroll_to(&target);
        });
    }
    links.len()
}

fn scroll_to(target: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);

    if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
        let focus = web::FocusOptions::new();
        focus.set_prevent_scroll(true);
        _ = el.focus_with_options(&focus);
    }
}
