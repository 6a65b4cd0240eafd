use crate::constants::*;
use crate::core::{ripple_color, ClientRect, Ripple};
use crate::dom;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Give every `.ripple` element a click ripple and inject the ripple styles.
/// Returns the number of elements wired.
pub fn wire(document: &web::Document) -> usize {
    let buttons = dom::query_all(document, RIPPLE_SELECTOR);
    let mut wired = 0;
    for el in buttons {
        let Ok(btn) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        _ = btn.style().set_property("position", "relative");
        let doc = document.clone();
        let target = btn.clone();
        dom::on_event(&btn, "click", move |ev: web::MouseEvent| {
            if let Err(e) = spawn_ripple(&doc, &target, &ev) {
                log::warn!("[ripple] {:?}", e);
            }
        });
        wired += 1;
    }
    inject_styles(document);
    wired
}

fn spawn_ripple(
    document: &web::Document,
    btn: &web::HtmlElement,
    ev: &web::MouseEvent,
) -> anyhow::Result<()> {
    let r = btn.get_bounding_client_rect();
    let ripple = Ripple::at(
        ClientRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        },
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
    );

    let circle = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = circle.style();
    let size = format!("{}px", ripple.diameter);
    _ = style.set_property("width", &size);
    _ = style.set_property("height", &size);
    _ = style.set_property("left", &format!("{}px", ripple.left));
    _ = style.set_property("top", &format!("{}px", ripple.top));
    circle.set_class_name(RIPPLE_CIRCLE_CLASS);
    _ = style.set_property("background", ripple_color(&custom_color(btn)));
    btn.append_child(&circle)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let remove = Closure::once_into_js(move || circle.remove());
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            crate::core::constants::RIPPLE_LIFETIME_MS,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn custom_color(btn: &web::HtmlElement) -> String {
    web::window()
        .and_then(|w| w.get_computed_style(btn).ok().flatten())
        .and_then(|s| s.get_property_value(RIPPLE_COLOR_PROPERTY).ok())
        .unwrap_or_default()
}

fn inject_styles(document: &web::Document) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(RIPPLE_STYLES));
        _ = head.append_child(&style);
    }
}
