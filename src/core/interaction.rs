use super::constants::RIPPLE_SCALE;
use glam::DVec2;

/// Element bounds in client coordinates (mirrors `DOMRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of a ripple circle inside the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Circle centred on the click, large enough to cover the element.
    pub fn at(rect: ClientRect, click: DVec2) -> Self {
        let diameter = rect.width.max(rect.height) * RIPPLE_SCALE;
        let half = diameter / 2.0;
        Self {
            diameter,
            left: click.x - rect.left - half,
            top: click.y - rect.top - half,
        }
    }
}

/// Element id referenced by an in-page link, e.g. `"#about"` -> `"about"`.
/// Bare `"#"` and non-fragment hrefs give `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Pick the custom ripple colour, falling back when the property is unset.
pub fn ripple_color(custom: &str) -> &str {
    let trimmed = custom.trim();
    if trimmed.is_empty() {
        super::constants::RIPPLE_FALLBACK_COLOR
    } else {
        trimmed
    }
}
