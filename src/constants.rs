/// Element ids and selectors the page markup provides.
///
/// Every feature looks its elements up through these names and stays inert
/// when they are missing.
// Background
pub const BG_CANVAS_ID: &str = "bg-canvas";

// Footer
pub const YEAR_ID: &str = "year";

// Ripples
pub const RIPPLE_SELECTOR: &str = ".ripple";
pub const RIPPLE_CIRCLE_CLASS: &str = "ripple-circle";
pub const RIPPLE_COLOR_PROPERTY: &str = "--ripple-color";
pub const RIPPLE_STYLES: &str = "
    .ripple-circle{position:absolute;border-radius:50%;transform:scale(0);animation:ripple-anim .6s linear;pointer-events:none;opacity:0.95}
    @keyframes ripple-anim{to{transform:scale(1);opacity:0}}
  ";

// Project modal
pub const MODAL_ID: &str = "proj-modal";
pub const MODAL_PANEL_SELECTOR: &str = ".modal-panel";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_BACKDROP_SELECTOR: &str = ".modal-backdrop";
pub const MODAL_SHOW_CLASS: &str = "show";
pub const PROJ_TITLE_ID: &str = "proj-title";
pub const PROJ_TECH_ID: &str = "proj-tech";
pub const PROJ_DESC_ID: &str = "proj-desc";
pub const PROJ_REPO_ID: &str = "proj-repo";
pub const PROJ_CARD_SELECTOR: &str = ".proj-card";
pub const PROJ_VIEW_BTN_SELECTOR: &str = ".view-btn";
pub const PROJ_DATA_ATTR: &str = "data-proj";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const LIGHT_THEME_CLASS: &str = "light";

// In-page links
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
