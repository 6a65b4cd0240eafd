// Host-side tests for the pure helpers behind ripples, in-page links and the
// project modal. The main crate is wasm-only, so we include them directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}
mod project {
    include!("../src/core/project.rs");
}

use glam::DVec2;
use interaction::*;
use project::*;

#[test]
fn ripple_is_centred_on_click_and_covers_button() {
    let rect = ClientRect {
        left: 100.0,
        top: 50.0,
        width: 120.0,
        height: 40.0,
    };
    let r = Ripple::at(rect, DVec2::new(130.0, 60.0));
    assert!((r.diameter - 168.0).abs() < 1e-9);
    assert!((r.left - (30.0 - 84.0)).abs() < 1e-9);
    assert!((r.top - (10.0 - 84.0)).abs() < 1e-9);
}

#[test]
fn ripple_uses_larger_side() {
    let tall = ClientRect {
        left: 0.0,
        top: 0.0,
        width: 20.0,
        height: 50.0,
    };
    let r = Ripple::at(tall, DVec2::new(10.0, 25.0));
    assert!((r.diameter - 70.0).abs() < 1e-9);
    // centre of the circle lands on the click
    assert!((r.left + r.diameter / 2.0 - 10.0).abs() < 1e-9);
    assert!((r.top + r.diameter / 2.0 - 25.0).abs() < 1e-9);
}

#[test]
fn ripple_color_falls_back_when_unset() {
    assert_eq!(ripple_color(""), "rgba(255,255,255,0.12)");
    assert_eq!(ripple_color("   "), "rgba(255,255,255,0.12)");
    assert_eq!(ripple_color(" #ff0088"), "#ff0088");
}

#[test]
fn anchor_target_extracts_fragment_ids() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#top"), None);
}

#[test]
fn project_info_parses_full_card() {
    let info = ProjectInfo::parse(Some(
        r#"{"title":"Geno","tech":"Rust, WebGPU","desc":"Music visualizer","repo":"https://example.com/geno"}"#,
    ))
    .unwrap();
    assert_eq!(info.title, "Geno");
    assert_eq!(info.tech_text(), "Rust, WebGPU");
    assert_eq!(info.desc_text(), "Music visualizer");
    assert_eq!(info.repo_href(), "https://example.com/geno");
}

#[test]
fn project_info_defaults_optional_fields() {
    let info = ProjectInfo::parse(Some(r#"{"title":"Bare","repo":"","tech":null}"#)).unwrap();
    assert_eq!(info.tech_text(), "");
    assert_eq!(info.desc_text(), "");
    assert_eq!(info.repo_href(), "#");
}

#[test]
fn project_info_rejects_bad_data() {
    assert!(matches!(
        ProjectInfo::parse(None),
        Err(ProjectError::MissingData)
    ));
    assert!(matches!(
        ProjectInfo::parse(Some("{not json")),
        Err(ProjectError::Json(_))
    ));
    // title is required
    let err = ProjectInfo::parse(Some(r#"{"tech":"Rust"}"#)).unwrap_err();
    assert!(err.to_string().starts_with("invalid data-proj JSON"));
}

#[test]
fn modal_opens_and_closes() {
    let mut state = ModalState::default();
    assert_eq!(state, ModalState::Closed);
    assert_eq!(state.aria_hidden(), "true");

    state.open();
    assert!(state.is_open());
    assert_eq!(state.aria_hidden(), "false");

    state.close();
    assert!(!state.is_open());
}

#[test]
fn escape_closes_only_an_open_modal() {
    let mut state = ModalState::Closed;
    assert!(!state.on_key("Escape"));
    assert_eq!(state, ModalState::Closed);

    state.open();
    assert!(!state.on_key("Enter"));
    assert!(state.is_open());
    assert!(state.on_key("Escape"));
    assert_eq!(state, ModalState::Closed);
}
