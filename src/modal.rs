use crate::constants::*;
use crate::core::{ModalState, ProjectInfo};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The project-detail dialog and the fields it fills from a card.
#[derive(Clone)]
pub struct ProjectModal {
    root: web::Element,
    panel: Option<web::HtmlElement>,
    title: Option<web::Element>,
    tech: Option<web::Element>,
    desc: Option<web::Element>,
    repo: Option<web::Element>,
    state: Rc<Cell<ModalState>>,
}

impl ProjectModal {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .get_element_by_id(MODAL_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", MODAL_ID))?;
        let panel = dom::query_one(&root, MODAL_PANEL_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        Ok(Self {
            panel,
            title: document.get_element_by_id(PROJ_TITLE_ID),
            tech: document.get_element_by_id(PROJ_TECH_ID),
            desc: document.get_element_by_id(PROJ_DESC_ID),
            repo: document.get_element_by_id(PROJ_REPO_ID),
            state: Rc::new(Cell::new(ModalState::Closed)),
            root,
        })
    }

    /// Open with the details stored on `card`. Malformed card data leaves
    /// the modal closed.
    pub fn open_card(&self, card: &web::Element) {
        match ProjectInfo::parse(card.get_attribute(PROJ_DATA_ATTR).as_deref()) {
            Ok(info) => self.open(&info),
            Err(e) => log::warn!("[modal] {}", e),
        }
    }

    pub fn open(&self, info: &ProjectInfo) {
        set_text(&self.title, &info.title);
        set_text(&self.tech, info.tech_text());
        set_text(&self.desc, info.desc_text());
        if let Some(repo) = &self.repo {
            _ = repo.set_attribute("href", info.repo_href());
        }
        let mut state = self.state.get();
        state.open();
        self.apply(state);
        if let Some(panel) = &self.panel {
            _ = panel.focus();
        }
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        state.close();
        self.apply(state);
    }

    /// Returns true when the key closed the modal.
    pub fn handle_key(&self, key: &str) -> bool {
        let mut state = self.state.get();
        if state.on_key(key) {
            self.apply(state);
            return true;
        }
        false
    }

    fn apply(&self, state: ModalState) {
        self.state.set(state);
        let cl = self.root.class_list();
        if state.is_open() {
            _ = cl.add_1(MODAL_SHOW_CLASS);
        } else {
            _ = cl.remove_1(MODAL_SHOW_CLASS);
        }
        _ = self.root.set_attribute("aria-hidden", state.aria_hidden());
    }
}

fn set_text(el: &Option<web::Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

/// Wire cards, close button and backdrop to the modal.
pub fn wire(document: &web::Document) -> anyhow::Result<ProjectModal> {
    let modal = ProjectModal::from_document(document)?;

    let cards = dom::query_all(document, PROJ_CARD_SELECTOR);
    for card in &cards {
        if let Some(btn) = dom::query_one(card, PROJ_VIEW_BTN_SELECTOR) {
            let modal_btn = modal.clone();
            let card_btn = card.clone();
            dom::on_event(&btn, "click", move |_: web::MouseEvent| {
                modal_btn.open_card(&card_btn);
            });
        }

        // Whole card is clickable; the view button already handled its own clicks.
        let modal_card = modal.clone();
        let card_el = card.clone();
        dom::on_event(card, "click", move |ev: web::MouseEvent| {
            let from_button = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(PROJ_VIEW_BTN_SELECTOR).ok().flatten())
                .is_some();
            if !from_button {
                modal_card.open_card(&card_el);
            }
        });
    }

    for selector in [MODAL_CLOSE_SELECTOR, MODAL_BACKDROP_SELECTOR] {
        if let Some(el) = dom::query_one(&modal.root, selector) {
            let modal_close = modal.clone();
            dom::on_event(&el, "click", move |_: web::MouseEvent| modal_close.close());
        }
    }

    log::info!("[modal] wired {} project cards", cards.len());
    Ok(modal)
}
