use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("card has no data-proj attribute")]
    MissingData,
    #[error("invalid data-proj JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Details of one project card.
///
/// Cards carry these as JSON in a `data-proj` attribute, e.g.
/// `{"title":"Geno","tech":"Rust, WebGPU","desc":"...","repo":"https://..."}`.
/// Only `title` is required.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    #[serde(default)]
    pub tech: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

impl ProjectInfo {
    pub fn parse(data: Option<&str>) -> Result<Self, ProjectError> {
        let raw = data.ok_or(ProjectError::MissingData)?;
        Ok(serde_json::from_str(raw)?)
    }

    pub fn tech_text(&self) -> &str {
        non_empty(&self.tech).unwrap_or("")
    }

    pub fn desc_text(&self) -> &str {
        non_empty(&self.desc).unwrap_or("")
    }

    /// Link target for the repo button; `#` when the card has none.
    pub fn repo_href(&self) -> &str {
        non_empty(&self.repo).unwrap_or("#")
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Open/closed state of the project-detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    #[inline]
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }

    pub fn open(&mut self) {
        *self = ModalState::Open;
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Handle a key press. Escape closes an open modal; returns whether the
    /// state changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Value for the modal's `aria-hidden` attribute.
    pub fn aria_hidden(self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }
}
