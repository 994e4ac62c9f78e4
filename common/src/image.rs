//! Retry sequence for a single rendered image.
//!
//! Each image block walks its candidate URLs in order, moving on whenever the
//! browser reports a load error, and settles on a placeholder once every
//! candidate has failed.

use std::sync::LazyLock;

use base64::{engine::general_purpose, Engine as _};

use crate::photo::resolve_candidates;

const PLACEHOLDER_SVG: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360" viewBox="0 0 640 360">"##,
    r##"<defs><linearGradient id="g" x1="0%" y1="0%" x2="100%" y2="100%">"##,
    r##"<stop offset="0%" stop-color="#112536"/><stop offset="100%" stop-color="#0a1b33"/>"##,
    r##"</linearGradient></defs>"##,
    r##"<rect width="640" height="360" rx="18" fill="url(#g)"/>"##,
    r##"<rect x="24" y="24" width="592" height="312" rx="12" fill="none" stroke="#5dd4b6" stroke-width="4" stroke-dasharray="12 10"/>"##,
    r##"<text x="50%" y="52%" dominant-baseline="middle" text-anchor="middle" fill="#cfe8ff" font-family="Arial, sans-serif" font-size="26" font-weight="600">Image not available</text>"##,
    r##"</svg>"##,
);

static PLACEHOLDER_DATA_URI: LazyLock<String> = LazyLock::new(|| {
    format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(PLACEHOLDER_SVG)
    )
});

/// Inline SVG shown when no candidate could be loaded.
pub fn placeholder_data_uri() -> &'static str {
    &PLACEHOLDER_DATA_URI
}

/// Where an image block is in its retry sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImagePhase {
    /// Waiting for the candidate at this index to load.
    Pending(usize),
    /// The candidate at this index rendered.
    Shown(usize),
    /// Every candidate failed, or there were none.
    Failed,
}

/// Candidate list plus retry position for one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageState {
    candidates: Vec<String>,
    phase: ImagePhase,
}

impl ImageState {
    /// Builds the candidate list for `raw`. With no candidates the state
    /// starts out [`ImagePhase::Failed`].
    pub fn new(raw: &str) -> Self {
        let candidates = resolve_candidates(raw);
        let phase = if candidates.is_empty() {
            ImagePhase::Failed
        } else {
            ImagePhase::Pending(0)
        };
        Self { candidates, phase }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn phase(&self) -> ImagePhase {
        self.phase
    }

    fn index(&self) -> Option<usize> {
        match self.phase {
            ImagePhase::Pending(i) | ImagePhase::Shown(i) => Some(i),
            ImagePhase::Failed => None,
        }
    }

    /// The browser rendered the active candidate.
    pub fn on_load(&mut self) {
        if let ImagePhase::Pending(i) = self.phase {
            self.phase = ImagePhase::Shown(i);
        }
    }

    /// The active candidate failed; move to the next one or give up.
    /// Returns `true` when the phase changed.
    pub fn on_error(&mut self) -> bool {
        let Some(i) = self.index() else {
            return false;
        };
        self.phase = if i + 1 < self.candidates.len() {
            ImagePhase::Pending(i + 1)
        } else {
            ImagePhase::Failed
        };
        true
    }

    /// URL of the candidate currently tried or shown, `None` once failed.
    pub fn active_url(&self) -> Option<&str> {
        self.index()
            .and_then(|i| self.candidates.get(i))
            .map(String::as_str)
    }

    /// Value for the `<img src>` attribute.
    pub fn display_src(&self) -> &str {
        self.active_url().unwrap_or(placeholder_data_uri())
    }
}
