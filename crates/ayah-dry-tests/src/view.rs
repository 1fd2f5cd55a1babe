// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording [`VerseView`] fake.

use ayah_core::{DisplayedVerse, VerseView};
use std::sync::{Arc, Mutex};

/// One call received by the view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// `set_loading(label)`.
    Loading(String),
    /// `set_idle(label)`.
    Idle(String),
    /// `show_verse(verse)`.
    Verse(DisplayedVerse),
    /// `show_error(message)`.
    Error(String),
}

/// Rendered state, as a DOM would hold it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Verse region text.
    pub verse: String,
    /// Attribution region text.
    pub attribution: String,
    /// Refresh control label.
    pub button_label: String,
    /// Refresh control carries the loading class.
    pub loading: bool,
    /// Refresh control is disabled.
    pub disabled: bool,
    /// Every call, oldest first.
    pub events: Vec<ViewEvent>,
}

/// In-memory implementation of [`VerseView`] for testing.
#[derive(Clone, Default)]
pub struct RecordingView {
    inner: Arc<Mutex<ViewState>>,
}

impl RecordingView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view whose verse region already shows `text`.
    pub fn showing(text: &str) -> Self {
        let view = Self::new();
        view.with_state(|state| state.verse = text.to_string());
        view
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.with_state(|state| state.clone())
    }

    /// Verse region text.
    pub fn verse(&self) -> String {
        self.with_state(|state| state.verse.clone())
    }

    /// Attribution region text.
    pub fn attribution(&self) -> String {
        self.with_state(|state| state.attribution.clone())
    }

    /// Whether the refresh control is in its loading state.
    pub fn is_loading(&self) -> bool {
        self.with_state(|state| state.loading)
    }

    /// Recorded calls, oldest first.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.with_state(|state| state.events.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut ViewState) -> T) -> T {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }
}

impl VerseView for RecordingView {
    fn set_loading(&self, label: &str) {
        self.with_state(|state| {
            state.loading = true;
            state.disabled = true;
            state.button_label = label.to_string();
            state.events.push(ViewEvent::Loading(label.to_string()));
        });
    }

    fn set_idle(&self, label: &str) {
        self.with_state(|state| {
            state.loading = false;
            state.disabled = false;
            state.button_label = label.to_string();
            state.events.push(ViewEvent::Idle(label.to_string()));
        });
    }

    fn show_verse(&self, verse: &DisplayedVerse) {
        self.with_state(|state| {
            state.verse.clone_from(&verse.text);
            state.attribution.clone_from(&verse.source_name);
            state.events.push(ViewEvent::Verse(verse.clone()));
        });
    }

    fn show_error(&self, message: &str) {
        self.with_state(|state| {
            state.verse = message.to_string();
            state.attribution.clear();
            state.events.push(ViewEvent::Error(message.to_string()));
        });
    }

    fn current_text(&self) -> String {
        self.verse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let view = RecordingView::new();
        let handle = view.clone();
        view.show_verse(&DisplayedVerse::new("T", "S"));
        assert_eq!(handle.verse(), "T");
        assert_eq!(handle.attribution(), "S");
    }

    #[test]
    fn error_clears_attribution() {
        let view = RecordingView::new();
        view.show_verse(&DisplayedVerse::new("T", "S"));
        view.show_error("oops");
        let state = view.snapshot();
        assert_eq!(state.verse, "oops");
        assert_eq!(state.attribution, "");
    }

    #[test]
    fn loading_toggles_disabled_and_label() {
        let view = RecordingView::new();
        view.set_loading("...");
        assert!(view.is_loading());
        assert!(view.snapshot().disabled);
        view.set_idle("go");
        let state = view.snapshot();
        assert!(!state.loading && !state.disabled);
        assert_eq!(state.button_label, "go");
    }
}
