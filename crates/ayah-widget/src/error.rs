// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Widget-level errors and JS value descriptions.

use ayah_core::{ClipboardError, ConfigError, OpenError, SpeechError};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while binding or driving the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is unavailable")]
    NoWindow,
    /// The window has no document.
    #[error("document is unavailable")]
    NoDocument,
    /// A required element is not on the page.
    #[error("no element matches `{selector}`")]
    MissingElement {
        /// Configured selector.
        selector: String,
    },
    /// The element exists but has the wrong type.
    #[error("element `{selector}` is not a {expected}")]
    WrongElement {
        /// Configured selector.
        selector: String,
        /// Expected DOM interface.
        expected: &'static str,
    },
    /// Operation needs `init()` first.
    #[error("widget is not initialized")]
    NotInitialized,
    /// Options could not be turned into a valid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Every clipboard strategy failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    /// A share link could not be opened.
    #[error(transparent)]
    Open(#[from] OpenError),
    /// Read-aloud failed.
    #[error(transparent)]
    Speech(#[from] SpeechError),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl WidgetError {
    /// Wrap a thrown JS value.
    pub fn js(value: &JsValue) -> Self {
        Self::Js(describe_js(value))
    }
}

/// Best-effort human-readable text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = WidgetError::MissingElement {
            selector: ".quote".into(),
        };
        assert_eq!(err.to_string(), "no element matches `.quote`");
    }

    #[test]
    fn wrong_element_names_interface() {
        let err = WidgetError::WrongElement {
            selector: "button[type='button']".into(),
            expected: "HTMLButtonElement",
        };
        assert_eq!(
            err.to_string(),
            "element `button[type='button']` is not a HTMLButtonElement"
        );
    }

    #[test]
    fn config_errors_pass_through() {
        let err = WidgetError::from(ConfigError::Other("bad options".into()));
        assert_eq!(err.to_string(), "other: bad options");
    }
}
