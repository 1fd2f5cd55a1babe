// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Window-backed link opener, speech synthesis, and small page helpers.

use ayah_core::{LinkOpener, OpenError, Speaker, SpeechError};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, SpeechSynthesisUtterance, Window};

use crate::error::{describe_js, WidgetError};

/// Opens share links with `window.open`.
#[derive(Debug, Clone)]
pub struct WindowOpener {
    window: Window,
}

impl WindowOpener {
    /// Opener bound to `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl LinkOpener for WindowOpener {
    fn open(&self, url: &str, target: &str) -> Result<(), OpenError> {
        match self.window.open_with_url_and_target(url, target) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OpenError::Blocked),
            Err(e) => Err(OpenError::Failed(describe_js(&e))),
        }
    }
}

/// `speechSynthesis.speak` with one utterance per call.
#[derive(Debug, Clone)]
pub struct SynthSpeaker {
    window: Window,
}

impl SynthSpeaker {
    /// Speaker bound to `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Speaker for SynthSpeaker {
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
        let synth = self
            .window
            .speech_synthesis()
            .map_err(|e| SpeechError::Unavailable(describe_js(&e)))?;
        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| SpeechError::Failed(describe_js(&e)))?;
        utterance.set_lang(lang);
        synth.speak(&utterance);
        debug!(lang, "utterance queued");
        Ok(())
    }
}

/// Address of the hosting page.
pub fn page_url(window: &Window) -> Result<String, WidgetError> {
    window.location().href().map_err(|e| WidgetError::js(&e))
}

/// Add `class` to `element` and take it off again after `millis`.
pub fn flash_class(
    window: &Window,
    element: &Element,
    class: &'static str,
    millis: u32,
) -> Result<(), WidgetError> {
    element
        .class_list()
        .add_1(class)
        .map_err(|e| WidgetError::js(&e))?;
    let target = element.clone();
    let clear = Closure::once_into_js(move || {
        let _ = target.class_list().remove_1(class);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.unchecked_ref(),
            i32::try_from(millis).unwrap_or(i32::MAX),
        )
        .map_err(|e| WidgetError::js(&e))?;
    Ok(())
}
