// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording fakes for the link-opener and speech ports.

use ayah_core::{LinkOpener, OpenError, SpeechError, Speaker};
use std::sync::{Arc, Mutex};

/// Records every `(url, target)` it is asked to open.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<(String, String)>>>,
    blocked: bool,
}

impl RecordingOpener {
    /// Create an opener that accepts every link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a popup blocker: calls are recorded, then fail.
    #[must_use]
    pub fn blocked(mut self) -> Self {
        self.blocked = true;
        self
    }

    /// `(url, target)` pairs, oldest first.
    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str, target: &str) -> Result<(), OpenError> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((url.to_string(), target.to_string()));
        if self.blocked {
            return Err(OpenError::Blocked);
        }
        Ok(())
    }
}

/// Records every `(text, lang)` it is asked to speak.
#[derive(Clone, Default)]
pub struct RecordingSpeaker {
    spoken: Arc<Mutex<Vec<(String, String)>>>,
    unavailable: bool,
}

impl RecordingSpeaker {
    /// Create a speaker that accepts every utterance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a platform without speech synthesis.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// `(text, lang)` pairs, oldest first.
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
        if self.unavailable {
            return Err(SpeechError::Unavailable("speechSynthesis missing".into()));
        }
        self.spoken
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((text.to_string(), lang.to_string()));
        Ok(())
    }
}
