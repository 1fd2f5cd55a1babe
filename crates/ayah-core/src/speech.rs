// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-aloud port. No queueing, interruption or voice selection.

use tracing::debug;

use crate::error::SpeechError;
use crate::ports::VerseView;

/// Platform speech synthesis.
pub trait Speaker {
    /// Speak `text` in language `lang` (BCP 47).
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError>;
}

/// Speak the verse on screen. Returns `Ok(false)` when there is nothing to say.
pub fn read_aloud<V, S>(view: &V, speaker: &S, lang: &str) -> Result<bool, SpeechError>
where
    V: VerseView + ?Sized,
    S: Speaker + ?Sized,
{
    let text = view.current_text();
    if text.trim().is_empty() {
        debug!("read-aloud skipped: verse region is empty");
        return Ok(false);
    }
    speaker.speak(&text, lang)?;
    Ok(true)
}
