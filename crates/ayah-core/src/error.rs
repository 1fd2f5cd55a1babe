// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types shared by the widget services.
//!
//! None of these are fatal: fetch failures collapse to the localized error
//! string, clipboard failures fall through to the next strategy, and open or
//! speech failures are only logged.

use std::fmt;

use thiserror::Error;

/// Failure of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (network unreachable, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("http error status {0}")]
    Status(u16),
    /// The body was not the expected ayah record.
    #[error("invalid api response: {0}")]
    Payload(String),
}

/// An ayah number outside the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ayah {number} outside corpus range 1..={size}")]
pub struct CorpusError {
    /// Requested number.
    pub number: u16,
    /// Corpus size at the time of the request.
    pub size: u16,
}

/// One failed clipboard strategy, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardAttempt {
    /// Strategy name as reported by [`crate::ClipboardStrategy::name`].
    pub strategy: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for ClipboardAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.reason)
    }
}

/// Clipboard write failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The mechanism does not exist in this environment.
    #[error("clipboard mechanism unavailable")]
    Unavailable,
    /// The mechanism exists but refused the write.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    /// Every strategy in the chain failed or was unavailable.
    #[error("no clipboard strategy succeeded [{}]", join_attempts(.0))]
    Exhausted(Vec<ClipboardAttempt>),
}

fn join_attempts(attempts: &[ClipboardAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to open a share link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    /// The platform refused to open a new browsing context (popup blocker).
    #[error("new browsing context was blocked")]
    Blocked,
    /// The call itself failed.
    #[error("failed to open link: {0}")]
    Failed(String),
}

/// Failure to hand text to speech synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// No speech synthesis facility on this platform.
    #[error("speech synthesis unavailable: {0}")]
    Unavailable(String),
    /// The utterance could not be created or queued.
    #[error("speech synthesis failed: {0}")]
    Failed(String),
}
