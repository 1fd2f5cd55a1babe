// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for the ayah widget crates.
#![forbid(unsafe_code)]
//!
//! Every fake is cheaply cloneable and shares its state between clones, so a
//! test can hand one clone to the code under test and inspect the other.
//!
//! # Modules
//!
//! - [`clipboard`] - Fake system clipboard with primary and legacy strategies
//! - [`fixtures`] - API payload builders and URL helpers
//! - [`platform`] - Recording link opener and speaker
//! - [`source`] - Scripted verse source with deferred replies
//! - [`view`] - Recording verse view

pub mod clipboard;
pub mod fixtures;
pub mod platform;
pub mod source;
pub mod view;

// Re-export commonly used items at crate root for convenience
pub use clipboard::{FakeAsyncClipboard, FakeLegacyClipboard, SystemClipboard};
pub use fixtures::{ayah_body, ayah_number_from_url};
pub use platform::{RecordingOpener, RecordingSpeaker};
pub use source::{PendingReply, ScriptedSource};
pub use view::{RecordingView, ViewEvent, ViewState};
