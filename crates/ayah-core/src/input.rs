// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! User actions and keyboard activation.

use crate::share::SharePlatform;

/// Something a control can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch a new verse.
    Refresh,
    /// Copy the verse to the clipboard.
    Copy,
    /// Open a share link.
    Share(SharePlatform),
    /// Speak the verse.
    ReadAloud,
}

impl Action {
    /// Whether Enter/Space on the control should trigger the action.
    /// The refresh control is a native `<button>` and activates on its own.
    pub fn wants_keyboard_activation(self) -> bool {
        !matches!(self, Self::Refresh)
    }
}

/// `KeyboardEvent.key` values that activate a control.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
