// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core services for the random ayah widget (fetch cycle, clipboard, sharing).
//! Everything platform-specific sits behind the ports in [`ports`], so the
//! browser adapter stays thin and the behavior is testable natively.

pub mod clipboard;
pub mod config;
pub mod corpus;
pub mod cycle;
pub mod error;
pub mod input;
pub mod ports;
pub mod share;
pub mod speech;
pub mod verse;

pub use clipboard::{copy_current_verse, ClipboardChain, ClipboardStrategy, CopyReceipt};
pub use config::{
    ConcurrencyPolicy, ConfigError, FeatureFlags, Selectors, WidgetConfig, WidgetStrings,
};
pub use corpus::{AyahNumber, Corpus};
pub use cycle::{FetchCycle, RefreshController, RefreshOutcome, Ticket};
pub use error::{
    ClipboardAttempt, ClipboardError, CorpusError, FetchError, OpenError, SpeechError,
};
pub use input::{is_activation_key, Action};
pub use ports::{HttpReply, VerseSource, VerseView};
pub use share::{
    encode_uri_component, share_current_verse, LinkOpener, SharePlatform, UnknownPlatform,
    SHARE_TARGET,
};
pub use speech::{read_aloud, Speaker};
pub use verse::{parse_reply, DisplayedVerse};
